//! 単発 LLM 完了の標準実装
//!
//! プロファイル解決とドライバ生成は complete() の時点で行う。
//! 履歴表示やヘルプのように LLM を使わないコマンドでは API キーを要求しない。

use common::config::AtheneaConfig;
use common::domain::{ModelName, ProviderName};
use common::error::Error;
use common::llm::{create_driver, resolve_provider};

use crate::ports::outbound::Completion;

pub struct StdLlmCompletion {
    config: AtheneaConfig,
    profile: Option<ProviderName>,
    model: Option<ModelName>,
}

impl StdLlmCompletion {
    pub fn new(config: AtheneaConfig, profile: Option<ProviderName>, model: Option<ModelName>) -> Self {
        Self {
            config,
            profile,
            model,
        }
    }
}

impl Completion for StdLlmCompletion {
    fn complete(&self, prompt: &str) -> Result<String, Error> {
        let resolved = resolve_provider(self.profile.as_ref(), self.model.as_ref(), &self.config)?;
        let driver = create_driver(resolved.provider_type, resolved.model, resolved.api_key_env)?;
        driver.query(prompt)
    }
}
