//! プロバイダファクトリー
//!
//! 設定のプロバイダ種別から LlmProvider とドライバーを作る。

use crate::error::Error;
use crate::llm::driver::LlmDriver;
use crate::llm::echo::EchoProvider;
use crate::llm::gemini::GeminiProvider;
use crate::llm::provider::LlmProvider;
use serde::Deserialize;

/// config.json の `type` に書くプロバイダ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    Gemini,
    /// プロンプトをそのまま返す（ネットワークを使わない）
    Echo,
}

impl ProviderType {
    pub const ALL: [ProviderType; 2] = [ProviderType::Gemini, ProviderType::Echo];

    /// 大文字小文字を区別せずに名前から引く
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::Echo => "echo",
        }
    }
}

/// プロバイダを作る
///
/// Gemini は API キーの環境変数が無ければここで Error::env になる。
pub fn create_provider(
    provider_type: ProviderType,
    model: Option<String>,
    api_key_env: Option<String>,
) -> Result<Box<dyn LlmProvider>, Error> {
    Ok(match provider_type {
        ProviderType::Gemini => Box::new(GeminiProvider::new(model, api_key_env)?),
        ProviderType::Echo => Box::new(EchoProvider),
    })
}

pub fn create_driver(
    provider_type: ProviderType,
    model: Option<String>,
    api_key_env: Option<String>,
) -> Result<LlmDriver, Error> {
    create_provider(provider_type, model, api_key_env).map(LlmDriver::from_boxed)
}
