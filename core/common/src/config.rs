//! config.json 用の設定型
//!
//! プロバイダプロファイル（名前 -> 種別・モデル・API キー環境変数）と、
//! アクセスゲートのハッシュ・履歴ファイル名を持つ。ファイル読みは呼び出し側で行う。

use crate::llm::ProviderType;
use serde::Deserialize;
use std::collections::HashMap;

pub const DEFAULT_HISTORY_FILE: &str = "AAS_AUDIT_HISTORY.json";

/// config.json のルート
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AtheneaConfig {
    /// 未指定時に使うプロバイダ名
    pub default_provider: Option<String>,
    /// プロバイダ名 -> プロファイル
    pub providers: HashMap<String, ProviderProfile>,
    /// アクセスコードの SHA-256（hex）。設定されているときだけゲートを通す
    pub access_code_sha256: Option<String>,
    /// 履歴ファイル名（ホームからの相対、または絶対パス）
    pub history_file: Option<String>,
}

/// 1 プロバイダ分の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub type_: ProviderType,
    /// モデル名（省略時は各プロバイダのデフォルト）
    pub model: Option<String>,
    /// API キーを読む環境変数名（省略時は各プロバイダのデフォルト）
    pub api_key_env: Option<String>,
}

impl ProviderProfile {
    /// 組み込みプロファイル（config.json に無い名前のフォールバック）
    pub fn builtin(name: &str) -> Option<Self> {
        ProviderType::from_str(name).map(|type_| Self {
            type_,
            model: None,
            api_key_env: None,
        })
    }
}

/// serde 用の内部構造（type が予約語のため）
#[derive(Debug, Deserialize)]
struct AtheneaConfigRaw {
    #[serde(alias = "default")]
    default_provider: Option<String>,
    providers: Option<HashMap<String, ProviderProfileRaw>>,
    access_code_sha256: Option<String>,
    history_file: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderProfileRaw {
    #[serde(rename = "type", alias = "provider")]
    type_: ProviderType,
    #[serde(alias = "default_model")]
    model: Option<String>,
    api_key_env: Option<String>,
}

impl From<ProviderProfileRaw> for ProviderProfile {
    fn from(r: ProviderProfileRaw) -> Self {
        ProviderProfile {
            type_: r.type_,
            model: r.model,
            api_key_env: r.api_key_env,
        }
    }
}

impl AtheneaConfig {
    /// JSON 文字列からパース
    pub fn parse(json: &str) -> Result<Self, serde_json::Error> {
        let raw: AtheneaConfigRaw = serde_json::from_str(json)?;
        let providers = raw
            .providers
            .unwrap_or_default()
            .into_iter()
            .map(|(k, v)| (k, v.into()))
            .collect();
        Ok(AtheneaConfig {
            default_provider: raw.default_provider,
            providers,
            access_code_sha256: raw.access_code_sha256.filter(|s| !s.trim().is_empty()),
            history_file: raw.history_file,
        })
    }

    /// プロファイル名を解決する（設定 → 組み込みの順）
    pub fn profile(&self, name: &str) -> Option<ProviderProfile> {
        self.providers
            .get(name)
            .cloned()
            .or_else(|| ProviderProfile::builtin(name))
    }

    pub fn history_file(&self) -> &str {
        self.history_file.as_deref().unwrap_or(DEFAULT_HISTORY_FILE)
    }

    /// 一覧用のプロファイル名（設定 + 組み込み、名前順）
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        for builtin in ProviderType::ALL {
            if !self.providers.contains_key(builtin.as_str()) {
                names.push(builtin.as_str().to_string());
            }
        }
        names.sort();
        names
    }
}
