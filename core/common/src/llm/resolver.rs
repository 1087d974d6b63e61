//! config.json の読み込みとプロバイダ解決

use crate::config::AtheneaConfig;
use crate::domain::{ModelName, ProviderName};
use crate::error::Error;
use crate::llm::factory::ProviderType;
use crate::ports::outbound::FileSystem;
use std::path::Path;

/// 解決済みプロバイダ（ProviderType + オプション）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProvider {
    /// 解決に使ったプロファイル名（例: "fast", "gemini"）。エラー表示用
    pub profile_name: String,
    pub provider_type: ProviderType,
    pub model: Option<String>,
    pub api_key_env: Option<String>,
}

/// config.json を読み込む。ファイルが無ければ既定値、JSON が壊れていれば Err（メッセージにパスを含める）
pub fn load_config(fs: &dyn FileSystem, path: &Path) -> Result<AtheneaConfig, Error> {
    if !fs.exists(path) {
        return Ok(AtheneaConfig::default());
    }
    let contents = fs.read_to_string(path)?;
    AtheneaConfig::parse(&contents).map_err(|e| Error::json(format!("{}: {}", path.display(), e)))
}

/// 要求されたプロファイル名（None なら default_provider、それも無ければ gemini）を解決する。
/// `model` を指定するとプロファイルのモデルより優先する。
/// 不明なプロファイルは Error::invalid_argument（利用可能な名前の一覧つき）。
pub fn resolve_provider(
    requested: Option<&ProviderName>,
    model: Option<&ModelName>,
    cfg: &AtheneaConfig,
) -> Result<ResolvedProvider, Error> {
    let effective_name: &str = requested
        .map(|r| r.as_ref())
        .or(cfg.default_provider.as_deref())
        .unwrap_or(ProviderType::Gemini.as_str());

    let profile = cfg.profile(effective_name).ok_or_else(|| {
        Error::invalid_argument(format!(
            "Unknown provider: '{}'. Available: {}",
            effective_name,
            cfg.profile_names().join(", ")
        ))
    })?;

    Ok(ResolvedProvider {
        profile_name: effective_name.to_string(),
        provider_type: profile.type_,
        model: model.map(|m| m.to_string()).or(profile.model),
        api_key_env: profile.api_key_env,
    })
}
