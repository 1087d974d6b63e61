//! Outbound ポート: アプリが外界（FS・時刻・環境変数・ログ）を使うための trait
//!
//! LLM プロバイダの trait は llm::provider にある。

pub mod clock;
pub mod env_resolver;
pub mod fs;
pub mod log;

pub use clock::Clock;
pub use env_resolver::EnvResolver;
pub use fs::FileSystem;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
