//! 標準アダプター（outbound ポートの実装）
//!
//! usecase は ports::outbound の trait 経由でのみファイル・時刻・環境変数・ログに触れる。
//! ここには標準実装（Std*）とログの実装を置き、テストではモックを注入する。

pub mod file_json_log;
pub mod std_clock;
pub mod std_env_resolver;
pub mod std_fs;

pub use file_json_log::{FileJsonLog, NoopLog, StderrLog, TeeLog};
pub use std_clock::StdClock;
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
