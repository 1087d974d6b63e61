//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（LLM・履歴ファイル・読み上げ・割り込み・端末プローブ）を使うための trait

pub mod inbound;
pub mod outbound;
