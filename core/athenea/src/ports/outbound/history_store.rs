//! 監査履歴の永続化 Outbound ポート

use common::audit::History;
use common::error::Error;

/// 履歴の読み書き
///
/// load は壊れたエントリを捨てて読めた分だけ返す。ファイルが無ければ空の履歴。
pub trait HistoryStore: Send + Sync {
    fn load(&self) -> Result<History, Error>;
    fn save(&self, history: &History) -> Result<(), Error>;
}
