//! 単発 LLM 完了の Outbound ポート
//!
//! 1 回のプロンプトで全文応答を取得する（監査 1 件につき 1 回、リトライなし）。

use common::error::Error;

pub trait Completion: Send + Sync {
    fn complete(&self, prompt: &str) -> Result<String, Error>;
}
