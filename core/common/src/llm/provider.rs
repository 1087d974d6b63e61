//! LLMプロバイダのトレイト定義

use crate::error::Error;
use serde_json::Value;

/// LLMプロバイダのトレイト
///
/// 各プロバイダ（Gemini、Echo）はこのトレイトを実装する。
/// 1 リクエスト = 1 プロンプトで、会話履歴やツール呼び出しは持たない。
pub trait LlmProvider: Send + Sync {
    /// プロバイダ名を返す
    fn name(&self) -> &str;

    /// リクエストペイロードを生成
    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error>;

    /// HTTPリクエストを実行してレスポンスJSON文字列を取得
    fn make_http_request(&self, request_json: &str) -> Result<String, Error>;

    /// レスポンスからテキストを抽出（存在しない場合は None）
    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error>;
}
