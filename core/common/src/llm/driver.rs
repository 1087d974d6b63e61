//! LLMドライバーの実装
//!
//! プロバイダに依存しない共通処理（ペイロード生成 → 送信 → テキスト抽出）。

use crate::error::Error;
use crate::llm::provider::LlmProvider;

/// LLMドライバー（プロバイダは trait object で持つ）
pub struct LlmDriver {
    provider: Box<dyn LlmProvider>,
}

impl LlmDriver {
    pub fn new(provider: impl LlmProvider + 'static) -> Self {
        Self::from_boxed(Box::new(provider))
    }

    pub fn from_boxed(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// プロンプトを送信して応答テキストを返す
    ///
    /// 応答にテキストが無い場合は空文字列を返す（空かどうかの判定は検証層に任せる）。
    pub fn query(&self, prompt: &str) -> Result<String, Error> {
        let payload = self.provider.make_request_payload(prompt)?;
        let request_json = serde_json::to_string(&payload)
            .map_err(|e| Error::json(format!("Failed to serialize request: {}", e)))?;
        let response_json = self.provider.make_http_request(&request_json)?;
        let text = self.provider.parse_response_text(&response_json)?;
        Ok(text.unwrap_or_default())
    }

    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    enum Mode {
        Ok,
        HttpError,
        NoText,
    }

    struct MockProvider {
        mode: Mode,
    }

    impl LlmProvider for MockProvider {
        fn name(&self) -> &str {
            "mock"
        }

        fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
            Ok(json!({ "contents": [{ "role": "user", "parts": [{ "text": prompt }] }] }))
        }

        fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
            match self.mode {
                Mode::HttpError => Err(Error::http("HTTP request failed")),
                Mode::NoText => Ok(r#"{"candidates":[]}"#.to_string()),
                Mode::Ok => {
                    let req: Value = serde_json::from_str(request_json)?;
                    let prompt = req["contents"][0]["parts"][0]["text"].as_str().unwrap_or("");
                    Ok(json!({ "candidates": [{ "content": { "parts": [{ "text": format!("re: {}", prompt) }] } }] })
                        .to_string())
                }
            }
        }

        fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
            let v: Value = serde_json::from_str(response_json)?;
            Ok(v["candidates"][0]["content"]["parts"][0]["text"]
                .as_str()
                .map(|s| s.to_string()))
        }
    }

    #[test]
    fn test_query_round_trips_prompt() {
        let driver = LlmDriver::new(MockProvider { mode: Mode::Ok });
        assert_eq!(driver.provider().name(), "mock");
        assert_eq!(driver.query("example.com").unwrap(), "re: example.com");
    }

    #[test]
    fn test_query_propagates_http_error() {
        let driver = LlmDriver::new(MockProvider { mode: Mode::HttpError });
        let err = driver.query("x").unwrap_err();
        assert!(err.to_string().contains("HTTP request failed"));
        assert_eq!(err.exit_code(), 69);
    }

    #[test]
    fn test_query_without_text_is_empty() {
        let driver = LlmDriver::new(MockProvider { mode: Mode::NoText });
        assert_eq!(driver.query("x").unwrap(), "");
    }
}
