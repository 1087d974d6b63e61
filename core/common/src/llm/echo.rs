//! Echo プロバイダ
//!
//! LLM API を呼ばず、プロンプトをそのまま応答テキストとして返す。デバッグ・テスト用。

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};

#[derive(Debug, Clone, Default)]
pub struct EchoProvider;

impl EchoProvider {
    pub fn new() -> Self {
        Self
    }
}

impl LlmProvider for EchoProvider {
    fn name(&self) -> &str {
        "echo"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({ "prompt": prompt }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        Ok(request_json.to_string())
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)?;
        Ok(v["prompt"].as_str().map(|s| s.to_string()))
    }
}
