//! Gemini プロバイダの実装（generateContent、非ストリーミング）

use crate::error::Error;
use crate::llm::provider::LlmProvider;
use serde_json::{json, Value};
use std::env;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini プロバイダ
pub struct GeminiProvider {
    model: String,
    api_key: String,
}

impl GeminiProvider {
    /// 環境変数から API キーを読んでプロバイダを作成
    ///
    /// * `model` - 省略時は gemini-2.5-flash
    /// * `api_key_env` - 省略時は GEMINI_API_KEY
    pub fn new(model: Option<String>, api_key_env: Option<String>) -> Result<Self, Error> {
        let key_env = api_key_env.unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string());
        let api_key = env::var(&key_env)
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| Error::env(format!("{} environment variable is not set", key_env)))?;
        Ok(Self::with_api_key(model, api_key))
    }

    pub fn with_api_key(model: Option<String>, api_key: impl Into<String>) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: api_key.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent?key={}", BASE_URL, self.model, self.api_key)
    }
}

/// エラーレスポンスからメッセージを取り出す
fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["error"]["message"].as_str().map(|s| s.to_string()))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

impl LlmProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn make_request_payload(&self, prompt: &str) -> Result<Value, Error> {
        Ok(json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }]
            }]
        }))
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let client = reqwest::blocking::Client::new();
        let response = client
            .post(self.endpoint())
            .header("Content-Type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e.without_url())))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            return Err(Error::http(format!(
                "Gemini API error: {}",
                api_error_message(status, &response_text)
            )));
        }
        Ok(response_text)
    }

    fn parse_response_text(&self, response_json: &str) -> Result<Option<String>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        if let Some(error) = v.get("error") {
            let msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", msg)));
        }

        // 複数 part に分かれることがあるので連結する
        let text: Option<String> = v["candidates"][0]["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(|p| p["text"].as_str()).collect());
        Ok(text.filter(|t| !t.is_empty()))
    }
}
