//! 応答検証
//!
//! 完了エンドポイントの生テキストを型付きの結果にする。修復はしない（型変換・丸め・トリムなし）。
//! 失敗は ParseFailure として返し、内部で再試行もしない。

use serde_json::{Map, Value};

use super::error::ParseFailure;
use super::fence::strip_fences;
use super::kind::AuditKind;
use super::model::{
    AuditPayload, Indicator, NarrativeResult, PensumIndicator, SonicaIndicator, SupremacyResult,
    TranscriptionResult,
};

const SVG_PREFIX: &str = "<svg";
const MAX_SCORE: u64 = 100;

/// 種別ごとの形で生テキストを検証する
pub fn validate(kind: AuditKind, raw: &str) -> Result<AuditPayload, ParseFailure> {
    match kind {
        AuditKind::Supremacy => validate_supremacy(raw).map(AuditPayload::Supremacy),
        AuditKind::SynapticTranscription => {
            validate_transcription(raw).map(AuditPayload::Transcription)
        }
        AuditKind::Faith
        | AuditKind::Fingerprint
        | AuditKind::Failure
        | AuditKind::Comparison
        | AuditKind::CodeHarmony => validate_narrative(raw).map(AuditPayload::Narrative),
    }
}

pub fn validate_supremacy(raw: &str) -> Result<SupremacyResult, ParseFailure> {
    let value = parse_json(raw)?;
    supremacy_from_value(&value)
}

pub fn validate_transcription(raw: &str) -> Result<TranscriptionResult, ParseFailure> {
    let value = parse_json(raw)?;
    let obj = object(&value, "$")?;
    let narrative = string_field(obj, "code", "$")?;
    let svg_markup = string_field(obj, "preview", "$")?;
    if !svg_markup.trim().starts_with(SVG_PREFIX) {
        return Err(mismatch(format!(
            "$.preview must start with `{}`",
            SVG_PREFIX
        )));
    }
    Ok(TranscriptionResult {
        narrative,
        svg_markup,
    })
}

/// 自由文: フェンス除去後に空でなければそのまま返す
pub fn validate_narrative(raw: &str) -> Result<NarrativeResult, ParseFailure> {
    let text = strip_fences(raw);
    if text.is_empty() {
        return Err(ParseFailure::EmptyResponse);
    }
    Ok(NarrativeResult::new(text))
}

fn parse_json(raw: &str) -> Result<Value, ParseFailure> {
    serde_json::from_str(strip_fences(raw)).map_err(|e| ParseFailure::MalformedJson(e.to_string()))
}

/// 主監査の形を JSON 値から検証する（履歴の読み込みでも同じ規則を使う）
pub(crate) fn supremacy_from_value(value: &Value) -> Result<SupremacyResult, ParseFailure> {
    let obj = object(value, "$")?;
    let target = text_field(obj, "target", "$")?;

    let cts = object_field(obj, "cts")?;
    let hrl = object_field(obj, "hrl")?;
    let pensum = object_field(obj, "pensum")?;
    let sonica = object_field(obj, "sonica")?;

    Ok(SupremacyResult {
        target,
        cts: Indicator {
            score: score_field(cts, "$.cts")?,
            analysis: text_field(cts, "analysis", "$.cts")?,
        },
        hrl: Indicator {
            score: score_field(hrl, "$.hrl")?,
            analysis: text_field(hrl, "analysis", "$.hrl")?,
        },
        pensum: PensumIndicator {
            score: score_field(pensum, "$.pensum")?,
            prediction: text_field(pensum, "prediction", "$.pensum")?,
        },
        sonica: SonicaIndicator {
            score: score_field(sonica, "$.sonica")?,
            recommendation: text_field(sonica, "recommendation", "$.sonica")?,
        },
        captured_at: None,
    })
}

fn mismatch(detail: String) -> ParseFailure {
    ParseFailure::SchemaMismatch(detail)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>, ParseFailure> {
    value
        .as_object()
        .ok_or_else(|| mismatch(format!("{} must be an object, got {}", path, type_name(value))))
}

fn object_field<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>, ParseFailure> {
    let path = format!("$.{}", key);
    match obj.get(key) {
        Some(v) => object(v, &path),
        None => Err(mismatch(format!("missing key {}", path))),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str, path: &str) -> Result<String, ParseFailure> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(mismatch(format!(
            "{}.{} must be a string, got {}",
            path,
            key,
            type_name(other)
        ))),
        None => Err(mismatch(format!("missing key {}.{}", path, key))),
    }
}

fn text_field(obj: &Map<String, Value>, key: &str, path: &str) -> Result<String, ParseFailure> {
    let s = string_field(obj, key, path)?;
    if s.trim().is_empty() {
        return Err(mismatch(format!("{}.{} must not be blank", path, key)));
    }
    Ok(s)
}

fn score_field(obj: &Map<String, Value>, path: &str) -> Result<u8, ParseFailure> {
    let value = obj
        .get("score")
        .ok_or_else(|| mismatch(format!("missing key {}.score", path)))?;
    if !value.is_number() {
        return Err(mismatch(format!(
            "{}.score must be a number, got {}",
            path,
            type_name(value)
        )));
    }
    value
        .as_u64()
        .filter(|s| *s <= MAX_SCORE)
        .map(|s| s as u8)
        .ok_or_else(|| {
            mismatch(format!(
                "{}.score must be an integer between 0 and {}, got {}",
                path, MAX_SCORE, value
            ))
        })
}
