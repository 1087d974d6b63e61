//! 検証済みの監査結果
//!
//! 値は検証層（validate）だけが組み立てる。生成後は変更せず、新しい監査は新しい値を作る。

use chrono::{DateTime, Utc};
use serde::Serialize;

/// CTS / HRL の指標
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub score: u8,
    pub analysis: String,
}

/// PENSUM（予測可能性）の指標
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PensumIndicator {
    pub score: u8,
    pub prediction: String,
}

/// SÓNICA（調和的な純度）の指標
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SonicaIndicator {
    pub score: u8,
    pub recommendation: String,
}

/// 主監査の結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupremacyResult {
    pub target: String,
    pub cts: Indicator,
    pub hrl: Indicator,
    pub pensum: PensumIndicator,
    pub sonica: SonicaIndicator,
    /// 取得時刻（モデルではなくオーケストレーション層が付ける）
    #[serde(rename = "capturedAt", skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<DateTime<Utc>>,
}

impl SupremacyResult {
    /// CTS, HRL, PENSUM, SÓNICA の順
    pub fn scores(&self) -> [u8; 4] {
        [self.cts.score, self.hrl.score, self.pensum.score, self.sonica.score]
    }

    /// 取得時刻を付けた新しい値を返す
    pub fn captured(self, at: DateTime<Utc>) -> Self {
        Self {
            captured_at: Some(at),
            ..self
        }
    }
}

/// コードの SVG 書き起こし結果
///
/// `svg_markup` は前後の空白を除くと `<svg` で始まることだけが保証される。
/// XML として正しいかは確認していないので、描画側は信頼できない入力として扱うこと。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptionResult {
    #[serde(rename = "code")]
    pub narrative: String,
    #[serde(rename = "preview")]
    pub svg_markup: String,
}

/// 自由文の結果（空でないことだけが保証される）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NarrativeResult(String);

impl NarrativeResult {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn into_text(self) -> String {
        self.0
    }
}

/// 検証層が返す型付きペイロード
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AuditPayload {
    Supremacy(SupremacyResult),
    Transcription(TranscriptionResult),
    Narrative(NarrativeResult),
}

impl AuditPayload {
    pub fn as_supremacy(&self) -> Option<&SupremacyResult> {
        match self {
            Self::Supremacy(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_transcription(&self) -> Option<&TranscriptionResult> {
        match self {
            Self::Transcription(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_narrative(&self) -> Option<&NarrativeResult> {
        match self {
            Self::Narrative(r) => Some(r),
            _ => None,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::supremacy;
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_scores_order() {
        let r = supremacy("example.com", [80, 70, 60, 90]);
        assert_eq!(r.scores(), [80, 70, 60, 90]);
    }

    #[test]
    fn test_captured_returns_new_value() {
        let at = Utc.with_ymd_and_hms(2025, 11, 6, 12, 0, 0).unwrap();
        let r = supremacy("example.com", [1, 2, 3, 4]);
        let stamped = r.clone().captured(at);
        assert!(r.captured_at.is_none());
        assert_eq!(stamped.captured_at, Some(at));
        assert_eq!(stamped.target, r.target);
    }

    #[test]
    fn test_serialize_skips_missing_timestamp() {
        let json = serde_json::to_value(supremacy("example.com", [1, 2, 3, 4])).unwrap();
        assert!(json.get("capturedAt").is_none());
        assert_eq!(json["cts"]["score"], 1);
        assert_eq!(json["pensum"]["prediction"], "nuevo producto en Q3");
    }

    #[test]
    fn test_transcription_serializes_with_wire_keys() {
        let t = TranscriptionResult {
            narrative: "informe".to_string(),
            svg_markup: "<svg></svg>".to_string(),
        };
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(json["code"], "informe");
        assert_eq!(json["preview"], "<svg></svg>");
    }
}
