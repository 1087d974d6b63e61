//! 監査履歴（新しい順・上限 10 件）
//!
//! 永続化の形式は JSON 配列。読み込み時に形の合わないエントリは捨てる（読み込み全体は失敗させない）。

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::VecDeque;

use super::model::SupremacyResult;
use super::validate::supremacy_from_value;

pub const HISTORY_CAPACITY: usize = 10;

/// 完了した主監査の履歴
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<SupremacyResult>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しい順に並んだエントリから作る（上限を超えた古いものは捨てる）
    pub fn from_entries(entries: impl IntoIterator<Item = SupremacyResult>) -> Self {
        Self {
            entries: entries.into_iter().take(HISTORY_CAPACITY).collect(),
        }
    }

    /// 先頭に追加する。上限を超えたら最も古いエントリを返す
    pub fn push(&mut self, result: SupremacyResult) -> Option<SupremacyResult> {
        self.entries.push_front(result);
        if self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back()
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&SupremacyResult> {
        self.entries.get(index)
    }

    pub fn latest(&self) -> Option<&SupremacyResult> {
        self.entries.front()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SupremacyResult> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 読み込み結果（捨てたエントリ数つき）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLoad {
    pub history: History,
    pub dropped: usize,
}

/// JSON 配列に変換する（新しい順）
pub fn encode_history(history: &History) -> Result<Value, serde_json::Error> {
    serde_json::to_value(history.entries.iter().collect::<Vec<_>>())
}

/// JSON 値から履歴を復元する
///
/// 配列でなければ空の履歴。各エントリは主監査と同じ形の規則で検証し、
/// `capturedAt` があれば RFC3339 として読む。合わないエントリは数えて捨てる。
pub fn decode_history(value: &Value) -> HistoryLoad {
    let Some(items) = value.as_array() else {
        return HistoryLoad {
            history: History::new(),
            dropped: 0,
        };
    };
    let mut kept = Vec::new();
    let mut dropped = 0;
    for item in items {
        match decode_entry(item) {
            Some(entry) => kept.push(entry),
            None => dropped += 1,
        }
    }
    HistoryLoad {
        history: History::from_entries(kept),
        dropped,
    }
}

fn decode_entry(item: &Value) -> Option<SupremacyResult> {
    let result = supremacy_from_value(item).ok()?;
    match item.get("capturedAt") {
        None | Some(Value::Null) => Some(result),
        Some(Value::String(s)) => {
            let at = DateTime::parse_from_rfc3339(s).ok()?.with_timezone(&Utc);
            Some(result.captured(at))
        }
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::model::fixtures::supremacy;
    use chrono::TimeZone;

    fn numbered(n: usize) -> SupremacyResult {
        supremacy(&format!("target-{}", n), [50, 50, 50, 50])
    }

    #[test]
    fn test_push_is_most_recent_first() {
        let mut h = History::new();
        h.push(numbered(1));
        h.push(numbered(2));
        assert_eq!(h.latest().unwrap().target, "target-2");
        assert_eq!(h.get(1).unwrap().target, "target-1");
    }

    #[test]
    fn test_eleventh_push_evicts_oldest() {
        let mut h = History::new();
        for n in 1..=HISTORY_CAPACITY {
            assert!(h.push(numbered(n)).is_none());
        }
        let evicted = h.push(numbered(11)).unwrap();
        assert_eq!(evicted.target, "target-1");
        assert_eq!(h.len(), HISTORY_CAPACITY);
        assert_eq!(h.latest().unwrap().target, "target-11");
        assert_eq!(h.get(HISTORY_CAPACITY - 1).unwrap().target, "target-2");
    }

    #[test]
    fn test_never_exceeds_capacity() {
        let mut h = History::new();
        for n in 0..50 {
            h.push(numbered(n));
            assert!(h.len() <= HISTORY_CAPACITY);
        }
        let targets: Vec<_> = h.iter().map(|r| r.target.clone()).collect();
        assert_eq!(targets.first().unwrap(), "target-49");
        assert_eq!(targets.last().unwrap(), "target-40");
    }

    #[test]
    fn test_from_entries_truncates() {
        let h = History::from_entries((0..15).map(numbered));
        assert_eq!(h.len(), HISTORY_CAPACITY);
        assert_eq!(h.latest().unwrap().target, "target-0");
    }

    #[test]
    fn test_encode_decode_keeps_order_and_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 11, 6, 9, 30, 0).unwrap();
        let mut h = History::new();
        h.push(numbered(1));
        h.push(numbered(2).captured(at));
        let json = encode_history(&h).unwrap();
        assert_eq!(json[0]["capturedAt"], "2025-11-06T09:30:00Z");

        let load = decode_history(&json);
        assert_eq!(load.dropped, 0);
        assert_eq!(load.history, h);
    }

    #[test]
    fn test_decode_drops_malformed_entries() {
        let good = serde_json::to_value(numbered(1)).unwrap();
        let mut bad_score = good.clone();
        bad_score["cts"]["score"] = serde_json::json!("alto");
        let mut bad_time = good.clone();
        bad_time["capturedAt"] = serde_json::json!("ayer");
        let value = serde_json::json!([good, bad_score, 42, bad_time, { "target": "x" }]);

        let load = decode_history(&value);
        assert_eq!(load.history.len(), 1);
        assert_eq!(load.dropped, 4);
    }

    #[test]
    fn test_decode_non_array_is_empty() {
        let load = decode_history(&serde_json::json!({ "entries": [] }));
        assert!(load.history.is_empty());
        assert_eq!(load.dropped, 0);
    }
}
