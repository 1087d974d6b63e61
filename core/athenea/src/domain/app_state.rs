//! アプリケーション状態
//!
//! 監査の結果・失敗表示・履歴・スロットごとの実行中フラグを 1 つの構造体にまとめる。
//! 更新するのはユースケースのアクションだけで、描画側は読むだけ。

use common::audit::{
    AuditKind, ActionSlot, History, NarrativeResult, SupremacyResult, TranscriptionResult,
};
use std::collections::HashMap;

/// 1 スロット分の表示内容: 成功した結果か、失敗時の固定文言
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report<T> {
    Ready(T),
    Failed(&'static str),
}

impl<T> Report<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            Self::Failed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    current: Option<SupremacyResult>,
    main_failed: bool,
    advanced: HashMap<AuditKind, Report<NarrativeResult>>,
    code_harmony: Option<Report<NarrativeResult>>,
    transcription: Option<Report<TranscriptionResult>>,
    history: History,
    busy: [bool; 4],
}

impl AppState {
    pub fn new(history: History) -> Self {
        Self {
            history,
            ..Self::default()
        }
    }

    pub fn current(&self) -> Option<&SupremacyResult> {
        self.current.as_ref()
    }

    /// 直前の主監査が失敗したか
    pub fn main_failed(&self) -> bool {
        self.main_failed
    }

    pub fn advanced(&self, kind: AuditKind) -> Option<&Report<NarrativeResult>> {
        self.advanced.get(&kind)
    }

    pub fn code_harmony(&self) -> Option<&Report<NarrativeResult>> {
        self.code_harmony.as_ref()
    }

    pub fn transcription(&self) -> Option<&Report<TranscriptionResult>> {
        self.transcription.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// 高度分析の既定の対象（現在の結果、無ければ履歴の最新）
    pub fn default_target(&self) -> Option<&str> {
        self.current
            .as_ref()
            .or_else(|| self.history.latest())
            .map(|r| r.target.as_str())
    }

    pub fn is_busy(&self, slot: ActionSlot) -> bool {
        self.busy[slot.index()]
    }

    /// スロットを確保する。既に実行中なら false
    pub fn try_acquire(&mut self, slot: ActionSlot) -> bool {
        let flag = &mut self.busy[slot.index()];
        if *flag {
            return false;
        }
        *flag = true;
        true
    }

    pub fn release(&mut self, slot: ActionSlot) {
        self.busy[slot.index()] = false;
    }

    /// 監査開始時に、その種別が上書きする表示を消す
    ///
    /// 主監査は現在の結果と派生する分析（高度分析・SÓNICA・書き起こし）をまとめて消す。
    pub fn begin(&mut self, kind: AuditKind) {
        match kind.slot() {
            ActionSlot::Main => {
                self.current = None;
                self.main_failed = false;
                self.advanced.clear();
                self.code_harmony = None;
                self.transcription = None;
            }
            ActionSlot::Advanced => {
                self.advanced.remove(&kind);
            }
            ActionSlot::CodeHarmony => self.code_harmony = None,
            ActionSlot::Transcription => self.transcription = None,
        }
    }

    /// 主監査の成功: 現在の結果にして履歴の先頭へ。上限で押し出された結果を返す
    pub fn complete_supremacy(&mut self, result: SupremacyResult) -> Option<SupremacyResult> {
        self.current = Some(result.clone());
        self.history.push(result)
    }

    pub fn complete_narrative(&mut self, kind: AuditKind, result: NarrativeResult) {
        match kind.slot() {
            ActionSlot::CodeHarmony => self.code_harmony = Some(Report::Ready(result)),
            _ => {
                self.advanced.insert(kind, Report::Ready(result));
            }
        }
    }

    pub fn complete_transcription(&mut self, result: TranscriptionResult) {
        self.transcription = Some(Report::Ready(result));
    }

    /// 失敗時の固定文言を設定する
    pub fn fail(&mut self, kind: AuditKind) {
        let placeholder = kind.failure_placeholder();
        match kind.slot() {
            ActionSlot::Main => self.main_failed = true,
            ActionSlot::Advanced => {
                self.advanced.insert(kind, Report::Failed(placeholder));
            }
            ActionSlot::CodeHarmony => self.code_harmony = Some(Report::Failed(placeholder)),
            ActionSlot::Transcription => self.transcription = Some(Report::Failed(placeholder)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::audit::{validate, AuditPayload};

    fn supremacy(target: &str) -> SupremacyResult {
        let raw = format!(
            r#"{{"target":"{}","cts":{{"score":80,"analysis":"a"}},"hrl":{{"score":70,"analysis":"b"}},"pensum":{{"score":60,"prediction":"c"}},"sonica":{{"score":90,"recommendation":"d"}}}}"#,
            target
        );
        match validate(AuditKind::Supremacy, &raw) {
            Ok(AuditPayload::Supremacy(r)) => r,
            other => panic!("unexpected: {:?}", other),
        }
    }

    fn narrative(text: &str) -> NarrativeResult {
        match validate(AuditKind::Faith, text) {
            Ok(AuditPayload::Narrative(n)) => n,
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_slots_are_independent() {
        let mut s = AppState::default();
        assert!(s.try_acquire(ActionSlot::Main));
        assert!(!s.try_acquire(ActionSlot::Main));
        assert!(s.try_acquire(ActionSlot::Transcription));
        assert!(s.is_busy(ActionSlot::Main));
        assert!(!s.is_busy(ActionSlot::Advanced));
        s.release(ActionSlot::Main);
        assert!(s.try_acquire(ActionSlot::Main));
    }

    #[test]
    fn test_new_main_audit_clears_derived_reports() {
        let mut s = AppState::default();
        s.complete_supremacy(supremacy("a.com"));
        s.complete_narrative(AuditKind::Faith, narrative("fe"));
        s.fail(AuditKind::SynapticTranscription);

        s.begin(AuditKind::Supremacy);
        assert!(s.current().is_none());
        assert!(s.advanced(AuditKind::Faith).is_none());
        assert!(s.transcription().is_none());
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_fail_sets_placeholders() {
        let mut s = AppState::default();
        s.fail(AuditKind::Comparison);
        s.fail(AuditKind::CodeHarmony);
        s.fail(AuditKind::Supremacy);
        assert_eq!(
            s.advanced(AuditKind::Comparison),
            Some(&Report::Failed("[ ANÁLISIS NO CONVERGENTE ]"))
        );
        assert_eq!(
            s.code_harmony(),
            Some(&Report::Failed("[ INFORME NO CONCLUYENTE ]"))
        );
        assert!(s.main_failed());
    }

    #[test]
    fn test_default_target_prefers_current_then_history() {
        let mut history = History::new();
        history.push(supremacy("old.com"));
        let mut s = AppState::new(history);
        assert_eq!(s.default_target(), Some("old.com"));
        s.complete_supremacy(supremacy("new.com"));
        assert_eq!(s.default_target(), Some("new.com"));
        assert!(AppState::default().default_target().is_none());
    }

    #[test]
    fn test_narrative_routing() {
        let mut s = AppState::default();
        s.complete_narrative(AuditKind::CodeHarmony, narrative("informe"));
        s.complete_narrative(AuditKind::Fingerprint, narrative("huella"));
        assert_eq!(s.code_harmony().and_then(|r| r.ready()).map(|n| n.text()), Some("informe"));
        assert_eq!(
            s.advanced(AuditKind::Fingerprint).and_then(|r| r.ready()).map(|n| n.text()),
            Some("huella")
        );
    }
}
