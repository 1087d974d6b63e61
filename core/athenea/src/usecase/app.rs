//! 監査ユースケース
//!
//! 1 件の監査は「プロンプト生成 → 完了呼び出し → 検証 → 状態更新」の順に進む。
//! どの段で失敗しても型付きのエラーを返し、プロセスは落とさない。

use crate::domain::AppState;
use crate::ports::outbound::{Completion, HistoryStore, InterruptChecker, Narrator};
use common::audit::{
    build, dossier_file_name, render_dossier, validate, ActionSlot, AuditError, AuditKind,
    AuditParams, AuditPayload, NarrationTone, SupremacyResult,
};
use common::error::Error;
use common::ports::outbound::{Clock, Log, LogLevel, LogRecord};
use std::sync::{Arc, Mutex, MutexGuard};

const NARRATION_COMPLETED: &str = "Análisis de supremacía completado.";
const NARRATION_FAILED: &str = "Alerta. Fallo crítico en el núcleo de inteligencia artificial.";

// --- 責務別 Deps（usecase が定義を所有し、wiring は組み立てるだけ）

pub struct AuditDeps {
    pub completion: Arc<dyn Completion>,
    pub history_store: Arc<dyn HistoryStore>,
    pub narrator: Arc<dyn Narrator>,
    pub interrupt_checker: Arc<dyn InterruptChecker>,
    pub clock: Arc<dyn Clock>,
    pub log: Arc<dyn Log>,
}

/// 監査のユースケース（アダプター経由で I/O を行う）
pub struct AuditUseCase {
    deps: AuditDeps,
    state: Mutex<AppState>,
}

/// スロットの実行中フラグを drop で必ず戻す
struct SlotGuard<'a> {
    state: &'a Mutex<AppState>,
    slot: ActionSlot,
}

impl Drop for SlotGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).release(self.slot);
    }
}

fn lock(state: &Mutex<AppState>) -> MutexGuard<'_, AppState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

impl AuditUseCase {
    /// 保存済みの履歴を読み込んで初期状態を作る
    pub fn load(deps: AuditDeps) -> Result<Self, Error> {
        let history = deps.history_store.load()?;
        Ok(Self {
            state: Mutex::new(AppState::new(history)),
            deps,
        })
    }

    /// 表示用に現在の状態を複製して返す
    pub fn snapshot(&self) -> AppState {
        lock(&self.state).clone()
    }

    fn record(&self, level: LogLevel, message: &str, kind: AuditKind) -> LogRecord {
        LogRecord::new(level, message, "usecase", "audit").with_field("audit", kind.as_str())
    }

    fn emit(&self, record: LogRecord) {
        let _ = self.deps.log.log(&record);
    }

    /// 監査を 1 件実行する
    ///
    /// 前提条件違反は状態を変えずに返す。同じスロットが実行中なら Busy。
    /// 送信前に中断済みならモデルを呼ばない。
    /// 応答を待つ間に中断されたら、届いた結果は状態にも履歴にも反映しない。
    pub fn run_audit(&self, kind: AuditKind, params: &AuditParams) -> Result<AuditPayload, AuditError> {
        let prompt = build(kind, params)?;

        let slot = kind.slot();
        if !lock(&self.state).try_acquire(slot) {
            self.emit(self.record(LogLevel::Warn, "audit rejected: slot busy", kind));
            return Err(AuditError::Busy(slot));
        }
        let _guard = SlotGuard {
            state: &self.state,
            slot,
        };
        if self.deps.interrupt_checker.is_interrupted() {
            self.emit(self.record(LogLevel::Warn, "audit interrupted before dispatch", kind));
            return Err(AuditError::Interrupted);
        }
        lock(&self.state).begin(kind);
        self.emit(
            self.record(LogLevel::Info, "audit started", kind)
                .with_field("prompt_chars", prompt.chars().count()),
        );

        let response = self.deps.completion.complete(&prompt);

        if self.deps.interrupt_checker.is_interrupted() {
            self.emit(self.record(LogLevel::Warn, "audit interrupted; discarding response", kind));
            return Err(AuditError::Interrupted);
        }

        let outcome = response
            .map_err(|e| AuditError::Transport(e.to_string()))
            .and_then(|raw| validate(kind, &raw).map_err(AuditError::from));

        match outcome {
            Ok(payload) => Ok(self.apply_success(kind, payload)),
            Err(e) => {
                self.emit(
                    self.record(LogLevel::Error, "audit failed", kind)
                        .with_field("error", e.to_string()),
                );
                lock(&self.state).fail(kind);
                if kind == AuditKind::Supremacy {
                    self.narrate(NARRATION_FAILED, NarrationTone::Shame);
                }
                Err(e)
            }
        }
    }

    fn apply_success(&self, kind: AuditKind, payload: AuditPayload) -> AuditPayload {
        match payload {
            AuditPayload::Supremacy(result) => {
                let result = result.captured(self.deps.clock.now());
                let tone = result.narration_tone();
                let history = {
                    let mut state = lock(&self.state);
                    if let Some(evicted) = state.complete_supremacy(result.clone()) {
                        self.emit(
                            self.record(LogLevel::Debug, "history entry evicted", kind)
                                .with_field("target", evicted.target),
                        );
                    }
                    state.history().clone()
                };
                if let Err(e) = self.deps.history_store.save(&history) {
                    self.emit(
                        self.record(LogLevel::Warn, "failed to persist history", kind)
                            .with_field("error", e.to_string()),
                    );
                }
                self.emit(
                    self.record(LogLevel::Info, "audit completed", kind)
                        .with_field("target", result.target.clone())
                        .with_field("average", result.average_score()),
                );
                self.narrate(NARRATION_COMPLETED, tone);
                AuditPayload::Supremacy(result)
            }
            AuditPayload::Narrative(result) => {
                lock(&self.state).complete_narrative(kind, result.clone());
                self.emit(self.record(LogLevel::Info, "audit completed", kind));
                AuditPayload::Narrative(result)
            }
            AuditPayload::Transcription(result) => {
                lock(&self.state).complete_transcription(result.clone());
                self.emit(self.record(LogLevel::Info, "audit completed", kind));
                AuditPayload::Transcription(result)
            }
        }
    }

    fn narrate(&self, text: &str, tone: NarrationTone) {
        if let Err(e) = self.deps.narrator.narrate(text, tone) {
            let _ = self.deps.log.log(
                &LogRecord::new(LogLevel::Warn, "narration failed", "usecase", "narrator")
                    .with_field("error", e.to_string()),
            );
        }
    }

    /// 高度分析の対象: 明示指定、無ければ現在の結果か履歴の最新
    pub fn advanced_target(&self, explicit: Option<&str>) -> Result<String, Error> {
        if let Some(t) = explicit {
            return Ok(t.to_string());
        }
        lock(&self.state)
            .default_target()
            .map(str::to_string)
            .ok_or_else(|| {
                Error::invalid_argument(
                    "No target given and no previous audit in history. Run `athenea audit <target>` first.",
                )
            })
    }

    /// 履歴の index 番目（0 が最新）
    pub fn history_entry(&self, index: usize) -> Result<SupremacyResult, Error> {
        let state = lock(&self.state);
        state.history().get(index).cloned().ok_or_else(|| {
            Error::invalid_argument(format!(
                "History index {} out of range ({} entries)",
                index,
                state.history().len()
            ))
        })
    }

    /// 履歴の 1 件をドシエにする。(ファイル名, 本文) を返す
    pub fn dossier(&self, index: usize) -> Result<(String, String), Error> {
        let entry = self.history_entry(index)?;
        let body = render_dossier(&entry, self.deps.clock.now());
        Ok((dossier_file_name(&entry.target), body))
    }
}
