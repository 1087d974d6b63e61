//! 監査コア
//!
//! プロンプト生成（prompt）と応答検証（validate）の純粋関数、検証済みの結果型、
//! 履歴・派生指標・ドシエ出力をまとめる。I/O は一切行わない。

pub mod dossier;
pub mod error;
pub mod fence;
pub mod history;
pub mod insight;
pub mod kind;
pub mod model;
pub mod prompt;
pub mod validate;

pub use dossier::{dossier_file_name, render_dossier};
pub use error::{AuditError, ParseFailure, PreconditionViolation};
pub use fence::strip_fences;
pub use history::{decode_history, encode_history, History, HistoryLoad, HISTORY_CAPACITY};
pub use insight::{gauge_band, GaugeBand, HolisticAnalysis, NarrationTone, WebVitals, DEFAULT_TREND};
pub use kind::{ActionSlot, AuditKind, RequiredParam, ResponseShape};
pub use model::{
    AuditPayload, Indicator, NarrativeResult, PensumIndicator, SonicaIndicator, SupremacyResult,
    TranscriptionResult,
};
pub use prompt::{build, AuditParams};
pub use validate::validate;
