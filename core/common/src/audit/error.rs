//! 監査の失敗分類
//!
//! どれもプロセスを落とさず、呼び出し元に型付きの結果として返す。

use super::kind::{ActionSlot, AuditKind};

/// 応答テキストを型付きの結果にできなかった理由
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    /// フェンス除去後のテキストが JSON として解析できない（構造化種別のみ）
    #[error("malformed JSON in model response: {0}")]
    MalformedJson(String),
    /// JSON だがキーや値の型が期待と一致しない
    #[error("model response does not match the expected shape: {0}")]
    SchemaMismatch(String),
    /// 自由文の種別で空（空白のみ）の応答
    #[error("model returned an empty response")]
    EmptyResponse,
}

/// プロンプト生成の前提条件違反（必須パラメータの欠落・空）
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} audit requires a non-empty `{field}`")]
pub struct PreconditionViolation {
    pub kind: AuditKind,
    pub field: &'static str,
}

/// 監査 1 件分の失敗
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),
    /// 完了エンドポイントの呼び出し自体が失敗（通信・認証・クォータ）
    #[error("completion endpoint failed: {0}")]
    Transport(String),
    #[error(transparent)]
    Parse(#[from] ParseFailure),
    /// 同じスロットの監査が実行中
    #[error("{0} audit is already in flight")]
    Busy(ActionSlot),
    /// 応答待ちの間に中断された（遅れて届いた結果は破棄済み）
    #[error("audit interrupted; the late result was discarded")]
    Interrupted,
}

impl AuditError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Precondition(_) => 64,
            Self::Parse(_) => 65,
            Self::Transport(_) => 69,
            Self::Busy(_) => 75,
            Self::Interrupted => 130,
        }
    }
}
