//! エラーハンドリング
//!
//! ワークスペース共通のエラー型。終了コードは sysexits.h の値に揃える。

use crate::audit::AuditError;

/// エラー型
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// 引数不正（使い方の誤り）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数・設定の不備
    #[error("{0}")]
    Env(String),
    #[error("{0}")]
    Io(String),
    #[error("{0}")]
    Json(String),
    /// HTTP 通信・API エラー
    #[error("{0}")]
    Http(String),
    /// 監査（プロンプト生成・応答検証・実行スロット）のエラー
    #[error(transparent)]
    Audit(#[from] AuditError),
    /// アクセスゲートを通過できなかった
    #[error("{0}")]
    Denied(String),
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn denied(msg: impl Into<String>) -> Self {
        Self::Denied(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) => 65,
            Self::Http(_) => 69,
            Self::System(_) => 70,
            Self::Io(_) => 74,
            Self::Denied(_) => 77,
            Self::Env(_) => 78,
            Self::Audit(e) => e.exit_code(),
        }
    }

    /// 使い方の誤りか（main で Usage を表示するかの判定に使う）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e.to_string())
    }
}
