//! athenea コマンドの enum（Command Pattern）
//!
//! CLI の語（audit / advanced / harmony ...）を enum で明示する。

use common::audit::AuditKind;
use std::path::PathBuf;

/// コード入力の取得元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeInput {
    /// 標準入力（`-` または省略時）
    Stdin,
    File(PathBuf),
}

impl CodeInput {
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Self::Stdin,
            Some(path) => Self::File(PathBuf::from(path)),
        }
    }
}

/// athenea の実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtheneaCommand {
    Help,
    ListProfiles,
    /// 主監査（Supremacy）
    Audit { target: String },
    /// 高度分析。target 省略時は直近の主監査の対象
    Advanced {
        kind: AuditKind,
        target: Option<String>,
    },
    /// コード断片の最適化レポート
    Harmony { input: CodeInput },
    /// コードの SVG 書き起こし
    Transcribe {
        input: CodeInput,
        svg_out: Option<PathBuf>,
    },
    /// 履歴の一覧（index 指定で 1 件の詳細）
    History { index: Option<usize> },
    /// 履歴の 1 件（既定は最新）をドシエとして書き出す
    Dossier {
        index: Option<usize>,
        out: Option<PathBuf>,
    },
    /// 生成されるプロンプトを表示する（送信しない）
    Prompt { kind: AuditKind, param: String },
}

impl AtheneaCommand {
    /// ログ用の名前
    pub fn name(&self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::ListProfiles => "list-profiles",
            Self::Audit { .. } => "audit",
            Self::Advanced { .. } => "advanced",
            Self::Harmony { .. } => "harmony",
            Self::Transcribe { .. } => "transcribe",
            Self::History { .. } => "history",
            Self::Dossier { .. } => "dossier",
            Self::Prompt { .. } => "prompt",
        }
    }

    /// アクセスゲートを通す必要があるか（監査・履歴に触れるもの）
    pub fn needs_access(&self) -> bool {
        !matches!(self, Self::Help | Self::ListProfiles | Self::Prompt { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_input_from_arg() {
        assert_eq!(CodeInput::from_arg(None), CodeInput::Stdin);
        assert_eq!(CodeInput::from_arg(Some("-")), CodeInput::Stdin);
        assert_eq!(
            CodeInput::from_arg(Some("ui.html")),
            CodeInput::File(PathBuf::from("ui.html"))
        );
    }

    #[test]
    fn test_needs_access() {
        assert!(!AtheneaCommand::Help.needs_access());
        assert!(!AtheneaCommand::Prompt {
            kind: AuditKind::Faith,
            param: "x".to_string()
        }
        .needs_access());
        assert!(AtheneaCommand::History { index: None }.needs_access());
        assert!(AtheneaCommand::Audit {
            target: "example.com".to_string()
        }
        .needs_access());
    }
}
