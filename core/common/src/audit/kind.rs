//! 監査種別と実行スロット

use std::fmt;

/// 監査種別（プロンプトテンプレートと応答の形を決める）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditKind {
    /// 4 指標（CTS / HRL / PENSUM / SÓNICA）の JSON を返す主監査
    Supremacy,
    /// ブランド・信頼性の分析（自由文）
    Faith,
    /// デジタル指紋と署名ハッシュ（自由文）
    Fingerprint,
    /// 失敗ベクトルの予測（自由文）
    Failure,
    /// 競合比較（自由文）
    Comparison,
    /// コード断片の最適化レポート（自由文）
    CodeHarmony,
    /// コードを SVG に書き起こす（JSON）
    SynapticTranscription,
}

/// 応答の形
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseShape {
    /// JSON オブジェクト
    Structured,
    /// 自由文
    Narrative,
}

/// プロンプト生成に必須のパラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredParam {
    Target,
    Code,
}

impl RequiredParam {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Code => "code",
        }
    }
}

/// 実行スロット
///
/// 同じスロットで同時に走る監査は 1 件まで。スロット同士は独立した状態を触るため並行してよい。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSlot {
    Main,
    Advanced,
    CodeHarmony,
    Transcription,
}

impl ActionSlot {
    pub const ALL: [ActionSlot; 4] = [
        ActionSlot::Main,
        ActionSlot::Advanced,
        ActionSlot::CodeHarmony,
        ActionSlot::Transcription,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Advanced => "advanced",
            Self::CodeHarmony => "code-harmony",
            Self::Transcription => "transcription",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Main => 0,
            Self::Advanced => 1,
            Self::CodeHarmony => 2,
            Self::Transcription => 3,
        }
    }
}

impl fmt::Display for ActionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AuditKind {
    pub const ALL: [AuditKind; 7] = [
        AuditKind::Supremacy,
        AuditKind::Faith,
        AuditKind::Fingerprint,
        AuditKind::Failure,
        AuditKind::Comparison,
        AuditKind::CodeHarmony,
        AuditKind::SynapticTranscription,
    ];

    /// 主監査の結果に対して走らせる高度分析
    pub const ADVANCED: [AuditKind; 4] = [
        AuditKind::Faith,
        AuditKind::Fingerprint,
        AuditKind::Failure,
        AuditKind::Comparison,
    ];

    /// 名前から解析（大文字小文字を区別しない）
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "supremacy" => Some(Self::Supremacy),
            "faith" => Some(Self::Faith),
            "fingerprint" => Some(Self::Fingerprint),
            "failure" => Some(Self::Failure),
            "comparison" => Some(Self::Comparison),
            "code-harmony" | "code_harmony" | "sonica" => Some(Self::CodeHarmony),
            "synaptic-transcription" | "synaptic_transcription" | "transcription" | "maac" => {
                Some(Self::SynapticTranscription)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Supremacy => "supremacy",
            Self::Faith => "faith",
            Self::Fingerprint => "fingerprint",
            Self::Failure => "failure",
            Self::Comparison => "comparison",
            Self::CodeHarmony => "code-harmony",
            Self::SynapticTranscription => "synaptic-transcription",
        }
    }

    pub fn shape(&self) -> ResponseShape {
        match self {
            Self::Supremacy | Self::SynapticTranscription => ResponseShape::Structured,
            _ => ResponseShape::Narrative,
        }
    }

    pub fn required_param(&self) -> RequiredParam {
        match self {
            Self::CodeHarmony | Self::SynapticTranscription => RequiredParam::Code,
            _ => RequiredParam::Target,
        }
    }

    pub fn slot(&self) -> ActionSlot {
        match self {
            Self::Supremacy => ActionSlot::Main,
            Self::Faith | Self::Fingerprint | Self::Failure | Self::Comparison => {
                ActionSlot::Advanced
            }
            Self::CodeHarmony => ActionSlot::CodeHarmony,
            Self::SynapticTranscription => ActionSlot::Transcription,
        }
    }

    pub fn is_advanced(&self) -> bool {
        self.slot() == ActionSlot::Advanced
    }

    /// レポート見出し
    pub fn title(&self) -> &'static str {
        match self {
            Self::Supremacy => "INFORME: PROTOCOLO DE SUPREMACÍA",
            Self::Faith => "INFORME: GARANTÍA DE FE",
            Self::Fingerprint => "INFORME: HUELLA DIGITAL CUÁNTICA",
            Self::Failure => "INFORME: ANÁLISIS PREDICTIVO DE FALLO",
            Self::Comparison => "INFORME: ANÁLISIS COMPARATIVO DE SUPREMACÍA",
            Self::CodeHarmony => "INFORME DE OPTIMIZACIÓN SÓNICA",
            Self::SynapticTranscription => "INFORME: TRANSCRIPCIÓN SINÁPTICA",
        }
    }

    /// 失敗時に表示する固定文言
    pub fn failure_placeholder(&self) -> &'static str {
        match self {
            Self::Supremacy => "[ PROTOCOLO DE SUPREMACÍA FALLIDO ]",
            Self::Faith | Self::Fingerprint | Self::Failure | Self::Comparison => {
                "[ ANÁLISIS NO CONVERGENTE ]"
            }
            Self::CodeHarmony => "[ INFORME NO CONCLUYENTE ]",
            Self::SynapticTranscription => "[ TRANSCRIPCIÓN FALLIDA ]",
        }
    }
}

impl fmt::Display for AuditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
