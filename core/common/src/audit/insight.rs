//! 主監査の結果から導く表示用の指標
//!
//! どれもスコアだけから決まる（乱数は使わない）。

use super::model::SupremacyResult;

/// 結果が無いときの推移グラフ
pub const DEFAULT_TREND: [f64; 8] = [50.0, 55.0, 48.0, 60.0, 65.0, 58.0, 70.0, 68.0];

const TREND_MIN: f64 = 10.0;
const TREND_MAX: f64 = 95.0;

/// 読み上げの調子
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrationTone {
    Pride,
    Shame,
    Neutral,
}

impl NarrationTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pride => "pride",
            Self::Shame => "shame",
            Self::Neutral => "neutral",
        }
    }

    /// 平均スコアから決める（80 超: pride、50 未満: shame）
    pub fn from_average(average: f64) -> Self {
        if average > 80.0 {
            Self::Pride
        } else if average < 50.0 {
            Self::Shame
        } else {
            Self::Neutral
        }
    }
}

/// ゲージの色帯
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeBand {
    Green,
    Gold,
    Red,
}

pub fn gauge_band(score: u8) -> GaugeBand {
    if score >= 85 {
        GaugeBand::Green
    } else if score >= 60 {
        GaugeBand::Gold
    } else {
        GaugeBand::Red
    }
}

/// Web Vitals 風の数値（表示用に書式済み）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebVitals {
    pub lcp: String,
    pub fid: String,
    pub cls: String,
    pub tti: String,
}

impl WebVitals {
    pub fn placeholder() -> Self {
        Self {
            lcp: "---".to_string(),
            fid: "---".to_string(),
            cls: "---".to_string(),
            tti: "---".to_string(),
        }
    }
}

/// 総合診断と推奨
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolisticAnalysis {
    pub diagnostic: &'static str,
    pub recommendations: &'static str,
}

const HOLISTIC_OPTIMAL: HolisticAnalysis = HolisticAnalysis {
    diagnostic: "DIAGNÓSTICO HOLÍSTICO: Todos los indicadores clave son óptimos y reflejan una implementación impecable con una experiencia de usuario superior.",
    recommendations: "RECOMENDACIONES EJECUTIVAS: El sistema opera sin margen de error. Mantener vigilancia estratégica.",
};

const HOLISTIC_CRITICAL: HolisticAnalysis = HolisticAnalysis {
    diagnostic: "DIAGNÓSTICO HOLÍSTICO: Se detectan múltiples anomalías en los indicadores clave. La arquitectura y la estrategia presentan vulnerabilidades significativas.",
    recommendations: "RECOMENDACIONES EJECUTIVAS: Se requiere una intervención estratégica inmediata para corregir las desviaciones y mitigar el riesgo de fallo sistémico.",
};

const HOLISTIC_ADEQUATE: HolisticAnalysis = HolisticAnalysis {
    diagnostic: "DIAGNÓSTICO HOLÍSTICO: El rendimiento es adecuado pero presenta áreas de optimización, con inconsistencias menores en arquitectura y estrategia.",
    recommendations: "RECOMENDACIONES EJECUTIVAS: Aplicar las optimizaciones del Módulo SÓNICA para alcanzar la supremacía operativa.",
};

fn mean(a: u8, b: u8) -> f64 {
    (f64::from(a) + f64::from(b)) / 2.0
}

impl SupremacyResult {
    pub fn average_score(&self) -> f64 {
        self.scores().iter().map(|s| f64::from(*s)).sum::<f64>() / 4.0
    }

    pub fn narration_tone(&self) -> NarrationTone {
        NarrationTone::from_average(self.average_score())
    }

    /// (CTS + SÓNICA) / 2
    pub fn accessibility_score(&self) -> f64 {
        mean(self.cts.score, self.sonica.score)
    }

    /// (HRL + PENSUM) / 2
    pub fn core_vitals_score(&self) -> f64 {
        mean(self.hrl.score, self.pensum.score)
    }

    /// HRL が高いほど LCP / FID が、CTS が高いほど CLS / TTI が良くなる
    pub fn web_vitals(&self) -> WebVitals {
        let hrl = f64::from(self.hrl.score) / 100.0;
        let cts = f64::from(self.cts.score) / 100.0;
        WebVitals {
            lcp: format!("{:.1}", 3.0 - hrl * 2.0),
            fid: format!("{:.0}", 100.0 - hrl * 95.0),
            cls: format!("{:.2}", 0.25 - cts * 0.24),
            tti: format!("{:.1}", 5.0 - cts * 4.0),
        }
    }

    /// 8 点の推移（各点は 10..=95 に収める）
    pub fn trend_series(&self) -> [f64; 8] {
        let (cts, hrl, pensum, sonica) = (
            self.cts.score,
            self.hrl.score,
            self.pensum.score,
            self.sonica.score,
        );
        [
            f64::from(cts),
            f64::from(hrl),
            f64::from(sonica),
            f64::from(pensum),
            mean(cts, hrl),
            mean(sonica, pensum),
            mean(cts, pensum),
            mean(hrl, sonica),
        ]
        .map(|s| s.clamp(TREND_MIN, TREND_MAX))
    }

    pub fn holistic(&self) -> HolisticAnalysis {
        let average = self.average_score();
        if average > 80.0 {
            HOLISTIC_OPTIMAL
        } else if average < 50.0 {
            HOLISTIC_CRITICAL
        } else {
            HOLISTIC_ADEQUATE
        }
    }
}
