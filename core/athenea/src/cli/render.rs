//! 端末向けのテキスト整形
//!
//! 表示するだけで状態は持たない。結果の文字列はモデル由来なので、そのまま出す（解釈しない）。

use crate::usecase::access::AccessOutcome;
use common::audit::{
    gauge_band, AuditKind, GaugeBand, History, NarrativeResult, SupremacyResult,
    TranscriptionResult,
};
use common::gate::StepStatus;

fn band_tag(score: u8) -> &'static str {
    match gauge_band(score) {
        GaugeBand::Green => "ÓPTIMO",
        GaugeBand::Gold => "ADECUADO",
        GaugeBand::Red => "CRÍTICO",
    }
}

fn indicator(out: &mut String, name: &str, score: u8, label: &str, text: &str) {
    out.push_str(&format!("{:<34} {:>3}/100  [{}]\n", name, score, band_tag(score)));
    out.push_str(&format!("  {}: {}\n\n", label, text));
}

pub fn render_supremacy(result: &SupremacyResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", AuditKind::Supremacy.title()));
    out.push_str(&format!("OBJETIVO: {}\n\n", result.target));
    indicator(
        &mut out,
        "CTS (Causal Traceability Score)",
        result.cts.score,
        "Análisis",
        &result.cts.analysis,
    );
    indicator(
        &mut out,
        "HRL (Hyper-Response Latency)",
        result.hrl.score,
        "Análisis",
        &result.hrl.analysis,
    );
    indicator(
        &mut out,
        "MÓDULO PENSUM (Predictibilidad)",
        result.pensum.score,
        "Predicción",
        &result.pensum.prediction,
    );
    indicator(
        &mut out,
        "MÓDULO SÓNICA (Pureza Armónica)",
        result.sonica.score,
        "Recomendación",
        &result.sonica.recommendation,
    );

    let vitals = result.web_vitals();
    out.push_str(&format!(
        "ACCESIBILIDAD: {:.1}  CORE WEB VITALS: {:.1}\n",
        result.accessibility_score(),
        result.core_vitals_score()
    ));
    out.push_str(&format!(
        "LCP {}s  FID {}ms  CLS {}  TTI {}s\n",
        vitals.lcp, vitals.fid, vitals.cls, vitals.tti
    ));
    let trend: Vec<String> = result
        .trend_series()
        .iter()
        .map(|v| format!("{:.0}", v))
        .collect();
    out.push_str(&format!("TENDENCIA: {}\n\n", trend.join(" ")));

    let holistic = result.holistic();
    out.push_str(&format!("{}\n{}\n", holistic.diagnostic, holistic.recommendations));
    out
}

pub fn render_narrative(kind: AuditKind, result: &NarrativeResult) -> String {
    format!("{}\n\n{}\n", kind.title(), result.text())
}

pub fn render_transcription(result: &TranscriptionResult) -> String {
    format!(
        "{}\n\n{}\n",
        AuditKind::SynapticTranscription.title(),
        result.narrative
    )
}

pub fn render_failure(kind: AuditKind) -> String {
    format!("{}\n{}\n", kind.title(), kind.failure_placeholder())
}

/// 履歴の一覧（0 が最新）
pub fn render_history(history: &History) -> String {
    if history.is_empty() {
        return "(sin auditorías registradas)\n".to_string();
    }
    let mut out = String::new();
    for (i, entry) in history.iter().enumerate() {
        let date = entry
            .captured_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "---".to_string());
        out.push_str(&format!(
            "{:>2}  {}  {:<32} {:>5.1}\n",
            i,
            date,
            entry.target,
            entry.average_score()
        ));
    }
    out
}

/// ゲートの各プローブの結果（stderr 向け）
pub fn render_gate(outcome: &AccessOutcome) -> String {
    let mut out = String::new();
    for step in &outcome.steps {
        let mark = match step.status {
            StepStatus::Verified => "OK",
            StepStatus::Failed => "!!",
            StepStatus::Pending | StepStatus::Verifying => "..",
        };
        out.push_str(&format!("[{}] {}\n", mark, step.label));
    }
    out
}
