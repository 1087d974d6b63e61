//! 主監査結果のテキスト版ドシエ

use chrono::{DateTime, SecondsFormat, Utc};

use super::model::SupremacyResult;

const RULE: &str = "=======================================================";

/// ドシエ本文を組み立てる
///
/// 日付は取得時刻、無ければ `fallback_time`。
pub fn render_dossier(result: &SupremacyResult, fallback_time: DateTime<Utc>) -> String {
    let date = result
        .captured_at
        .unwrap_or(fallback_time)
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    let mut out = String::new();
    out.push_str("ATHENEA AUDIT SYSTEM - DOSSIER DE INTELIGENCIA ESTRATÉGICA\n");
    out.push_str("PROTOCOLO DE SUPREMACÍA - CONFIDENCIAL SOBERANO\n\n");
    out.push_str(&format!("OBJETIVO: {}\n", result.target));
    out.push_str(&format!("FECHA: {}\n\n", date));
    out.push_str(&format!("{}\nANÁLISIS HOLÍSTICO VERIFICABLE\n{}\n\n", RULE, RULE));
    out.push_str(&format!(
        "CTS (Causal Traceability Score): {}/100\nAnálisis: {}\n\n",
        result.cts.score, result.cts.analysis
    ));
    out.push_str(&format!(
        "HRL (Hyper-Response Latency): {}/100\nAnálisis: {}\n\n",
        result.hrl.score, result.hrl.analysis
    ));
    out.push_str(&format!(
        "MÓDULO PENSUM (Predictibilidad): {}/100\nPredicción: {}\n\n",
        result.pensum.score, result.pensum.prediction
    ));
    out.push_str(&format!(
        "MÓDULO SÓNICA (Pureza Armónica): {}/100\nRecomendación: {}\n\n",
        result.sonica.score, result.sonica.recommendation
    ));
    out.push_str(&format!(
        "{}\nFIN DEL INFORME\nPRINCIPIOS: FE, HONOR, VERDAD.\n{}\n",
        RULE, RULE
    ));
    out
}

/// 保存用のファイル名（パス区切りは `_` に置き換える）
pub fn dossier_file_name(target: &str) -> String {
    let safe: String = target
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    format!("DOSSIER_AAS_{}.txt", safe)
}
