//! プロンプト生成
//!
//! (種別, パラメータ) だけから指示文を組み立てる純粋関数。同じ入力には常に同じ文字列を返す。
//! パラメータはエスケープせずそのまま埋め込む（実行されない指示文なので）。
//! モデルの出力は指示を無視しがちなので、キー名と値の型を例示つきで明示する。

use super::error::PreconditionViolation;
use super::kind::{AuditKind, RequiredParam};

/// 呼び出し側が渡すパラメータ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditParams {
    pub target: Option<String>,
    pub code: Option<String>,
}

impl AuditParams {
    pub fn target(target: impl Into<String>) -> Self {
        Self {
            target: Some(target.into()),
            code: None,
        }
    }

    pub fn code(code: impl Into<String>) -> Self {
        Self {
            target: None,
            code: Some(code.into()),
        }
    }
}

const TARGET: &str = "{target}";
const CODE: &str = "{code}";

const SUPREMACY: &str = r#"Actúa como el SISTEMA DE AUDITORÍA ATHENEA (AAS) bajo el PROTOCOLO DE SUPREMACÍA. Tu análisis es de lectura profunda y totalmente no intrusivo: te basas solo en tu conocimiento interno y en inteligencia de fuentes abiertas, sin interactuar nunca con el objetivo. Principios: FE, HONOR y VERDAD.

OBJETIVO DEL ANÁLISIS: {target}

Evalúa estos cuatro indicadores. Todos los textos deben estar en español.
1. CTS (Causal Traceability Score), puntuación 0-100: arquitectura de software, frameworks y APIs del objetivo; deuda técnica, complejidad lógica y vulnerabilidades de arquitectura. Incluye un análisis breve.
2. HRL (Hyper-Response Latency), puntuación 0-100: inercia corporativa y velocidad de decisión ante cambios de mercado, tecnología o competencia. Incluye un análisis breve.
3. PENSUM (Ingeniería Inversa Lógica), puntuación 0-100 que mide la predictibilidad: patrones estratégicos y de despliegue. Incluye una predicción breve de su próximo movimiento.
4. SÓNICA (Limpieza Armónica), puntuación 0-100: pureza, eficiencia y elegancia teórica de su código y arquitectura. Incluye una recomendación de optimización de alto nivel.

FORMATO DE SALIDA OBLIGATORIO:
- Responde únicamente con un objeto JSON. Nada de texto ni de markdown antes o después.
- Usa exactamente estas claves, en inglés: "target", "cts", "hrl", "pensum", "sonica", "score", "analysis", "prediction", "recommendation".
- Cada "score" es un número entero entre 0 y 100, sin comillas.
- Cada texto es una cadena no vacía.

{
  "target": "{target}",
  "cts": { "score": <entero 0-100>, "analysis": "<texto en español>" },
  "hrl": { "score": <entero 0-100>, "analysis": "<texto en español>" },
  "pensum": { "score": <entero 0-100>, "prediction": "<texto en español>" },
  "sonica": { "score": <entero 0-100>, "recommendation": "<texto en español>" }
}"#;

const FAITH: &str = "Actúa como ATHENEA. Analiza la \"Garantía de Fe\" del objetivo: {target}. Evalúa la integridad de su marca, la confianza de sus usuarios y su percepción pública a partir de tu conocimiento. Responde en español.\nFormato: un único párrafo de análisis estratégico, en texto plano, sin JSON ni markdown.";

const FINGERPRINT: &str = "Actúa como ATHENEA. Genera la \"Huella Digital Cuántica\" del objetivo: {target}. Describe de forma conceptual su esencia digital, su impacto y su innovación. Responde en español.\nFormato: un párrafo de análisis en texto plano seguido de una línea nueva con exactamente \"HASH SOBERANO: <hash>\", donde <hash> son 64 caracteres hexadecimales que representan un SHA-256 del análisis.";

const FAILURE: &str = "Actúa como ATHENEA. Realiza un \"Análisis Predictivo de Fallo\" del objetivo: {target}. Identifica 3 vectores de fallo (estratégicos, técnicos o de mercado) que podrían provocar su disrupción o declive. Responde en español.\nFormato: lista numerada de exactamente 3 puntos (\"1.\", \"2.\", \"3.\"), uno por línea, directos y concisos.";

const COMPARISON: &str = "Actúa como ATHENEA. Realiza un \"Análisis Comparativo de Supremacía\" de {target}. Compara sus fortalezas y debilidades con las de sus competidores clave y explica por qué un análisis profundo supera a una auditoría convencional. Cierra con una conclusión sobre por qué contratar este servicio es la opción lógica. Responde en español.\nFormato: varios párrafos de análisis estratégico en texto plano, separados por una línea en blanco.";

const CODE_HARMONY: &str = r#"Actúa como el MÓDULO SÓNICA del sistema ATHENEA. Tu propósito es la limpieza y amplificación armónica del código: aplica la teoría armónica y el contrapunto para analizar el fragmento siguiente, detectar errores de lógica y casos límite, y proponer cómo convertirlo en una pieza precisa. Principios: FE, HONOR y VERDAD.

CÓDIGO A ANALIZAR:
---
{code}
---

Formato: responde únicamente con el INFORME DE OPTIMIZACIÓN SÓNICA en español, en texto plano, con recomendaciones directas y accionables. Sin JSON."#;

const SYNAPTIC_TRANSCRIPTION: &str = r#"Actúa como el MODELO DE ADAPTABILIDAD DE CÓDIGO (MAAC) de ATHENEA, protocolo SYNAPTIC TRANSCRIPTION.

FASE I (ANÁLISIS SINÁPTICO): audita el árbol sintáctico del código de interfaz siguiente e identifica sus primitivas y cómo se componen.
FASE II (TRANSCREACIÓN LÓGICA): transcribe la interfaz a un único SVG autocontenido, con todos los estilos embebidos y sin recursos externos. El SVG debe representar fielmente la interfaz.
FASE III (COMPILACIÓN SIN DEPENDENCIAS): entrega el resultado como JSON.

CÓDIGO A TRANSCRIBIR:
---
{code}
---

FORMATO DE SALIDA OBLIGATORIO:
- Responde únicamente con un objeto JSON. Nada de texto ni de markdown antes o después.
- Usa exactamente las claves "code" y "preview"; ambos valores son cadenas.
- "code": informe del análisis y de la transcripción, en español.
- "preview": solo el SVG completo; debe empezar por "<svg" y terminar con "</svg>".

{
  "code": "<informe en español>",
  "preview": "<svg ...>...</svg>"
}"#;

fn template(kind: AuditKind) -> &'static str {
    match kind {
        AuditKind::Supremacy => SUPREMACY,
        AuditKind::Faith => FAITH,
        AuditKind::Fingerprint => FINGERPRINT,
        AuditKind::Failure => FAILURE,
        AuditKind::Comparison => COMPARISON,
        AuditKind::CodeHarmony => CODE_HARMONY,
        AuditKind::SynapticTranscription => SYNAPTIC_TRANSCRIPTION,
    }
}

/// 指示文を生成する
///
/// 必須パラメータが無い・空白のみなら、文字列を作る前に PreconditionViolation を返す。
pub fn build(kind: AuditKind, params: &AuditParams) -> Result<String, PreconditionViolation> {
    let required = kind.required_param();
    let (placeholder, value) = match required {
        RequiredParam::Target => (TARGET, params.target.as_deref()),
        RequiredParam::Code => (CODE, params.code.as_deref()),
    };
    match value {
        Some(v) if !v.trim().is_empty() => Ok(template(kind).replace(placeholder, v)),
        _ => Err(PreconditionViolation {
            kind,
            field: required.field_name(),
        }),
    }
}
