//! アクセスゲートの端末プローブ
//!
//! どちらも表示用の目安で、判定に意味のある閾値ではない。

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::ports::outbound::GateProbe;

/// OS とアーキテクチャの署名が取れるか
#[derive(Debug, Clone, Default)]
pub struct PlatformSignatureProbe;

impl PlatformSignatureProbe {
    pub fn signature() -> String {
        format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
    }
}

impl GateProbe for PlatformSignatureProbe {
    fn label(&self) -> &str {
        "VERIFICANDO FIRMA DE SOFTWARE (PLATAFORMA)..."
    }

    fn probe(&self) -> bool {
        !std::env::consts::OS.is_empty() && !std::env::consts::ARCH.is_empty()
    }
}

/// 三角関数の空ループが上限時間内に終わるか
#[derive(Debug, Clone)]
pub struct ProcessorCadenceProbe {
    iterations: u32,
    limit: Duration,
}

impl Default for ProcessorCadenceProbe {
    fn default() -> Self {
        Self {
            iterations: 2_000_000,
            limit: Duration::from_millis(25),
        }
    }
}

impl ProcessorCadenceProbe {
    pub fn new(iterations: u32, limit: Duration) -> Self {
        Self { iterations, limit }
    }
}

impl GateProbe for ProcessorCadenceProbe {
    fn label(&self) -> &str {
        "VERIFICANDO CADENCIA DE PROCESADOR (RENDIMIENTO)..."
    }

    fn probe(&self) -> bool {
        let start = Instant::now();
        for i in 0..self.iterations {
            let x = f64::from(i);
            black_box((x.sin().powi(2) + x.cos().powi(2)).sqrt());
        }
        start.elapsed() < self.limit
    }
}
