//! 起動時のアクセスゲート
//!
//! プローブは表示だけで、通過の可否はアクセスコードの照合で決まる。

use crate::ports::outbound::GateProbe;
use common::error::Error;
use common::gate::{GateState, VerificationGate, VerificationStep};
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct AccessUseCase {
    probes: Vec<Arc<dyn GateProbe>>,
    log: Arc<dyn Log>,
}

/// ゲートを通した結果（表示用のステップつき）
#[derive(Debug, Clone)]
pub struct AccessOutcome {
    pub state: GateState,
    pub steps: Vec<VerificationStep>,
}

impl AccessUseCase {
    pub fn new(probes: Vec<Arc<dyn GateProbe>>, log: Arc<dyn Log>) -> Self {
        Self { probes, log }
    }

    /// プローブを順に実行してからコードを照合する
    pub fn check(&self, code: &str, expected_sha256_hex: &str) -> AccessOutcome {
        let mut gate = VerificationGate::new(self.probes.iter().map(|p| p.label().to_string()));
        gate.begin();
        for (i, probe) in self.probes.iter().enumerate() {
            gate.start_step(i);
            gate.record(i, probe.probe());
        }
        let state = gate.submit_code(code, expected_sha256_hex);
        let _ = self.log.log(
            &LogRecord::new(LogLevel::Info, "access gate evaluated", "usecase", "gate")
                .with_field("state", format!("{:?}", state))
                .with_field("probes_verified", gate.all_steps_verified()),
        );
        AccessOutcome {
            state,
            steps: gate.steps().to_vec(),
        }
    }

    /// 通過しなければ Error::denied
    pub fn require(&self, code: Option<&str>, expected_sha256_hex: &str) -> Result<AccessOutcome, Error> {
        let code = code.unwrap_or_default();
        if code.is_empty() {
            return Err(Error::denied(
                "Access code required. Pass --access-code or set ATHENEA_ACCESS_CODE.",
            ));
        }
        let outcome = self.check(code, expected_sha256_hex);
        match outcome.state {
            GateState::Passed => Ok(outcome),
            _ => Err(Error::denied("ACCESO DENEGADO: código de acceso incorrecto.")),
        }
    }
}
