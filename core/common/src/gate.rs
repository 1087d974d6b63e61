//! 起動時のアクセスゲート
//!
//! 端末プローブ（情報表示のみ）とアクセスコードの照合からなる状態機械。
//! 見た目だけのゲートで、認証やセキュリティ境界として扱ってはならない。
//! プローブの結果に関係なくコード照合へ進む。

use sha2::{Digest, Sha256};

/// ゲート全体の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Idle,
    Checking,
    Passed,
    /// コード不一致（再入力できる）
    Failed,
}

/// 各プローブの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Verifying,
    Verified,
    Failed,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verifying => "verifying",
            Self::Verified => "verified",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationStep {
    pub label: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone)]
pub struct VerificationGate {
    state: GateState,
    steps: Vec<VerificationStep>,
}

/// 入力文字列の SHA-256（小文字 hex）
pub fn sha256_hex(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

impl VerificationGate {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            state: GateState::Idle,
            steps: labels
                .into_iter()
                .map(|label| VerificationStep {
                    label: label.into(),
                    status: StepStatus::Pending,
                })
                .collect(),
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn steps(&self) -> &[VerificationStep] {
        &self.steps
    }

    /// 確認を始める（全ステップを Pending に戻す）
    pub fn begin(&mut self) {
        for step in &mut self.steps {
            step.status = StepStatus::Pending;
        }
        self.state = GateState::Checking;
    }

    /// ステップを実行中にする。範囲外なら false
    pub fn start_step(&mut self, index: usize) -> bool {
        self.set_step(index, StepStatus::Verifying)
    }

    /// ステップの結果を記録する。範囲外なら false
    pub fn record(&mut self, index: usize, passed: bool) -> bool {
        let status = if passed {
            StepStatus::Verified
        } else {
            StepStatus::Failed
        };
        self.set_step(index, status)
    }

    fn set_step(&mut self, index: usize, status: StepStatus) -> bool {
        match self.steps.get_mut(index) {
            Some(step) => {
                step.status = status;
                true
            }
            None => false,
        }
    }

    /// 全プローブが通ったか（表示用。ゲートの通過条件ではない）
    pub fn all_steps_verified(&self) -> bool {
        self.steps.iter().all(|s| s.status == StepStatus::Verified)
    }

    /// アクセスコードを照合する
    ///
    /// Checking / Failed のときだけ評価する。空のコードは無視して状態を変えない。
    /// 期待値の hex は大文字小文字を区別しない。
    pub fn submit_code(&mut self, code: &str, expected_sha256_hex: &str) -> GateState {
        if code.is_empty() || !matches!(self.state, GateState::Checking | GateState::Failed) {
            return self.state;
        }
        self.state = if sha256_hex(code).eq_ignore_ascii_case(expected_sha256_hex.trim()) {
            GateState::Passed
        } else {
            GateState::Failed
        };
        self.state
    }

    pub fn reset(&mut self) {
        for step in &mut self.steps {
            step.status = StepStatus::Pending;
        }
        self.state = GateState::Idle;
    }
}
