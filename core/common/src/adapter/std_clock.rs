//! 標準時刻実装（chrono の Utc::now を委譲）

use crate::ports::outbound::Clock;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
