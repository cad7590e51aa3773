//! システム時刻を返す Clock 実装

use crate::ports::outbound::Clock;
use chrono::{DateTime, Utc};

/// システム時刻を返す Clock 実装
#[derive(Debug, Clone, Copy, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
