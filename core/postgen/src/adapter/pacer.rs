//! 実時間で待機する Pacer 実装

use crate::ports::outbound::Pacer;
use std::thread;
use std::time::Duration;

/// thread::sleep で待機する Pacer
#[derive(Debug, Clone, Copy, Default)]
pub struct StdPacer;

impl Pacer for StdPacer {
    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }
}
