//! 標準アダプタ

pub mod file_json_log;
pub mod std_clock;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_clock::StdClock;
