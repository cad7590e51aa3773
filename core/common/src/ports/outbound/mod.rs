//! Outbound ポート: 共通基盤（ログ・時刻）の trait

pub mod clock;
pub mod log;

pub use clock::Clock;
pub use log::{now_iso8601, Log, LogLevel, LogRecord};
