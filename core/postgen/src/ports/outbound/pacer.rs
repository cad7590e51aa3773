//! 待機の Outbound ポート
//!
//! リトライ間のバックオフとストリーミングのペーシングを同じ trait で扱う。
//! テストでは実時間を待たない実装に差し替える。

use std::time::Duration;

/// 一定時間の待機
pub trait Pacer: Send + Sync {
    fn pause(&self, duration: Duration);
}
