//! 時刻取得の Outbound ポート
//!
//! usecase はこの trait 経由で「現在時刻」を取得し、チャンクのタイムスタンプ等に使う。

use chrono::{DateTime, Utc};

/// 時刻取得の抽象
///
/// 実装は `common::adapter::StdClock` やテスト用の固定時刻など。
pub trait Clock: Send + Sync {
    /// 現在時刻を UTC で返す
    fn now(&self) -> DateTime<Utc>;
}
