//! シナリオテスト

pub mod generate_tests;

pub mod support {
    //! テスト用の共通ダブル（固定時刻・待機記録・チャンク収集）

    use crate::domain::Chunk;
    use crate::ports::outbound::{ChunkSink, Pacer};
    use chrono::{DateTime, TimeZone, Utc};
    use common::error::Error;
    use common::ports::outbound::Clock;
    use std::sync::Mutex;
    use std::time::Duration;

    /// 固定時刻を返す Clock
    pub struct FixedClock(pub DateTime<Utc>);

    impl FixedClock {
        pub fn noon() -> Self {
            Self(Utc.with_ymd_and_hms(2026, 8, 27, 12, 0, 0).unwrap())
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.0
        }
    }

    /// 実時間を待たず、要求された待機時間を記録する Pacer
    #[derive(Default)]
    pub struct RecordingPacer {
        pauses: Mutex<Vec<Duration>>,
    }

    impl RecordingPacer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pauses(&self) -> Vec<Duration> {
            self.pauses.lock().unwrap().clone()
        }
    }

    impl Pacer for RecordingPacer {
        fn pause(&self, duration: Duration) {
            self.pauses.lock().unwrap().push(duration);
        }
    }

    /// チャンクを収集する Sink
    #[derive(Default)]
    pub struct VecSink {
        pub chunks: Vec<Chunk>,
        pub ended: bool,
    }

    impl VecSink {
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl ChunkSink for VecSink {
        fn on_chunk(&mut self, chunk: &Chunk) -> Result<(), Error> {
            self.chunks.push(chunk.clone());
            Ok(())
        }

        fn on_end(&mut self) -> Result<(), Error> {
            self.ended = true;
            Ok(())
        }
    }
}
