//! 標準出力へチャンクを JSONL で流す Sink

use crate::domain::Chunk;
use crate::ports::outbound::ChunkSink;
use common::error::Error;
use std::io::{self, Write};

/// 1 チャンク = 1 行の JSON として stdout へ書き出す Sink
#[derive(Debug, Default)]
pub struct StdoutChunkSink;

impl StdoutChunkSink {
    pub fn new() -> Self {
        Self
    }
}

impl ChunkSink for StdoutChunkSink {
    fn on_chunk(&mut self, chunk: &Chunk) -> Result<(), Error> {
        let line = serde_json::to_string(chunk).map_err(|e| Error::json(e.to_string()))?;
        println!("{}", line);
        io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush stdout: {}", e)))?;
        Ok(())
    }

    fn on_end(&mut self) -> Result<(), Error> {
        io::stdout()
            .flush()
            .map_err(|e| Error::io_msg(format!("Failed to flush stdout: {}", e)))?;
        Ok(())
    }
}
