//! Outbound ポート: usecase が外界に要求する trait

pub mod chat_completion;
pub mod chunk_sink;
pub mod pacer;

pub use chat_completion::ChatCompletion;
pub use chunk_sink::ChunkSink;
pub use pacer::Pacer;
