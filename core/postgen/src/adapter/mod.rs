//! 標準アダプタとテスト用スタブ

pub mod chunk_sinks;
pub mod llm_chat_completion;
pub mod pacer;
pub mod stub_chat;

pub use chunk_sinks::StdoutChunkSink;
pub use llm_chat_completion::LlmChatCompletion;
pub use pacer::StdPacer;
