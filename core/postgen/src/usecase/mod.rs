//! ユースケース層

pub mod generate;
pub mod prompt;
pub mod stream;

pub use generate::{GenState, PostGenerator, DEFAULT_MAX_RETRIES};
pub use prompt::{LanguageMix, PromptBuilder};
pub use stream::PostStreamer;
