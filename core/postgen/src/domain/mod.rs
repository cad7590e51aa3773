//! ドメイン型と不変条件

pub mod chunk;
pub mod post;
pub mod topic;
pub mod validate;

pub use chunk::{Chunk, ChunkKind};
pub use post::{
    body_paragraphs, hashtag_tokens, GenerationResponse, Post, EXPECTED_POST_COUNT,
    FALLBACK_TITLE, PARAGRAPH_DELIMITER,
};
pub use topic::Topic;
pub use validate::{
    parse_object, validate_post, validate_response, validate_response_text, PostViolation,
    ValidationError,
};
