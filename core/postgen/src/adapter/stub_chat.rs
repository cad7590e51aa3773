//! テスト用: 固定の応答列を返す ChatCompletion 実装


#[cfg(test)]
pub use stub::{StubChat, StubReply};
