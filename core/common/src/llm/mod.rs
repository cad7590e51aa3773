//! LLMドライバーとプロバイダ

pub mod driver;
pub mod echo;
pub mod factory;
pub mod groq;
pub mod params;
pub mod provider;

pub use driver::LlmDriver;
pub use factory::{create_provider, AnyProvider, ProviderType};
pub use params::GenerationParams;
pub use provider::ChatProvider;
