// Generative fallback providers
//
// This module provides an abstraction over external text-generation
// services used as the third cascade stage, when no crisis is detected and
// no knowledge-base topic matches.

use async_trait::async_trait;

pub mod openai;
pub mod types;

pub use openai::OpenAiProvider;
pub use types::ProviderError;

/// Trait for generative text providers
///
/// Implementations send a fixed safety-oriented system prompt plus the raw
/// user message and return the single best completion. One attempt per
/// call; retries are not part of the contract.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a completion for the user message
    async fn generate(&self, user_message: &str) -> Result<String, ProviderError>;

    /// Provider name (e.g., "openai")
    fn name(&self) -> &str;
}
