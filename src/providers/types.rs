// Provider error taxonomy
//
// Every failure mode of the external generation call collapses into one of
// these variants. The cascade consumes them internally and degrades to the
// static fallback; they are never surfaced to the end user.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure: connect, timeout, TLS, or body decode
    #[error("request to generation service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status (auth, quota, bad request)
    #[error("generation service returned status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Well-formed response with no usable completion text
    #[error("generation service returned no usable completion")]
    EmptyCompletion,
}
