//! Summary generation error types.

use thiserror::Error;

/// Errors from the analysis-model call path.
///
/// All of these are recovered by the summary service's canned fallback;
/// none reaches the pipeline.
#[derive(Debug, Error)]
pub enum AiError {
    /// Missing API key for a provider.
    #[error("Missing API key for provider {0}")]
    MissingApiKey(String),

    /// Provider error (from rig-core or the API).
    #[error("Provider error: {0}")]
    Provider(String),

    /// The provider returned an empty completion.
    #[error("Empty completion from model {0}")]
    EmptyCompletion(String),
}
