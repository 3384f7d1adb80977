//! Analysis model capability and implementations.
//!
//! The summary service talks to an [`AnalysisModel`] rather than a concrete
//! client, so the OpenAI-backed implementation can be swapped for a
//! deterministic fake in tests.

use async_trait::async_trait;
use log::debug;
use reqwest::Client as HttpClient;
use rig::{client::CompletionClient, completion::Prompt, providers::openai};

use crate::error::AiError;

/// Environment variable holding the OpenAI credential.
const OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Sampling temperature for summary completions.
const TEMPERATURE: f64 = 0.7;

/// Response-length cap for summary completions, in tokens.
const MAX_TOKENS: u64 = 100;

/// A one-shot text-completion capability.
#[async_trait]
pub trait AnalysisModel: Send + Sync {
    /// Run one system + user completion and return the trimmed text.
    async fn complete(&self, system: &str, user: &str) -> Result<String, AiError>;
}

// ============================================================================
// OpenAI Implementation
// ============================================================================

/// OpenAI-backed analysis model via rig-core.
///
/// The credential is ambient: read from `OPENAI_API_KEY` at call time, so a
/// missing key fails the call (and triggers the canned fallback) instead of
/// failing construction.
pub struct OpenAiAnalysisModel {
    model_id: String,
}

impl OpenAiAnalysisModel {
    /// Create a model handle for the given model id.
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
        }
    }
}

#[async_trait]
impl AnalysisModel for OpenAiAnalysisModel {
    async fn complete(&self, system: &str, user: &str) -> Result<String, AiError> {
        let key = std::env::var(OPENAI_API_KEY)
            .map_err(|_| AiError::MissingApiKey("openai".to_string()))?;

        let client: openai::Client<HttpClient> =
            openai::Client::new(&key).map_err(|e| AiError::Provider(e.to_string()))?;

        debug!("Requesting summary completion from model {}", self.model_id);

        let response = client
            .agent(&self.model_id)
            .preamble(system)
            .temperature(TEMPERATURE)
            .max_tokens(MAX_TOKENS)
            .build()
            .prompt(user)
            .await
            .map_err(|e| AiError::Provider(e.to_string()))?;

        let text = response.trim().to_string();
        if text.is_empty() {
            return Err(AiError::EmptyCompletion(self.model_id.clone()));
        }
        Ok(text)
    }
}

// ============================================================================
// Fake Model for Testing
// ============================================================================

/// A fake analysis model for testing that answers deterministically.
pub struct FakeAnalysisModel {
    /// Fixed completion to return, or None to fail every call.
    pub response: Option<String>,
}

impl FakeAnalysisModel {
    /// A fake that answers every call with `text`.
    pub fn with_response(text: &str) -> Self {
        Self {
            response: Some(text.to_string()),
        }
    }

    /// A fake whose calls always fail.
    pub fn failing() -> Self {
        Self { response: None }
    }
}

#[async_trait]
impl AnalysisModel for FakeAnalysisModel {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, AiError> {
        match &self.response {
            Some(text) => Ok(text.trim().to_string()),
            None => Err(AiError::Provider("fake model set to fail".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_model_returns_trimmed_response() {
        let model = FakeAnalysisModel::with_response("  市场平稳。  ");
        let text = model.complete("system", "user").await.unwrap();
        assert_eq!(text, "市场平稳。");
    }

    #[tokio::test]
    async fn test_failing_fake_model_errors() {
        let model = FakeAnalysisModel::failing();
        assert!(model.complete("system", "user").await.is_err());
    }
}
