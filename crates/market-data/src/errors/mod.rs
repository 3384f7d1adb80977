//! Error types for the market data crate.
//!
//! Every variant here is recoverable at the pipeline level: providers
//! translate any of these into their documented fallback values, so none of
//! them escapes a fetch call.

use thiserror::Error;

/// Errors that can occur while fetching or extracting price data.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request to the source page timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The source returned an unusable response.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the transport or the page
        message: String,
    },

    /// The page text contained no recognizable price pattern.
    #[error("No price found in page text: {provider}")]
    NoPriceFound {
        /// The provider whose page yielded no match
        provider: String,
    },
}

impl MarketDataError {
    /// Classify a transport error from the HTTP client.
    pub(crate) fn transport(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else {
            Self::ProviderError {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }
}
