//! Price source implementations.
//!
//! Each provider wraps one public web page. Recoverable failures never
//! escape a provider: a fetch that cannot be completed degrades to the
//! documented fallback constants, and the outcome records which path was
//! taken.

pub mod eastmoney;
pub mod extract;
pub mod smm;

use std::time::Duration;

use reqwest::Client;

/// Shared HTTP request timeout for the source pages.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser User-Agent sent to source pages that gate plain clients.
pub(crate) const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build the HTTP client used by the providers.
pub(crate) fn http_client() -> Client {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Outcome of a provider fetch.
///
/// `Fallback` carries the documented constants together with the reason the
/// live path was abandoned, so the degradation is an explicit, testable
/// branch rather than an intercepted exception.
#[derive(Clone, Debug)]
pub enum Fetched<T> {
    /// Extracted from the live page.
    Live(T),

    /// Documented fallback constants.
    Fallback {
        /// The fallback value
        value: T,
        /// Why the live path was abandoned
        reason: String,
    },
}

impl<T> Fetched<T> {
    /// The carried value, live or fallback.
    pub fn value(&self) -> &T {
        match self {
            Self::Live(value) => value,
            Self::Fallback { value, .. } => value,
        }
    }

    /// Consume the outcome and take the carried value.
    pub fn into_value(self) -> T {
        match self {
            Self::Live(value) => value,
            Self::Fallback { value, .. } => value,
        }
    }

    /// Whether the fallback path was taken.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}
