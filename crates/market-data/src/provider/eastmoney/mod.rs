//! Eastmoney futures quote source.
//!
//! Scrapes the lithium carbonate main-contract quote page (GFEX `lc`).
//! Only the first 5-digit number in the visible text is trusted as the
//! contract price; the page renders the rest of the quote board from
//! JavaScript that a plain client never executes.

use reqwest::{header, Client};
use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::FuturesQuote;
use crate::provider::extract::{first_number, visible_text};
use crate::provider::{http_client, Fetched, BROWSER_USER_AGENT};

/// Provider ID constant
const PROVIDER_ID: &str = "EASTMONEY";

/// Main-contract quote page.
const FUTURES_URL: &str = "https://quote.eastmoney.com/qihuo/lcm.html";

/// Eastmoney futures quote provider.
pub struct EastmoneyFuturesProvider {
    client: Client,
    url: String,
}

impl EastmoneyFuturesProvider {
    /// Create a provider pointed at the live Eastmoney page.
    pub fn new() -> Self {
        Self::with_url(FUTURES_URL)
    }

    /// Create a provider pointed at an alternate page (used by tests).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            url: url.into(),
        }
    }

    /// Latest main-contract quote.
    ///
    /// Any transport or extraction failure degrades to
    /// [`FuturesQuote::fallback`] with a warning.
    pub async fn latest(&self) -> Fetched<FuturesQuote> {
        match self.try_latest().await {
            Ok(quote) => Fetched::Live(quote),
            Err(e) => {
                warn!("Eastmoney futures fetch failed, using fallback values: {}", e);
                Fetched::Fallback {
                    value: FuturesQuote::fallback(),
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn try_latest(&self) -> Result<FuturesQuote, MarketDataError> {
        let response = self
            .client
            .get(&self.url)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .send()
            .await
            .map_err(|e| MarketDataError::transport(PROVIDER_ID, e))?;

        let body = response
            .text()
            .await
            .map_err(|e| MarketDataError::transport(PROVIDER_ID, e))?;

        let price =
            first_number(&visible_text(&body)).ok_or_else(|| MarketDataError::NoPriceFound {
                provider: PROVIDER_ID.to_string(),
            })?;

        Ok(FuturesQuote::from_price(price))
    }
}

impl Default for EastmoneyFuturesProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_unreachable_page_yields_fallback() {
        let provider = EastmoneyFuturesProvider::with_url("http://127.0.0.1:9/lcm");
        let fetched = provider.latest().await;

        assert!(fetched.is_fallback());
        let quote = fetched.value();
        assert_eq!(quote.price, dec!(79800.0));
        assert_eq!(quote.change_percent, dec!(0.3));
    }
}
