//! SMM (Shanghai Metals Market) spot price source.
//!
//! Scrapes the battery-grade lithium carbonate quote page. The page carries
//! either a lone 5-digit price or a low-high range; a range is reduced to
//! its midpoint. The industrial-grade assessment is derived from the
//! battery-grade price, never scraped.

use chrono::NaiveDate;
use reqwest::{header, Client};
use tracing::warn;

use crate::errors::MarketDataError;
use crate::models::SpotPrice;
use crate::provider::extract::{first_price, visible_text};
use crate::provider::{http_client, Fetched, BROWSER_USER_AGENT};

/// Provider ID constant
const PROVIDER_ID: &str = "SMM";

/// Battery-grade lithium carbonate quote page.
const SPOT_URL: &str = "https://hq.smm.cn/h5/Li2CO3";

/// SMM spot price provider.
///
/// # Example
///
/// ```ignore
/// use carbonate_market_data::SmmSpotProvider;
///
/// let provider = SmmSpotProvider::new();
/// let spot = provider.latest(today).await;
/// ```
pub struct SmmSpotProvider {
    client: Client,
    url: String,
}

impl SmmSpotProvider {
    /// Create a provider pointed at the live SMM page.
    pub fn new() -> Self {
        Self::with_url(SPOT_URL)
    }

    /// Create a provider pointed at an alternate page (used by tests).
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: http_client(),
            url: url.into(),
        }
    }

    /// Latest spot assessment for `date`.
    ///
    /// Any transport or extraction failure degrades to
    /// [`SpotPrice::fallback`] with a warning.
    pub async fn latest(&self, date: NaiveDate) -> Fetched<SpotPrice> {
        match self.try_latest(date).await {
            Ok(spot) => Fetched::Live(spot),
            Err(e) => {
                warn!("SMM spot fetch failed, using fallback values: {}", e);
                Fetched::Fallback {
                    value: SpotPrice::fallback(date),
                    reason: e.to_string(),
                }
            }
        }
    }

    async fn try_latest(&self, date: NaiveDate) -> Result<SpotPrice, MarketDataError> {
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
            first_price(&visible_text(&body)).ok_or_else(|| MarketDataError::NoPriceFound {
                provider: PROVIDER_ID.to_string(),
            })?;

        Ok(SpotPrice::from_battery_grade(date, price.midpoint()))
    }
}

impl Default for SmmSpotProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    #[tokio::test]
    async fn test_unreachable_page_yields_fallback() {
        // Closed local port: connection refused without leaving the machine.
        let provider = SmmSpotProvider::with_url("http://127.0.0.1:9/li2co3");
        let fetched = provider.latest(reference_date()).await;

        assert!(fetched.is_fallback());
        let spot = fetched.value();
        assert_eq!(spot.battery_grade, dec!(80500.0));
        assert_eq!(spot.industrial_grade, dec!(78300.0));
        assert_eq!(spot.change_percent, dec!(-0.5));
        assert_eq!(spot.date, reference_date());
    }
}
