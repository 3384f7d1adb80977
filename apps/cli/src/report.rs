//! The aggregated daily market report.
//!
//! Field names here are the report file's wire format; downstream charting
//! reads them verbatim, so they stay stable even where the in-crate model
//! names differ.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use carbonate_market_data::{FuturesQuote, HistoryPoint, SpotPrice};

/// Spot section of the report file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotSection {
    /// Battery-grade price in yuan per tonne
    pub battery_grade: Decimal,

    /// Industrial-grade price in yuan per tonne
    pub industrial_grade: Decimal,

    /// Day-over-day change in percent
    pub daily_change_percent: Decimal,
}

/// Futures section of the report file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuturesSection {
    /// Main-contract price (GFEX `lc`) in yuan per tonne
    pub lc_main: Decimal,

    /// Day-over-day change in percent
    pub daily_change_percent: Decimal,
}

/// One finished daily report. Assembled once per run, never mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketReport {
    /// When the report was assembled
    pub timestamp: DateTime<Utc>,

    /// The trading day the spot assessment refers to
    pub date: NaiveDate,

    /// Spot assessment
    pub spot_price: SpotSection,

    /// Futures quote
    pub futures_price: FuturesSection,

    /// Synthetic daily series, oldest first
    pub price_history: Vec<HistoryPoint>,

    /// One-sentence analyst summary
    pub ai_analysis: String,
}

impl MarketReport {
    /// Combine the pipeline outputs into one report value.
    pub fn assemble(
        timestamp: DateTime<Utc>,
        spot: &SpotPrice,
        futures: &FuturesQuote,
        price_history: Vec<HistoryPoint>,
        ai_analysis: String,
    ) -> Self {
        Self {
            timestamp,
            date: spot.date,
            spot_price: SpotSection {
                battery_grade: spot.battery_grade,
                industrial_grade: spot.industrial_grade,
                daily_change_percent: spot.change_percent,
            },
            futures_price: FuturesSection {
                lc_main: futures.price,
                daily_change_percent: futures.change_percent,
            },
            price_history,
            ai_analysis,
        }
    }
}
