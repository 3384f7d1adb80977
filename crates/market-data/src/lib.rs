//! Carbonate Market Data Crate
//!
//! This crate provides the price-acquisition layer for the Carbonate daily
//! report: spot and futures quotes for lithium carbonate scraped from public
//! web pages, plus the synthetic 30-day history used for charting.
//!
//! # Overview
//!
//! The crate supports:
//! - Battery-grade spot assessments from SMM (Shanghai Metals Market)
//! - Main-contract futures quotes from Eastmoney (GFEX `lc`)
//! - Pure, offline-testable text extraction for both pages
//! - Documented constant fallbacks whenever a live page cannot be read
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |     Provider     |  (SmmSpotProvider, EastmoneyFuturesProvider)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |     extract      |  (visible_text, first_price - pure functions)
//! +------------------+
//!          |
//!          v
//! +------------------+
//! |    Fetched<T>    |  (Live vs Fallback, with the reason recorded)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`SpotPrice`] - Battery- and industrial-grade spot assessment
//! - [`FuturesQuote`] - Main-contract futures quote
//! - [`HistoryPoint`] - One day of the synthetic price series
//! - [`Fetched`] - Explicit live-vs-fallback fetch outcome
//! - [`MarketDataError`] - Failures that force the fallback path

pub mod errors;
pub mod history;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{FuturesQuote, HistoryPoint, SpotPrice, INDUSTRIAL_GRADE_OFFSET};

// Re-export provider types
pub use provider::eastmoney::EastmoneyFuturesProvider;
pub use provider::smm::SmmSpotProvider;
pub use provider::Fetched;

pub use errors::MarketDataError;
