//! Market data models
//!
//! This module contains the core data types for the daily report:
//! - `spot` - Spot assessment data (SpotPrice)
//! - `futures` - Futures quote data (FuturesQuote)
//! - `history` - Synthetic history points (HistoryPoint)

mod futures;
mod history;
mod spot;

pub use futures::FuturesQuote;
pub use history::HistoryPoint;
pub use spot::{SpotPrice, INDUSTRIAL_GRADE_OFFSET};
