use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One day of the synthetic price series used for charting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    /// Calendar day
    pub date: NaiveDate,

    /// Synthetic price in yuan per tonne
    pub price: Decimal,
}
