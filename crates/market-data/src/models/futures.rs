use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lithium carbonate futures main-contract quote (GFEX `lc`).
///
/// `change_percent` is a placeholder, same caveat as the spot assessment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FuturesQuote {
    /// Main-contract price in yuan per tonne
    pub price: Decimal,

    /// Day-over-day change in percent
    pub change_percent: Decimal,
}

impl FuturesQuote {
    /// Build the quote from an extracted contract price.
    pub fn from_price(price: Decimal) -> Self {
        Self {
            price,
            change_percent: placeholder_change(),
        }
    }

    /// Fixed values used when the live page cannot be read.
    pub fn fallback() -> Self {
        Self {
            price: Decimal::from(79800),
            change_percent: placeholder_change(),
        }
    }
}

/// Placeholder day change for the futures quote, +0.3 percent.
fn placeholder_change() -> Decimal {
    Decimal::new(3, 1)
}
