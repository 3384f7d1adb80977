//! Synthetic 30-day price history.
//!
//! The series is generated, not fetched: it exists so the report always has
//! a chartable history even though no historical store is wired up yet.
//! Deterministic for a given reference date; performs no I/O.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::models::HistoryPoint;

/// Number of daily points generated.
pub const HISTORY_DAYS: i64 = 30;

/// Base price the synthetic series oscillates around, in yuan per tonne.
const BASE_PRICE: i64 = 80500;

/// Generate the daily series for the [`HISTORY_DAYS`] days before `today`,
/// oldest first. `today` itself is excluded.
pub fn synthesize(today: NaiveDate) -> Vec<HistoryPoint> {
    (1..=HISTORY_DAYS)
        .rev()
        .map(|days_before| HistoryPoint {
            date: today - Duration::days(days_before),
            price: Decimal::from(BASE_PRICE + (days_before % 10) * 500 - 2000),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, 1).unwrap()
    }

    #[test]
    fn test_thirty_points_oldest_first() {
        let history = synthesize(reference_date());
        assert_eq!(history.len(), 30);
        assert_eq!(
            history.first().unwrap().date,
            reference_date() - Duration::days(30)
        );
        assert_eq!(
            history.last().unwrap().date,
            reference_date() - Duration::days(1)
        );
    }

    #[test]
    fn test_dates_strictly_increasing_one_per_day() {
        let history = synthesize(reference_date());
        for pair in history.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
    }

    #[test]
    fn test_price_formula() {
        let history = synthesize(reference_date());
        for (idx, point) in history.iter().enumerate() {
            let days_before = 30 - idx as i64;
            let expected = Decimal::from(80500 + (days_before % 10) * 500 - 2000);
            assert_eq!(point.price, expected, "day -{}", days_before);
        }
        // Spot checks against hand-computed values.
        assert_eq!(history[0].price, dec!(78500)); // 30 days before: 30 % 10 == 0
        assert_eq!(history[29].price, dec!(79000)); // 1 day before: 1 % 10 == 1
    }

    #[test]
    fn test_deterministic_for_a_date() {
        assert_eq!(synthesize(reference_date()), synthesize(reference_date()));
    }
}
