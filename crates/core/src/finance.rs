//! Calendar-month arithmetic and per-event financial math for the rollup.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::CoreError;

/// Number of months covered by the dashboard trend series.
pub const TREND_MONTHS: usize = 6;

// ---------------------------------------------------------------------------
// Month windows
// ---------------------------------------------------------------------------

/// Half-open `[start, end)` window covering one calendar month.
///
/// `end` is the first day of the following month; December rolls the year.
pub fn month_window(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), CoreError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::Validation(format!("Invalid year/month: {year}-{month}")))?;
    let end = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| CoreError::Validation(format!("Invalid year/month: {year}-{month}")))?;
    Ok((start, end))
}

/// The `count` calendar months ending at `(year, month)` inclusive,
/// oldest first.
pub fn trailing_months(
    year: i32,
    month: u32,
    count: usize,
) -> Result<Vec<(i32, u32)>, CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::Validation(format!("Invalid month: {month}")));
    }

    let mut months = Vec::with_capacity(count);
    let (mut y, mut m) = (year, month);
    for _ in 0..count {
        months.push((y, m));
        if m == 1 {
            y -= 1;
            m = 12;
        } else {
            m -= 1;
        }
    }
    months.reverse();
    Ok(months)
}

// ---------------------------------------------------------------------------
// Cost lines
// ---------------------------------------------------------------------------

/// How a cost line's effective amount is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateType {
    /// The submitted amount is charged as-is.
    Flat,
    /// The amount is derived from `unit_price * quantity`; any
    /// submitted amount is ignored.
    PerUnit,
}

impl RateType {
    /// Parse the wire representation (`"flat"` / `"per_unit"`).
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "flat" => Ok(Self::Flat),
            "per_unit" => Ok(Self::PerUnit),
            other => Err(CoreError::Validation(format!(
                "Unknown rate type: {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::PerUnit => "per_unit",
        }
    }
}

/// Effective charge for a cost line.
pub fn cost_amount(rate_type: RateType, flat_amount: f64, unit_price: f64, quantity: f64) -> f64 {
    match rate_type {
        RateType::Flat => flat_amount,
        RateType::PerUnit => unit_price * quantity,
    }
}

// ---------------------------------------------------------------------------
// Per-event financials
// ---------------------------------------------------------------------------

/// Revenue, cost, and profit summary for a single event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EventFinancials {
    pub total_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
}

impl EventFinancials {
    /// Build from an event's base price and the sum of its recorded costs.
    pub fn from_parts(base_price: f64, total_cost: f64) -> Self {
        Self {
            total_revenue: base_price,
            total_cost,
            net_profit: base_price - total_cost,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // -- month_window --

    #[test]
    fn window_spans_one_month() {
        let (start, end) = month_window(2024, 3).unwrap();
        assert_eq!(start, ymd(2024, 3, 1));
        assert_eq!(end, ymd(2024, 4, 1));
    }

    #[test]
    fn december_window_rolls_the_year() {
        let (start, end) = month_window(2024, 12).unwrap();
        assert_eq!(start, ymd(2024, 12, 1));
        assert_eq!(end, ymd(2025, 1, 1));
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert!(month_window(2024, 13).is_err());
        assert!(month_window(2024, 0).is_err());
    }

    // -- trailing_months --

    #[test]
    fn trend_has_requested_length_oldest_first() {
        let months = trailing_months(2024, 6, 6).unwrap();
        assert_eq!(months.len(), 6);
        assert_eq!(months.first(), Some(&(2024, 1)));
        assert_eq!(months.last(), Some(&(2024, 6)));
    }

    #[test]
    fn trend_crosses_a_year_boundary() {
        let months = trailing_months(2024, 2, 6).unwrap();
        assert_eq!(
            months,
            vec![
                (2023, 9),
                (2023, 10),
                (2023, 11),
                (2023, 12),
                (2024, 1),
                (2024, 2),
            ]
        );
    }

    #[test]
    fn trend_rejects_invalid_month() {
        assert!(trailing_months(2024, 13, 6).is_err());
    }

    // -- cost_amount --

    #[test]
    fn flat_cost_charges_the_submitted_amount() {
        assert_eq!(cost_amount(RateType::Flat, 300.0, 12.5, 4.0), 300.0);
    }

    #[test]
    fn per_unit_cost_multiplies_and_ignores_the_submitted_amount() {
        assert_eq!(cost_amount(RateType::PerUnit, 9999.0, 12.5, 4.0), 50.0);
    }

    #[test]
    fn rate_type_parses_wire_values() {
        assert_eq!(RateType::parse("flat").unwrap(), RateType::Flat);
        assert_eq!(RateType::parse("per_unit").unwrap(), RateType::PerUnit);
        assert!(RateType::parse("hourly").is_err());
    }

    // -- EventFinancials --

    #[test]
    fn financials_subtract_costs_from_base_price() {
        let fin = EventFinancials::from_parts(2000.0, 450.0);
        assert_eq!(fin.total_revenue, 2000.0);
        assert_eq!(fin.total_cost, 450.0);
        assert_eq!(fin.net_profit, 1550.0);
    }

    #[test]
    fn financials_with_no_costs() {
        let fin = EventFinancials::from_parts(2000.0, 0.0);
        assert_eq!(fin.net_profit, 2000.0);
    }

    #[test]
    fn financials_can_go_negative() {
        let fin = EventFinancials::from_parts(100.0, 450.0);
        assert_eq!(fin.net_profit, -350.0);
    }
}
