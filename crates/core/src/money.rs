//! Currency helpers for the payment boundary.

/// Convert a major-unit amount (e.g. `12.34`) to integer minor units (`1234`).
///
/// The payment gateway accepts cents only; amounts are rounded to the
/// nearest cent before conversion.
pub fn to_minor_units(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
