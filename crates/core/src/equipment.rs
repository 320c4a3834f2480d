//! Shutter-wear accounting for cameras.
//!
//! A camera body depreciates with every actuation: divide the purchase price
//! by the rated shutter life and each recorded shot carries that fraction of
//! the price as an event cost. Wear percentages are display values and are
//! clamped at 100 even once a body has outlived its rating.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Rated shutter life assumed for display when a camera has no usable rating.
pub const DEFAULT_MAX_SHUTTER_LIFE: i64 = 150_000;

/// Wear percentage above which a camera is flagged for replacement planning.
pub const WEAR_WARNING_PCT: f64 = 75.0;
/// Wear percentage above which a camera is considered at end of life.
pub const WEAR_CRITICAL_PCT: f64 = 90.0;

// ---------------------------------------------------------------------------
// Cost accrual
// ---------------------------------------------------------------------------

/// Amortized cost of a single shutter actuation.
///
/// `purchase_price / max_shutter_life`, or `0` when the rated life is not a
/// positive number (free or unrated bodies accrue no wear cost).
pub fn cost_per_shot(purchase_price: f64, max_shutter_life: i64) -> f64 {
    if max_shutter_life > 0 {
        purchase_price / max_shutter_life as f64
    } else {
        0.0
    }
}

/// Total wear cost for a batch of actuations.
pub fn shutter_wear_cost(purchase_price: f64, max_shutter_life: i64, shots: i64) -> f64 {
    cost_per_shot(purchase_price, max_shutter_life) * shots as f64
}

// ---------------------------------------------------------------------------
// Wear display
// ---------------------------------------------------------------------------

/// Wear ratio for display, rounded to one decimal and clamped at 100.
///
/// A non-positive `rated_life` falls back to [`DEFAULT_MAX_SHUTTER_LIFE`]
/// so the dashboard never divides by zero.
pub fn wear_percentage(usage: i64, rated_life: i64) -> f64 {
    let rated = if rated_life > 0 {
        rated_life
    } else {
        DEFAULT_MAX_SHUTTER_LIFE
    };
    let pct = usage as f64 / rated as f64 * 100.0;
    let rounded = (pct * 10.0).round() / 10.0;
    rounded.min(100.0)
}

/// Health label derived from the displayed wear percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum WearStatus {
    Good,
    Warning,
    Critical,
}

impl WearStatus {
    /// Classify a (clamped) wear percentage.
    pub fn from_percentage(pct: f64) -> Self {
        if pct > WEAR_CRITICAL_PCT {
            Self::Critical
        } else if pct > WEAR_WARNING_PCT {
            Self::Warning
        } else {
            Self::Good
        }
    }

    /// Human-readable label for display in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Warning => "Warning",
            Self::Critical => "Critical",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
