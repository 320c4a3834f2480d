//! Handlers for the `/dashboard` resource.
//!
//! Dashboard endpoints are zero-degrading: a failure computing any panel
//! logs the cause and returns an empty/zeroed payload instead of a 500, so
//! one broken panel never blanks the whole dashboard.

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use shutterdesk_core::equipment::{wear_percentage, WearStatus};
use shutterdesk_core::finance::{month_window, trailing_months, TREND_MONTHS};
use shutterdesk_core::types::DbId;
use shutterdesk_db::models::camera::Camera;
use shutterdesk_db::repositories::{CameraRepo, ReportRepo};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /dashboard/summary`. Both default to the
/// current month.
#[derive(Debug, Deserialize)]
pub struct SummaryParams {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// One month's rollup across events, event costs and manual transactions.
#[derive(Debug, Default, Serialize)]
pub struct MonthlySummary {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub total_profit: f64,
    pub event_count: i64,
}

/// One month of the six-month trend series.
#[derive(Debug, Serialize)]
pub struct TrendPoint {
    /// Abbreviated month name (`Jan`, `Feb`, ...).
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
}

/// Wear report row for one camera body.
#[derive(Debug, Serialize)]
pub struct CameraHealth {
    pub name: String,
    pub usage: i64,
    pub percentage: f64,
    pub status: &'static str,
}

/// Response for `GET /dashboard/charts`.
#[derive(Debug, Serialize)]
pub struct ChartsResponse {
    pub financial_trend: Vec<TrendPoint>,
    pub camera_health: Vec<CameraHealth>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/summary
pub async fn summary(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<SummaryParams>,
) -> Json<MonthlySummary> {
    let today = Utc::now().date_naive();
    let year = params.year.unwrap_or_else(|| today.year());
    let month = params.month.unwrap_or_else(|| today.month());

    match summary_for_month(&state, user.user_id, year, month).await {
        Ok(summary) => Json(summary),
        Err(e) => {
            tracing::error!(error = %e, year, month, "Dashboard summary failed, returning zeros");
            Json(MonthlySummary::default())
        }
    }
}

/// GET /api/v1/dashboard/charts
pub async fn charts(State(state): State<AppState>, user: AuthUser) -> Json<ChartsResponse> {
    let today = Utc::now().date_naive();

    let financial_trend =
        match trend_series(&state, user.user_id, today.year(), today.month()).await {
            Ok(points) => points,
            Err(e) => {
                tracing::error!(error = %e, "Financial trend failed, returning empty series");
                Vec::new()
            }
        };

    let camera_health = match CameraRepo::list_by_model(&state.pool, user.user_id).await {
        Ok(cameras) => cameras.iter().map(camera_health_row).collect(),
        Err(e) => {
            tracing::error!(error = %e, "Camera health failed, returning empty report");
            Vec::new()
        }
    };

    Json(ChartsResponse {
        financial_trend,
        camera_health,
    })
}

/// GET /api/v1/dashboard/cameras
pub async fn cameras(State(state): State<AppState>, user: AuthUser) -> Json<Vec<Camera>> {
    match CameraRepo::list_by_model(&state.pool, user.user_id).await {
        Ok(cameras) => Json(cameras),
        Err(e) => {
            tracing::error!(error = %e, "Camera status failed, returning empty list");
            Json(Vec::new())
        }
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

async fn summary_for_month(
    state: &AppState,
    user_id: DbId,
    year: i32,
    month: u32,
) -> AppResult<MonthlySummary> {
    let (start, end) = month_window(year, month)?;
    let totals = ReportRepo::monthly_totals(&state.pool, user_id, start, end).await?;

    let total_revenue = totals.revenue_events + totals.revenue_transactions;
    let total_expenses = totals.expenses_event_costs + totals.expenses_transactions;
    Ok(MonthlySummary {
        total_revenue,
        total_expenses,
        total_profit: total_revenue - total_expenses,
        event_count: totals.event_count,
    })
}

/// Six calendar months of rollups, oldest first, ending at `year`/`month`.
async fn trend_series(
    state: &AppState,
    user_id: DbId,
    year: i32,
    month: u32,
) -> AppResult<Vec<TrendPoint>> {
    let months = trailing_months(year, month, TREND_MONTHS)?;
    let mut points = Vec::with_capacity(months.len());
    for (y, m) in months {
        let (start, end) = month_window(y, m)?;
        let totals = ReportRepo::monthly_totals(&state.pool, user_id, start, end).await?;
        points.push(TrendPoint {
            month: start.format("%b").to_string(),
            revenue: totals.revenue_events + totals.revenue_transactions,
            expenses: totals.expenses_event_costs + totals.expenses_transactions,
        });
    }
    Ok(points)
}

fn camera_health_row(camera: &Camera) -> CameraHealth {
    let pct = wear_percentage(camera.current_shutter_count, camera.max_shutter_life);
    CameraHealth {
        name: camera.model_name.clone(),
        usage: camera.current_shutter_count,
        percentage: pct,
        status: WearStatus::from_percentage(pct).label(),
    }
}
