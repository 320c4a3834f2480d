//! Route definitions for the `/dashboard` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`. All three endpoints degrade to
/// zeroed/empty payloads on failure instead of returning a 500.
///
/// ```text
/// GET /summary?year&month  -> summary
/// GET /charts              -> charts
/// GET /cameras             -> cameras
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/summary", get(dashboard::summary))
        .route("/charts", get(dashboard::charts))
        .route("/cameras", get(dashboard::cameras))
}
