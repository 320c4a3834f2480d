pub mod auth;
pub mod camera;
pub mod client;
pub mod dashboard;
pub mod event;
pub mod finance;
pub mod gallery;
pub mod health;
pub mod invoice;
pub mod lens;
pub mod transaction;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                     register (public)
/// /auth/login                        login (public)
/// /auth/me                           current user (requires auth)
///
/// /cameras                           list, create
/// /cameras/{id}                      get, update, delete
///
/// /lenses                            list, create
/// /lenses/{id}                       get, update, delete
///
/// /events                            list, create
/// /events/{id}                       get, delete (cascades costs)
/// /events/{id}/status                update status (PATCH)
/// /events/{id}/financials            financial snapshot (GET), base price (PATCH)
/// /events/{id}/shutter-usage         book shutter wear (POST)
/// /events/{id}/public                event page + issued invoices (public)
/// /events/{id}/costs                 list, add cost lines
/// /costs/{id}                        update, delete a cost line
///
/// /transactions                      list, create
/// /transactions/{id}                 update, delete
///
/// /finance/ledger                    merged activity feed
///
/// /dashboard/summary                 monthly rollup (?year&month)
/// /dashboard/charts                  6-month trend + camera wear
/// /dashboard/cameras                 fleet listing
///
/// /clients                           list, create
/// /clients/{id}                      get, update, delete
///
/// /invoices                          list, create (with line items)
/// /invoices/{id}                     detail with items (GET), patch (PUT)
/// /invoices/{id}/pdf                 rendered PDF (public)
///
/// /albums                            list, create
/// /albums/{id}                       delete (cascades photos + tiers)
/// /albums/{id}/photos                upload (multipart), public listing
/// /albums/{id}/pricing-tiers         replace (PUT), read (GET)
///
/// /checkout                          bundle purchase (public, POST)
/// /payments/callback                 gateway webhook (public, POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (register, login, me).
        .nest("/auth", auth::router())
        // Equipment ledger: camera bodies and lenses.
        .nest("/cameras", camera::router())
        .nest("/lenses", lens::router())
        // Event ledger (also nests cost lines and the public event page).
        .nest("/events", event::router())
        // Direct addressing of individual cost lines.
        .nest("/costs", event::costs_router())
        // Manual general-ledger entries.
        .nest("/transactions", transaction::router())
        // Merged activity feed.
        .nest("/finance", finance::router())
        // Zero-degrading reporting endpoints.
        .nest("/dashboard", dashboard::router())
        // CRM: client records.
        .nest("/clients", client::router())
        // Invoices, including the public PDF link.
        .nest("/invoices", invoice::router())
        // Gallery albums, photos and pricing tiers.
        .nest("/albums", gallery::router())
        // Public purchase flow.
        .nest("/checkout", gallery::checkout_router())
        // Payment gateway webhook.
        .nest("/payments", gallery::payments_router())
}
