//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Methods touching
//! tenant-owned tables always take the owner's `user_id`.

pub mod album_repo;
pub mod camera_repo;
pub mod client_repo;
pub mod event_cost_repo;
pub mod event_repo;
pub mod invoice_repo;
pub mod lens_repo;
pub mod photo_repo;
pub mod pricing_tier_repo;
pub mod report_repo;
pub mod transaction_repo;
pub mod user_repo;

pub use album_repo::AlbumRepo;
pub use camera_repo::CameraRepo;
pub use client_repo::ClientRepo;
pub use event_cost_repo::EventCostRepo;
pub use event_repo::EventRepo;
pub use invoice_repo::InvoiceRepo;
pub use lens_repo::LensRepo;
pub use photo_repo::PhotoRepo;
pub use pricing_tier_repo::PricingTierRepo;
pub use report_repo::ReportRepo;
pub use transaction_repo::TransactionRepo;
pub use user_repo::UserRepo;
