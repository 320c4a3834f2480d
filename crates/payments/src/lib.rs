//! Payment-gateway integration for photo checkout.
//!
//! The gateway is an external bill-hosting service: we create a bill
//! for an integer-cent amount and send the buyer to the returned
//! payment URL. Credentials live in [`PaymentConfig`] and never leave
//! this crate.

pub mod config;
pub mod gateway;

pub use config::PaymentConfig;
pub use gateway::{
    BillRequest, CheckoutSession, HttpGateway, NullGateway, PaymentGateway, PaymentGatewayError,
};
