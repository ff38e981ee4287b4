//! Spare rider API adapter
//!
//! This module provides the integration with the Spare riders endpoint: the
//! [`RiderSource`] trait, its HTTP implementation and the page wire model.

pub mod client;
pub mod models;
mod source;

pub use client::SpareLabsClient;
pub use models::RiderPage;
pub use source::RiderSource;
