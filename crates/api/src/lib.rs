//! Typed HTTP client for the dashboard backend's roster endpoint.

pub mod client;
pub mod error;
pub mod wire;

pub use client::RosterClient;
pub use error::RosterApiError;
