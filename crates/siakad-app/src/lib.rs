//! Application layer - configuration, logging and service assembly

pub mod config;
pub mod logging;
pub mod service;

pub use config::Config;
pub use service::open_enrollment_service;
