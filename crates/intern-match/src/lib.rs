pub mod catalog;
pub mod config;
pub mod context;
pub mod error;
pub mod profile;
pub mod router;
pub mod telemetry;
