//! Salon booking core: salon profiles, service catalogs, weekly working
//! hours and appointment scheduling with non-overlap enforcement.
//!
//! The crate exposes plain async call contracts over Postgres. HTTP
//! delivery, session handling and rendering belong to the consumer; the
//! acting user's identity always arrives as an explicit argument.

pub mod config;
pub mod db;
pub mod error;
pub mod scheduling;
pub mod services;
pub mod telemetry;

pub use error::{AppError, AppResult};
