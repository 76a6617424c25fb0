//! Orchestration over the scheduling core and the repositories.
//!
//! Authorization and object resolution are explicit, sequential steps
//! ([`access`]); the acting user is always a parameter. Slot-affecting
//! writes run inside a transaction holding the salon's row lock so the
//! read-then-write of the overlap checks cannot race.

mod access;
pub mod booking;
pub mod catalog;
pub mod offers;
pub mod reviews;
pub mod salons;
pub mod schedule;
pub mod workstation;

pub use access::{require_salon_owner, require_service_owner};
