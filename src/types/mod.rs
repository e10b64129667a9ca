//! Type definitions module.
//!
//! Contains shared types used across the application.

pub mod transaction;
pub mod units;

pub use transaction::*;
pub use units::*;
