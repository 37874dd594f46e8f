//! Core types for the pricing workspace.
//!
//! This module provides:
//! - Time types: `Time`, `SYSTEM_TIME` (`types::time`)
//! - Dual number integration: `DualNumber` (`types::dual`)

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod time;

#[cfg(feature = "num-dual-mode")]
pub use dual::DualNumber;
pub use time::{Time, SYSTEM_TIME};
