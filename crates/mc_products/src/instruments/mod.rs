//! Product definitions for path-dependent Monte-Carlo pricing.
//!
//! This module provides:
//! - [`Product`]: the abstract contract an external simulator drives —
//!   a monitoring timeline, a path payoff, and duplication through an
//!   instrument-agnostic handle
//! - [`Scenario`]: one spot observation of a simulated path
//! - [`UpAndOutCall`]: up-and-out barrier call with smoothed knock-out
//! - [`UocParams`]: its immutable contract terms
//!
//! # Architecture
//!
//! Payoffs are generic over [`Scalar`](mc_core::traits::Scalar), so
//! the identical evaluation code serves plain `f64` valuation and
//! dual-number pathwise risk. Products are held as
//! `Box<dyn Product<T>>` handles that clone without knowledge of the
//! concrete instrument.
//!
//! # Examples
//!
//! ```
//! use mc_products::instruments::{Product, Scenario, UocParams, UpAndOutCall};
//!
//! let uoc = UpAndOutCall::new(UocParams {
//!     strike: 100.0,
//!     barrier: 120.0,
//!     maturity: 1.0,
//!     monitor_freq: 1.0 / 12.0,
//! })
//! .unwrap();
//!
//! // One observation per timeline date, produced externally
//! let path: Vec<Scenario<f64>> = uoc
//!     .timeline()
//!     .iter()
//!     .map(|_| Scenario::new(105.0))
//!     .collect();
//!
//! assert_eq!(uoc.payoff(&path), 5.0);
//! ```

mod traits;
mod uoc;

pub use traits::{Product, Scenario};
pub use uoc::{UocParams, UpAndOutCall};
