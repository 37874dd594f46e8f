//! # mc_core: Numerical Foundation for Monte-Carlo Pricing
//!
//! ## Foundation Layer Role
//!
//! mc_core is the bottom layer of the pricing workspace, providing:
//! - Gaussian density, CDF and inverse CDF approximations (`math::gaussian`)
//! - The `Scalar` numeric capability trait (`traits::scalar`)
//! - Dual number type integration (`types::dual`)
//! - The `Time` year-fraction scalar (`types::time`)
//!
//! ## Zero Dependency Principle
//!
//! The foundation layer has no dependencies on other workspace crates,
//! with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - num-dual: Dual number types for automatic differentiation (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use mc_core::math::gaussian::{inv_norm_cdf, norm_cdf};
//! use mc_core::traits::Scalar;
//!
//! // Turn a uniform draw into a standard normal variate
//! let z = inv_norm_cdf(0.975_f64);
//! assert!((z - 1.96).abs() < 1e-2);
//!
//! // Round-trip through the CDF approximation
//! assert!((norm_cdf(z) - 0.975).abs() < 1e-6);
//!
//! // The Scalar capability set bounds payoff code; f64 is the
//! // valuation instance
//! fn intrinsic<T: Scalar>(spot: T, strike: f64) -> T {
//!     (spot - T::from_real(strike)).max(T::from_real(0.0))
//! }
//! assert_eq!(intrinsic(110.0_f64, 100.0), 10.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Implement `Scalar` for `num_dual::Dual64`,
//!   enabling pathwise sensitivities through the same payoff code that
//!   prices with `f64`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
