//! Dual number type integration for automatic differentiation.
//!
//! This module provides a type alias for num-dual's `Dual64` type.
//! Together with the [`Scalar`](crate::traits::Scalar) implementation
//! in `traits::scalar`, it lets a payoff evaluator compute pathwise
//! sensitivities through exactly the code that prices with `f64`.
//!
//! ## Usage
//!
//! ```
//! use mc_core::traits::Scalar;
//! use mc_core::types::dual::DualNumber;
//!
//! // Seed the spot with derivative 1 to differentiate with respect to it
//! let spot = DualNumber::new(110.0, 1.0);
//! let payoff = (spot - DualNumber::from_real(100.0)).max(DualNumber::from_real(0.0));
//!
//! assert_eq!(payoff.re, 10.0);  // value
//! assert_eq!(payoff.eps, 1.0);  // d payoff / d spot
//! ```

/// Type alias for num-dual's `Dual64` (f64-based dual numbers).
///
/// Supports first-order forward-mode automatic differentiation:
/// - `.re`: Real part (function value)
/// - `.eps`: Dual part (derivative)
pub type DualNumber = num_dual::Dual64;
