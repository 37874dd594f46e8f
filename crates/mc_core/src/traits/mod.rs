//! Foundation traits for generic pricing code.
//!
//! This module defines the numeric capability contract (`Scalar`)
//! consumed by payoff evaluators, and re-exports `num_traits::Float`
//! for plain-real generic math.

pub mod scalar;

pub use num_traits::Float;
pub use scalar::Scalar;
