//! Mathematical functions for Monte-Carlo pricing.
//!
//! This module provides closed-form Gaussian approximations
//! (`gaussian`): density, CDF and inverse CDF, all deterministic and
//! O(1) per evaluation.

pub mod gaussian;
