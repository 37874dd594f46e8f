//! Integration tests for module exports.
//!
//! Verify that all public modules and types are correctly exported and
//! accessible via absolute paths.

/// Test that the Gaussian functions are accessible via absolute path.
#[test]
fn test_gaussian_module_exports() {
    use mc_core::math::gaussian::inv_norm_cdf;
    use mc_core::math::gaussian::norm_cdf;
    use mc_core::math::gaussian::norm_pdf;

    // Verify all functions are callable
    let _ = norm_pdf(0.5_f64);
    let _ = norm_cdf(0.5_f64);
    let _ = inv_norm_cdf(0.5_f64);
}

/// Test that the traits module is accessible via absolute path.
#[test]
fn test_traits_module_exports() {
    use mc_core::traits::Float;
    use mc_core::traits::Scalar;

    // Verify Scalar can bound a generic function
    fn forward_value<T: Scalar>(spot: T, carry: f64) -> T {
        spot * T::from_real(carry)
    }
    assert_eq!(forward_value(100.0_f64, 1.05), 105.0);

    // Verify Float re-export works
    fn generic_sqrt<T: Float>(x: T) -> T {
        x.sqrt()
    }
    assert_eq!(generic_sqrt(4.0_f64), 2.0);
}

/// Test that the types module is accessible via absolute path.
#[test]
fn test_types_module_exports() {
    use mc_core::types::time::SYSTEM_TIME;
    use mc_core::types::Time;

    let maturity: Time = 1.0;
    assert!(maturity > SYSTEM_TIME);
}

/// Test that the dual number alias is accessible when enabled.
#[cfg(feature = "num-dual-mode")]
#[test]
fn test_dual_module_exports() {
    use mc_core::traits::Scalar;
    use mc_core::types::dual::DualNumber;
    use mc_core::types::DualNumber as ReExported;

    let x: ReExported = DualNumber::new(2.0, 1.0);
    assert_eq!(x.real(), 2.0);
}
