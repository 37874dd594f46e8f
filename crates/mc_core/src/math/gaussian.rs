//! Standard normal distribution approximations.
//!
//! This module provides closed-form approximations of:
//! - `norm_pdf`: Probability density function (PDF)
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `inv_norm_cdf`: Inverse CDF (quantile function)
//!
//! All functions are generic over `T: Float` to support both `f32` and
//! `f64`. They operate on plain reals only: normal variates are built
//! from uniform draws *before* any differentiable type enters the
//! pricing path, so no dual-number support is needed here.
//!
//! All three routines are deterministic, branch-bounded and O(1), with
//! explicit saturation in the tails instead of unbounded approximation
//! error.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Tail cut-off beyond which the density and CDF saturate.
const TAIL_CUTOFF: f64 = 10.0;

/// Standard normal probability density function.
///
/// Computes φ(x) = exp(-x² / 2) / sqrt(2π), saturating to 0 for
/// |x| > 10 where the density is far below machine relevance.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use mc_core::math::gaussian::norm_pdf;
///
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
///
/// // Saturated tail
/// assert_eq!(norm_pdf(12.0_f64), 0.0);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let cutoff = T::from(TAIL_CUTOFF).unwrap();
    if x < -cutoff || cutoff < x {
        return T::zero();
    }

    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();

    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Standard normal cumulative distribution function.
///
/// Zelen & Severo's polynomial approximation (1964): for x ≥ 0,
///
/// ```text
/// Φ(x) = 1 - φ(x) · t · (b1 + t·(b2 + t·(b3 + t·(b4 + t·b5))))
/// t    = 1 / (1 + p·x)
/// ```
///
/// with the symmetry Φ(-x) = 1 - Φ(x) halving the working domain, and
/// saturation to 0 below -10 and 1 above +10.
///
/// # Arguments
/// * `x` - Input value
///
/// # Returns
/// The probability P(X <= x) for standard normal X, in range [0, 1].
///
/// # Accuracy
/// Absolute error below 1.5e-7 for all x (single-precision grade),
/// without iteration.
///
/// # Examples
/// ```
/// use mc_core::math::gaussian::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.0_f64) - 0.8413447).abs() < 1e-6);
/// assert_eq!(norm_cdf(-11.0_f64), 0.0);
/// assert_eq!(norm_cdf(11.0_f64), 1.0);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let cutoff = T::from(TAIL_CUTOFF).unwrap();
    if x < -cutoff {
        return T::zero();
    }
    if x > cutoff {
        return T::one();
    }
    if x < T::zero() {
        return T::one() - norm_cdf(-x);
    }

    // Zelen & Severo constants
    let p = T::from(0.2316419).unwrap();
    let b1 = T::from(0.319381530).unwrap();
    let b2 = T::from(-0.356563782).unwrap();
    let b3 = T::from(1.781477937).unwrap();
    let b4 = T::from(-1.821255978).unwrap();
    let b5 = T::from(1.330274429).unwrap();

    let t = T::one() / (T::one() + p * x);

    // Horner's method for polynomial evaluation
    let pol = t * (b1 + t * (b2 + t * (b3 + t * (b4 + t * b5))));

    T::one() - norm_pdf(x) * pol
}

/// Inverse of the standard normal CDF (quantile function).
///
/// Beasley-Springer-Moro approximation (Moro, "The Full Monte", Risk
/// 1995; see Glasserman, Monte Carlo Methods in Financial Engineering,
/// p. 68). Two regimes around the median:
///
/// - |p - 0.5| < 0.42: rational polynomial in (p - 0.5)²
/// - otherwise: degree-8 polynomial in log(-log(min(p, 1-p)))
///
/// with the result sign-flipped for p > 0.5 by symmetry.
///
/// This is the standard O(1) transform from a uniform draw to a normal
/// draw without rejection sampling; a path generator calls it once per
/// time-step per path.
///
/// # Arguments
/// * `p` - Probability, caller-guaranteed to lie in (0, 1)
///
/// # Caller Contract
/// Results for `p` outside (0, 1) are undefined; the domain is not
/// checked here.
///
/// # Examples
/// ```
/// use mc_core::math::gaussian::{inv_norm_cdf, norm_cdf};
///
/// assert!(inv_norm_cdf(0.5_f64).abs() < 1e-9);
///
/// // Round-trip through the CDF
/// let p = 0.975_f64;
/// assert!((norm_cdf(inv_norm_cdf(p)) - p).abs() < 1e-6);
/// ```
pub fn inv_norm_cdf<T: Float>(p: T) -> T {
    let half = T::from(0.5).unwrap();
    let sup = p > half;
    let up = if sup { T::one() - p } else { p };

    // Beasley-Springer constants, central regime
    let a0 = T::from(2.50662823884).unwrap();
    let a1 = T::from(-18.61500062529).unwrap();
    let a2 = T::from(41.39119773534).unwrap();
    let a3 = T::from(-25.44106049637).unwrap();

    let b0 = T::from(-8.47351093090).unwrap();
    let b1 = T::from(23.08336743743).unwrap();
    let b2 = T::from(-21.06224101826).unwrap();
    let b3 = T::from(3.13082909833).unwrap();

    let x = up - half;

    if x.abs() < T::from(0.42).unwrap() {
        let r = x * x;
        let num = x * (((a3 * r + a2) * r + a1) * r + a0);
        let den = (((b3 * r + b2) * r + b1) * r + b0) * r + T::one();
        let r = num / den;
        return if sup { -r } else { r };
    }

    // Moro constants, tail regime
    let c0 = T::from(0.3374754822726147).unwrap();
    let c1 = T::from(0.9761690190917186).unwrap();
    let c2 = T::from(0.1607979714918209).unwrap();
    let c3 = T::from(0.0276438810333863).unwrap();
    let c4 = T::from(0.0038405729373609).unwrap();
    let c5 = T::from(0.0003951896511919).unwrap();
    let c6 = T::from(0.0000321767881768).unwrap();
    let c7 = T::from(0.0000002888167364).unwrap();
    let c8 = T::from(0.0000003960315187).unwrap();

    let r = (-up.ln()).ln();
    let r = c0
        + r * (c1 + r * (c2 + r * (c3 + r * (c4 + r * (c5 + r * (c6 + r * (c7 + r * c8)))))));

    if sup {
        r
    } else {
        -r
    }
}
