//! Numeric capability contract for payoff evaluation.
//!
//! Payoff evaluators must run unchanged on plain reals (valuation) and
//! on differentiable number types (pathwise sensitivities). The
//! [`Scalar`] trait captures exactly the capability set a payoff
//! needs: arithmetic, ordering against plain reals, `max`, and
//! conversion to/from a plain real constant.
//!
//! `num_traits::Float` is deliberately not used here: dual number
//! types such as `num_dual::Dual64` do not implement `Float`, and a
//! payoff must never need the full float surface (rounding, bit
//! manipulation, NaN classification) anyway.

use std::ops::{Add, Div, Mul, Sub};

/// Capability set required of a payoff's numeric type.
///
/// Implemented for `f64` (valuation) and, behind the `num-dual-mode`
/// feature, for `num_dual::Dual64` (forward-mode automatic
/// differentiation). Both run the *same* payoff implementation, so the
/// valued price and the differentiated price can never diverge.
///
/// # Conversion Semantics
///
/// `from_real` lifts a plain real constant into `T` with zero
/// derivative content; `real` projects back to the value part. The
/// projection is meant for quantities that must not be differentiated,
/// such as the smoothing band width of a barrier payoff.
///
/// # Examples
///
/// ```
/// use mc_core::traits::Scalar;
///
/// fn intrinsic<T: Scalar>(spot: T, strike: f64) -> T {
///     (spot - T::from_real(strike)).max(T::from_real(0.0))
/// }
///
/// assert_eq!(intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(intrinsic(90.0_f64, 100.0), 0.0);
/// ```
pub trait Scalar:
    Copy
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Lift a plain real constant into `Self` (no derivative content).
    fn from_real(value: f64) -> Self;

    /// Project onto the plain real value part.
    fn real(self) -> f64;

    /// The larger of `self` and `other`, decided on value parts.
    ///
    /// For differentiable types this is the usual pathwise-derivative
    /// convention: the derivative follows whichever branch holds.
    #[inline]
    fn max(self, other: Self) -> Self {
        if self.real() > other.real() {
            self
        } else {
            other
        }
    }

    /// Ordering against a plain real bound, decided on the value part.
    #[inline]
    fn gt_real(self, bound: f64) -> bool {
        self.real() > bound
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_real(value: f64) -> Self {
        value
    }

    #[inline]
    fn real(self) -> f64 {
        self
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        f64::max(self, other)
    }
}

#[cfg(feature = "num-dual-mode")]
impl Scalar for num_dual::Dual64 {
    #[inline]
    fn from_real(value: f64) -> Self {
        num_dual::Dual64::new(value, 0.0)
    }

    #[inline]
    fn real(self) -> f64 {
        self.re
    }
}
