//! Product trait and path observation types.

use mc_core::traits::Scalar;
use mc_core::types::Time;

/// One observation of the underlying along a simulated path.
///
/// A path carries exactly one scenario per monitoring timeline date,
/// index-aligned with the timeline. The spot type is generic: a plain
/// real for valuation or a dual number for pathwise risk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scenario<T> {
    /// Spot price of the underlying at the observation date.
    pub spot: T,
}

impl<T> Scenario<T> {
    /// Create a new observation.
    #[inline]
    pub fn new(spot: T) -> Self {
        Self { spot }
    }
}

/// Abstract contract between a product and the external simulator.
///
/// A product exposes the monitoring dates it needs simulated, consumes
/// one path per evaluation, and can be duplicated behind an
/// instrument-agnostic handle so heterogeneous products are stored and
/// dispatched uniformly.
///
/// # Purity
///
/// `payoff` is a pure function of the immutable contract terms and one
/// path: no state persists between calls, so a single product instance
/// may be shared across arbitrarily many concurrent evaluations.
///
/// # Examples
///
/// ```
/// use mc_core::traits::Scalar;
/// use mc_core::types::Time;
/// use mc_products::instruments::{Product, Scenario};
///
/// /// Pays the terminal spot, whatever happened along the way.
/// #[derive(Clone)]
/// struct TerminalSpot {
///     timeline: Vec<Time>,
/// }
///
/// impl<T: Scalar> Product<T> for TerminalSpot {
///     fn timeline(&self) -> &[Time] {
///         &self.timeline
///     }
///
///     fn payoff(&self, path: &[Scenario<T>]) -> T {
///         path[path.len() - 1].spot
///     }
///
///     fn clone_box(&self) -> Box<dyn Product<T>> {
///         Box::new(self.clone())
///     }
/// }
///
/// let product: Box<dyn Product<f64>> = Box::new(TerminalSpot {
///     timeline: vec![0.0, 1.0],
/// });
/// let copy = product.clone();
/// assert_eq!(copy.payoff(&[Scenario::new(90.0), Scenario::new(110.0)]), 110.0);
/// ```
pub trait Product<T: Scalar>: Send + Sync {
    /// The monitoring timeline: ordered, strictly increasing, starting
    /// at the system time and ending exactly at maturity.
    ///
    /// The external simulator produces one spot observation per entry.
    fn timeline(&self) -> &[Time];

    /// Evaluate the payoff of one simulated path.
    ///
    /// # Caller Contract
    /// `path` has one scenario per timeline entry, index-aligned.
    fn payoff(&self, path: &[Scenario<T>]) -> T;

    /// Duplicate this product behind the instrument-agnostic handle.
    ///
    /// The copy owns independent contract terms and timeline and is
    /// observably equivalent to the original.
    fn clone_box(&self) -> Box<dyn Product<T>>;
}

impl<T: Scalar> Clone for Box<dyn Product<T>> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
