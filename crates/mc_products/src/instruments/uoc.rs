//! Up-and-out barrier call with smoothed knock-out.

use mc_core::traits::Scalar;
use mc_core::types::Time;

use super::traits::{Product, Scenario};
use crate::schedules::{monitoring_timeline, ScheduleError};

/// Contract terms of an up-and-out barrier call.
///
/// Set once at construction and immutable thereafter. The barrier is
/// caller-guaranteed to sit above the economically sensible strike
/// region; neither strike nor barrier is validated here.
///
/// # Examples
///
/// ```
/// use mc_products::instruments::UocParams;
///
/// let params = UocParams {
///     strike: 100.0,
///     barrier: 120.0,
///     maturity: 1.0,
///     monitor_freq: 1.0 / 12.0,
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UocParams {
    /// Strike of the vanilla call paid at maturity if the path survives.
    pub strike: f64,
    /// Upper knock-out barrier.
    pub barrier: f64,
    /// Contract maturity, in year fractions after the system time.
    pub maturity: Time,
    /// Spacing between barrier observations, in year fractions.
    pub monitor_freq: Time,
}

/// Up-and-out barrier call option.
///
/// Pays `max(S(maturity) - strike, 0)` unless the spot is observed
/// above the barrier on any monitoring date, in which case the payoff
/// is zero.
///
/// # Barrier Smoothing
///
/// A hard knock-out indicator is discontinuous at the barrier, which
/// destabilises pathwise sensitivities. The payoff therefore replaces
/// the indicator with a linear ramp over a band of ±1% of the initial
/// spot around the barrier: observations below the band leave the
/// survival factor untouched, observations above it knock the path out
/// outright, and observations inside it scale the survival factor by
/// `(barrier + half - spot) / (2·half)`. The payoff is continuous
/// (and differentiable) in every observation, at the cost of a small
/// bias that vanishes as the band narrows.
///
/// The band half-width itself is computed on plain reals and never
/// differentiated; only the payoff through the band carries
/// sensitivities.
///
/// # Examples
///
/// ```
/// use mc_products::instruments::{Product, Scenario, UocParams, UpAndOutCall};
///
/// let uoc = UpAndOutCall::new(UocParams {
///     strike: 100.0,
///     barrier: 120.0,
///     maturity: 1.0,
///     monitor_freq: 1.0 / 12.0,
/// })
/// .unwrap();
///
/// // A path that never approaches the barrier pays the vanilla call
/// let quiet: Vec<Scenario<f64>> =
///     uoc.timeline().iter().map(|_| Scenario::new(110.0)).collect();
/// assert_eq!(uoc.payoff(&quiet), 10.0);
///
/// // One observation above the barrier knocks the payoff out
/// let mut breached = quiet.clone();
/// breached[3] = Scenario::new(125.0);
/// assert_eq!(uoc.payoff(&breached), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UpAndOutCall {
    strike: f64,
    barrier: f64,
    maturity: Time,
    timeline: Vec<Time>,
}

/// Smoothing band half-width as a fraction of the initial spot.
const SMOOTHING_FRACTION: f64 = 0.01;

impl UpAndOutCall {
    /// Store the contract terms and build the monitoring timeline.
    ///
    /// The timeline runs from the system time to maturity with one
    /// entry per monitoring date; it is built once and reused for
    /// every simulated path.
    ///
    /// # Errors
    /// Propagates [`ScheduleError`] for degenerate terms (non-positive
    /// maturity, or a monitoring frequency at or below the one hour
    /// timeline granularity).
    pub fn new(params: UocParams) -> Result<Self, ScheduleError> {
        let timeline = monitoring_timeline(params.maturity, params.monitor_freq)?;
        Ok(Self {
            strike: params.strike,
            barrier: params.barrier,
            maturity: params.maturity,
            timeline,
        })
    }

    /// Strike of the terminal vanilla call.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Upper knock-out barrier.
    #[inline]
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    /// Contract maturity in year fractions.
    #[inline]
    pub fn maturity(&self) -> Time {
        self.maturity
    }

    /// The monitoring timeline (see [`Product::timeline`]).
    #[inline]
    pub fn timeline(&self) -> &[Time] {
        &self.timeline
    }
}

impl<T: Scalar> Product<T> for UpAndOutCall {
    fn timeline(&self) -> &[Time] {
        &self.timeline
    }

    fn payoff(&self, path: &[Scenario<T>]) -> T {
        debug_assert_eq!(
            path.len(),
            self.timeline.len(),
            "path must be index-aligned with the monitoring timeline"
        );

        // Band half-width: 1% of the initial spot, on plain reals
        let half = SMOOTHING_FRACTION * path[0].spot.real();

        // Survival factor, starts alive
        let mut alive = T::from_real(1.0);

        for scenario in path {
            // Definitive breach: knocked out, remaining dates irrelevant
            if scenario.spot.gt_real(self.barrier + half) {
                return T::from_real(0.0);
            }

            // Inside the band: linear ramp from 1 at the lower edge
            // down to 0 at the upper edge
            if scenario.spot.gt_real(self.barrier - half) {
                let ramp = (T::from_real(self.barrier + half) - scenario.spot)
                    / T::from_real(2.0 * half);
                alive = alive * ramp;
            }
        }

        // Survival-weighted vanilla call at maturity
        let terminal = path[path.len() - 1].spot;
        alive * (terminal - T::from_real(self.strike)).max(T::from_real(0.0))
    }

    fn clone_box(&self) -> Box<dyn Product<T>> {
        Box::new(self.clone())
    }
}
