//! Timeline construction error types.

use mc_core::types::Time;
use thiserror::Error;

/// Errors that can occur during monitoring timeline construction.
///
/// Evaluation paths never produce errors; degenerate contract terms
/// are rejected once, here, at the construction seam.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    /// Monitoring frequency at or below the timeline granularity.
    ///
    /// A frequency this small would step in increments the timeline
    /// cannot distinguish from its closing tolerance; callers must
    /// keep the monitoring frequency materially above one hour.
    #[error("Monitoring frequency {monitor_freq} must exceed the one hour granularity")]
    FrequencyBelowGranularity {
        /// The rejected monitoring frequency, in year fractions.
        monitor_freq: Time,
    },

    /// Maturity at or before the reference time.
    #[error("Maturity {maturity} must lie strictly after the system time")]
    MaturityNotAfterStart {
        /// The rejected maturity, in year fractions.
        maturity: Time,
    },
}
