//! Monitoring timeline builder.

use mc_core::types::{Time, SYSTEM_TIME};

use super::error::ScheduleError;

/// One hour expressed as a year fraction.
///
/// Minimum timeline granularity: used as the "close enough" tolerance
/// when closing the timeline at maturity, so no two observation dates
/// ever sit within an hour of each other.
pub const ONE_HOUR: Time = 0.000114469;

/// Builds the monitoring timeline for a path-dependent product.
///
/// Starts at the system time and steps by `monitor_freq` while the
/// remaining gap to `maturity` exceeds [`ONE_HOUR`], then closes the
/// timeline at `maturity` exactly. The result always satisfies:
///
/// - length ≥ 2 (at least start and maturity),
/// - strictly increasing,
/// - last element equals `maturity` exactly,
/// - no two consecutive elements within [`ONE_HOUR`].
///
/// # Arguments
/// * `maturity` - Contract maturity, in year fractions after the
///   system time
/// * `monitor_freq` - Spacing between barrier observations, in year
///   fractions
///
/// # Errors
/// * [`ScheduleError::MaturityNotAfterStart`] for a maturity at or
///   before the system time
/// * [`ScheduleError::FrequencyBelowGranularity`] for a frequency at
///   or below [`ONE_HOUR`], which could otherwise step forever or emit
///   near-duplicate dates
///
/// # Examples
/// ```
/// use mc_products::schedules::monitoring_timeline;
///
/// let timeline = monitoring_timeline(1.0, 0.25).unwrap();
/// assert_eq!(timeline, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
///
/// // Frequency coarser than maturity: start and maturity only
/// let timeline = monitoring_timeline(1.0, 2.0).unwrap();
/// assert_eq!(timeline, vec![0.0, 1.0]);
/// ```
pub fn monitoring_timeline(
    maturity: Time,
    monitor_freq: Time,
) -> Result<Vec<Time>, ScheduleError> {
    if monitor_freq <= ONE_HOUR {
        return Err(ScheduleError::FrequencyBelowGranularity { monitor_freq });
    }
    if maturity <= SYSTEM_TIME {
        return Err(ScheduleError::MaturityNotAfterStart { maturity });
    }

    let mut timeline = vec![SYSTEM_TIME];
    let mut t = SYSTEM_TIME + monitor_freq;

    while maturity - t > ONE_HOUR {
        timeline.push(t);
        t += monitor_freq;
    }

    // Close exactly at maturity; the loop guard guarantees the last
    // interior date sits more than one hour below it
    if *timeline.last().unwrap() < maturity {
        timeline.push(maturity);
    }

    Ok(timeline)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_over_one_year() {
        let timeline = monitoring_timeline(1.0, 1.0 / 12.0).unwrap();

        // Start, 11 interior monthly dates, maturity
        assert_eq!(timeline.len(), 13);
        assert_eq!(timeline[0], SYSTEM_TIME);
        assert_eq!(*timeline.last().unwrap(), 1.0);
    }

    #[test]
    fn test_strictly_increasing_with_granularity() {
        let timeline = monitoring_timeline(2.0, 1.0 / 52.0).unwrap();

        for pair in timeline.windows(2) {
            assert!(pair[1] - pair[0] > ONE_HOUR);
        }
    }

    #[test]
    fn test_frequency_coarser_than_maturity() {
        // No interior dates fit: timeline degenerates to start + maturity
        let timeline = monitoring_timeline(0.5, 1.0).unwrap();
        assert_eq!(timeline, vec![0.0, 0.5]);
    }

    #[test]
    fn test_maturity_exact_even_when_frequency_divides() {
        // Twelve accumulated steps of 1/12 land within an hour of 1.0,
        // so the final point is maturity itself, bit-exact
        let timeline = monitoring_timeline(1.0, 1.0 / 12.0).unwrap();
        assert_eq!(timeline[timeline.len() - 1], 1.0);
    }

    #[test]
    fn test_rejects_sub_granularity_frequency() {
        let err = monitoring_timeline(1.0, ONE_HOUR / 2.0).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::FrequencyBelowGranularity { .. }
        ));

        // Exactly one hour is rejected too
        let err = monitoring_timeline(1.0, ONE_HOUR).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::FrequencyBelowGranularity { .. }
        ));
    }

    #[test]
    fn test_rejects_non_positive_maturity() {
        let err = monitoring_timeline(0.0, 0.25).unwrap_err();
        assert!(matches!(err, ScheduleError::MaturityNotAfterStart { .. }));

        let err = monitoring_timeline(-1.0, 0.25).unwrap_err();
        assert!(matches!(err, ScheduleError::MaturityNotAfterStart { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = monitoring_timeline(1.0, 0.0001).unwrap_err();
        assert_eq!(
            format!("{}", err),
            "Monitoring frequency 0.0001 must exceed the one hour granularity"
        );
    }
}
