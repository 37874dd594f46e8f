//! Monitoring timeline construction.
//!
//! This module provides:
//! - [`monitoring_timeline`]: builds the ordered sequence of
//!   observation dates for a path-dependent product
//! - [`ONE_HOUR`]: the minimum timeline granularity
//! - [`ScheduleError`]: construction failures for degenerate terms
//!
//! # Examples
//!
//! ```
//! use mc_products::schedules::monitoring_timeline;
//!
//! // One year of monthly monitoring: start, 11 interior dates, maturity
//! let timeline = monitoring_timeline(1.0, 1.0 / 12.0).unwrap();
//! assert_eq!(timeline.len(), 13);
//! assert_eq!(*timeline.last().unwrap(), 1.0);
//! ```

mod error;
mod monitoring;

pub use error::ScheduleError;
pub use monitoring::{monitoring_timeline, ONE_HOUR};
