//! Calendar time as a year-fraction scalar.
//!
//! Monitoring timelines, maturities and monitoring frequencies are all
//! expressed in year fractions from one fixed reference date, so a
//! plain scalar carries everything this core needs: total ordering and
//! arithmetic with scalar offsets. There are no calendar dates or day
//! count conventions at this layer; converting real-world dates into
//! year fractions is the contract-construction layer's job.

/// Calendar time in year fractions from the pricing reference date.
pub type Time = f64;

/// The fixed reference date every timeline starts from.
///
/// All `Time` values are offsets from this point, so it is zero by
/// construction. Kept as a named constant so timeline code reads in
/// contract terms rather than bare numerics.
pub const SYSTEM_TIME: Time = 0.0;
