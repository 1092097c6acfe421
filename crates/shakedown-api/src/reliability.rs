//! Reliability module contract.

use crate::curve::ReliabilityCurve;

/// A module that supplies failure rates for its part.
///
/// Only ONE reliability module per part may own the base failure rate. A
/// module that exists to feed momentary rates must return 0 from
/// [`Reliability::base_failure_rate`] and `None` from
/// [`Reliability::reliability_curve`], or the part's base rate will be wrong.
pub trait Reliability {
    /// The base (static) failure rate for the given accumulated flight data,
    /// in failures per second. 0 when this module only contributes momentary
    /// rates.
    fn base_failure_rate(&self, flight_data: f32) -> f32;

    /// The curve behind the base rate. `None` when this module does not own
    /// the base failure rate.
    fn reliability_curve(&self) -> Option<&ReliabilityCurve> {
        None
    }
}
