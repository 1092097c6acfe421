//! Flight-data recorder contract.

/// A module that accumulates flight data for its part.
///
/// The recorder distinguishes the *operating* time of a part from its mere
/// lifetime: an engine only accumulates data while it is actually burning, a
/// command pod while it is powered.
pub trait DataRecorder {
    /// Whether the part is considered to be operating right now (an engine
    /// thrusting, a pod drawing power) rather than merely present.
    fn is_operating(&self) -> bool;

    /// Info line for the editor window; empty when there is nothing to say.
    fn flight_info(&self) -> String {
        String::new()
    }
}
