//! The coordinating core-module contract.
//!
//! Every part under reliability simulation carries exactly one active core.
//! The core owns the part's accumulated flight data, its momentary
//! failure-rate state, and the failure lifecycle; the other module roles
//! (recorder, reliability, failure) feed it. This contract is implemented by
//! the host reliability layer, not by third-party modules -- third-party code
//! reaches the core through a part's module list.

use crate::curve::ReliabilityCurve;
use crate::failure::{Failure, RepairStatus};
use crate::momentary::MomentaryFailureRate;

/// Overall health of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartStatus {
    Ok,
    MinorFailure,
    Failure,
    MajorFailure,
}

/// The core reliability module on a part.
pub trait PartCore {
    /// The configuration query attached to the core, optionally carrying an
    /// `alias:` display-name prefix.
    fn configuration(&self) -> &str;

    /// Core title, shown in place of the part title when non-empty.
    fn title(&self) -> &str {
        ""
    }

    /// Whether verbose diagnostics are enabled for this part.
    fn debug_enabled(&self) -> bool {
        false
    }

    fn part_status(&self) -> PartStatus;

    /// The failure currently afflicting the part, if any.
    fn active_failure(&self) -> Option<&dyn Failure>;

    // -- Flight data ------------------------------------------------------

    /// Seed the part's flight data, typically once at vessel rollout.
    fn initialize_flight_data(&mut self, flight_data: f32);

    fn flight_data(&self) -> f32;

    fn initial_flight_data(&self) -> f32;

    fn flight_time(&self) -> f32;

    /// Scale the part's flight data by `modifier` (or add it when
    /// `additive`). Returns the new total. Prefer this over initializing:
    /// modifications compose with what other modules have applied.
    fn modify_flight_data(&mut self, modifier: f32, additive: bool) -> f32;

    fn modify_flight_time(&mut self, modifier: f32, additive: bool) -> f32;

    /// Cap the rate at which data accumulates, for simulation add-ons that
    /// must not bank real progress. Returns the applied limit.
    fn set_data_rate_limit(&mut self, limit: f32) -> f32;

    /// Cap total accumulated data. Returns the applied cap.
    fn set_data_cap(&mut self, cap: f32) -> f32;

    /// Data-accumulation bonus for the vessel's current engineers, given the
    /// part's per-engineer-level bonus.
    fn engineer_data_bonus(&self, per_level_bonus: f32) -> f32;

    // -- Failure rates ----------------------------------------------------

    /// The part's static failure rate for its current flight data.
    fn base_failure_rate(&self) -> f32;

    /// The curve behind the base rate, when a reliability module owns one.
    fn base_reliability_curve(&self) -> Option<&ReliabilityCurve>;

    fn worst_momentary_failure_rate(&self) -> Option<MomentaryFailureRate>;

    fn best_momentary_failure_rate(&self) -> Option<MomentaryFailureRate>;

    fn all_momentary_failure_rates(&self) -> Vec<MomentaryFailureRate>;

    fn momentary_failure_rate_for_trigger(&self, trigger: &str) -> Option<f32>;

    /// Scale the named trigger's momentary rate on behalf of `owner`.
    /// Returns the trigger's total modified failure rate for convenience.
    fn set_trigger_momentary_failure_modifier(
        &mut self,
        trigger: &str,
        modifier: f32,
        owner: &str,
    ) -> f32;

    // -- Failure lifecycle ------------------------------------------------

    /// Trigger a random failure, weighted by each failure module's weight.
    /// Returns the failure that fired, `None` when no failure was available.
    fn trigger_failure(&mut self) -> Option<&dyn Failure>;

    /// Trigger a specific failure by name. With `fallback_to_random`, an
    /// unknown or disabled name triggers a random failure instead.
    fn trigger_named_failure(&mut self, name: &str, fallback_to_random: bool)
    -> Option<&dyn Failure>;

    /// Names of every failure currently available on the part.
    fn available_failures(&self) -> Vec<String>;

    /// Re-enable a failure so it can trigger (the default state).
    fn enable_failure(&mut self, name: &str);

    /// Prevent a failure from triggering.
    fn disable_failure(&mut self, name: &str);

    fn is_failure_acknowledged(&self) -> bool;

    fn acknowledge_failure(&mut self);

    /// Seconds of repair work remaining on the active failure.
    fn repair_time(&self) -> f32;

    fn attempt_repair(&mut self) -> RepairStatus;

    fn force_repair(&mut self) -> RepairStatus;

    // -- Operating state --------------------------------------------------

    /// Time since the part was last fully functional, counted from mission
    /// start and reset when a failure is repaired. `None` while the part
    /// sits in a failure state (it should not fail again). This is NOT the
    /// part's total flight time.
    fn operating_time(&self) -> Option<f32>;

    /// Whether the part is considered operating, per its data recorder.
    fn is_operating(&self) -> bool;
}
