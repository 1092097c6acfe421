//! Momentary failure-rate state.
//!
//! Reliability and failure-trigger modules cooperate by scaling a part's base
//! failure rate per named trigger ("overthrust", "ignition", "atmosphere").
//! The [`MomentaryStateTable`] owns that state for one part: per trigger, a
//! set of per-owner multiplicative modifiers. It is held by the part's core
//! module and mutated only through these setters, never shared directly.

use crate::mtbf::MIN_FAILURE_RATE;
use std::collections::HashMap;

/// A dynamically varying failure rate contributed by a named trigger.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentaryFailureRate {
    pub trigger: String,
    pub failure_rate: f32,
}

/// One owner's multiplicative contribution to a trigger's rate.
#[derive(Debug, Clone, PartialEq)]
pub struct MomentaryFailureModifier {
    pub owner: String,
    pub trigger: String,
    pub modifier: f32,
}

/// Per-part table of momentary failure-rate modifiers.
///
/// Trigger and owner names are case-insensitive (stored lowercased). A
/// trigger's momentary rate is the base rate times the product of every
/// owner's modifier for that trigger, clamped below by [`MIN_FAILURE_RATE`].
#[derive(Debug, Clone, Default)]
pub struct MomentaryStateTable {
    // trigger -> owner -> modifier
    modifiers: HashMap<String, HashMap<String, f32>>,
}

impl MomentaryStateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert `owner`'s modifier for `trigger`. Returns the trigger's
    /// combined modifier for convenience.
    pub fn set_modifier(&mut self, trigger: &str, owner: &str, modifier: f32) -> f32 {
        let trigger = trigger.to_lowercase();
        let owner = owner.to_lowercase();
        tracing::debug!(%trigger, %owner, modifier, "momentary modifier set");
        self.modifiers
            .entry(trigger.clone())
            .or_default()
            .insert(owner, modifier);
        self.combined_modifier(&trigger).unwrap_or(1.0)
    }

    /// The modifier `owner` has registered for `trigger`, if any.
    pub fn modifier_for(&self, trigger: &str, owner: &str) -> Option<MomentaryFailureModifier> {
        let trigger = trigger.to_lowercase();
        let owner = owner.to_lowercase();
        let modifier = *self.modifiers.get(&trigger)?.get(&owner)?;
        Some(MomentaryFailureModifier {
            owner,
            trigger,
            modifier,
        })
    }

    /// The product of every owner's modifier for `trigger`; `None` when the
    /// trigger is unknown.
    pub fn combined_modifier(&self, trigger: &str) -> Option<f32> {
        let owners = self.modifiers.get(&trigger.to_lowercase())?;
        Some(owners.values().product())
    }

    /// The momentary rate for `trigger` given the part's base failure rate.
    pub fn rate_for_trigger(&self, trigger: &str, base_rate: f32) -> Option<MomentaryFailureRate> {
        let combined = self.combined_modifier(trigger)?;
        Some(MomentaryFailureRate {
            trigger: trigger.to_lowercase(),
            failure_rate: (base_rate * combined).max(MIN_FAILURE_RATE),
        })
    }

    /// Every trigger's momentary rate, sorted by trigger name.
    pub fn all_rates(&self, base_rate: f32) -> Vec<MomentaryFailureRate> {
        let mut rates: Vec<MomentaryFailureRate> = self
            .modifiers
            .keys()
            .filter_map(|trigger| self.rate_for_trigger(trigger, base_rate))
            .collect();
        rates.sort_by(|a, b| a.trigger.cmp(&b.trigger));
        rates
    }

    /// The highest momentary rate (most likely to fail) across triggers.
    pub fn worst_rate(&self, base_rate: f32) -> Option<MomentaryFailureRate> {
        self.all_rates(base_rate)
            .into_iter()
            .max_by(|a, b| a.failure_rate.total_cmp(&b.failure_rate))
    }

    /// The lowest momentary rate (least likely to fail) across triggers.
    pub fn best_rate(&self, base_rate: f32) -> Option<MomentaryFailureRate> {
        self.all_rates(base_rate)
            .into_iter()
            .min_by(|a, b| a.failure_rate.total_cmp(&b.failure_rate))
    }

    /// Drop every modifier registered by `owner`, pruning emptied triggers.
    pub fn remove_owner(&mut self, owner: &str) {
        let owner = owner.to_lowercase();
        for owners in self.modifiers.values_mut() {
            owners.remove(&owner);
        }
        self.modifiers.retain(|_, owners| !owners.is_empty());
    }

    pub fn triggers(&self) -> Vec<String> {
        let mut triggers: Vec<String> = self.modifiers.keys().cloned().collect();
        triggers.sort();
        triggers
    }

    pub fn clear(&mut self) {
        self.modifiers.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }
}
