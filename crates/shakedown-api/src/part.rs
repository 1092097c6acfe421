//! Parts and the module capability model.
//!
//! A [`Part`] is a lightweight container for the plugin modules attached to
//! one vehicle part. Every module implements [`PartModule`]; a module that
//! provides one of the plugin roles additionally overrides the matching
//! `as_*` accessor to return itself. Lookup walks the module list and asks
//! each module for the capability, so no downcasting or host reflection is
//! involved.

use crate::failure::Failure;
use crate::interop::{InteropProvider, InteropValue};
use crate::part_core::PartCore;
use crate::query::{self, QueryTarget};
use crate::recorder::DataRecorder;
use crate::reliability::Reliability;
use std::any::Any;

// ---------------------------------------------------------------------------
// PartModule trait
// ---------------------------------------------------------------------------

/// A plugin module attached to a part.
///
/// The `as_*` accessors cover the module roles: data recorder, reliability,
/// failure, interop provider, and core. Each defaults to `None`; a module
/// returns `Some(self)` for every role it implements. Disabled modules are
/// skipped by every lookup on [`Part`].
pub trait PartModule: std::fmt::Debug {
    /// Whether this module currently participates in the simulation.
    fn enabled(&self) -> bool {
        true
    }

    /// The configuration query attached to this module; empty when the
    /// module applies unconditionally.
    fn configuration(&self) -> &str {
        ""
    }

    /// Downcast to `&dyn Any` for access to concrete module types.
    fn as_any(&self) -> &dyn Any;

    fn as_data_recorder(&self) -> Option<&dyn DataRecorder> {
        None
    }

    fn as_reliability(&self) -> Option<&dyn Reliability> {
        None
    }

    fn as_failure(&self) -> Option<&dyn Failure> {
        None
    }

    fn as_failure_mut(&mut self) -> Option<&mut dyn Failure> {
        None
    }

    fn as_interop(&self) -> Option<&dyn InteropProvider> {
        None
    }

    fn as_core(&self) -> Option<&dyn PartCore> {
        None
    }

    fn as_core_mut(&mut self) -> Option<&mut dyn PartCore> {
        None
    }
}

// ---------------------------------------------------------------------------
// Part
// ---------------------------------------------------------------------------

/// One vehicle part and the plugin modules attached to it.
#[derive(Debug, Default)]
pub struct Part {
    name: String,
    title: String,
    modules: Vec<Box<dyn PartModule>>,
}

impl Part {
    pub fn new(name: &str, title: &str) -> Self {
        Self {
            name: name.to_string(),
            title: title.to_string(),
            modules: Vec::new(),
        }
    }

    /// The part's base name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The part's human-readable title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Attach a module. Modules are consulted in registration order.
    pub fn register_module(&mut self, module: Box<dyn PartModule>) {
        self.modules.push(module);
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn get_module(&self, index: usize) -> Option<&dyn PartModule> {
        self.modules.get(index).map(|m| m.as_ref())
    }

    fn enabled_modules(&self) -> impl Iterator<Item = &dyn PartModule> {
        self.modules
            .iter()
            .map(|m| m.as_ref())
            .filter(|m| m.enabled())
    }

    /// The active core. Only one enabled core is expected per part; the
    /// first registered wins.
    pub fn core(&self) -> Option<&dyn PartCore> {
        self.enabled_modules().find_map(|m| m.as_core())
    }

    pub fn core_mut(&mut self) -> Option<&mut dyn PartCore> {
        self.modules
            .iter_mut()
            .filter(|m| m.enabled())
            .find_map(|m| m.as_core_mut())
    }

    /// The part's data recorder. Only one enabled recorder is expected.
    pub fn data_recorder(&self) -> Option<&dyn DataRecorder> {
        self.enabled_modules().find_map(|m| m.as_data_recorder())
    }

    /// Every enabled reliability module, in registration order.
    pub fn reliability_modules(&self) -> Vec<&dyn Reliability> {
        self.enabled_modules()
            .filter_map(|m| m.as_reliability())
            .collect()
    }

    /// Every enabled failure module, in registration order.
    pub fn failure_modules(&self) -> Vec<&dyn Failure> {
        self.enabled_modules()
            .filter_map(|m| m.as_failure())
            .collect()
    }

    pub fn failure_modules_mut(&mut self) -> Vec<&mut dyn Failure> {
        self.modules
            .iter_mut()
            .filter(|m| m.enabled())
            .filter_map(|m| m.as_failure_mut())
            .collect()
    }

    /// The part's interop provider.
    pub fn interop_provider(&self) -> Option<&dyn InteropProvider> {
        self.enabled_modules().find_map(|m| m.as_interop())
    }

    /// The alias-resolved display name: when the active core's configuration
    /// carries an `alias:` prefix, the alias; otherwise the base name.
    pub fn full_name(&self) -> String {
        if let Some(core) = self.core() {
            if let Some((alias, _)) = core.configuration().split_once(':') {
                let alias = alias.trim();
                if !alias.is_empty() {
                    return alias.to_string();
                }
            }
        }
        self.name.clone()
    }

    /// The core title when non-empty, the part title otherwise.
    pub fn display_title(&self) -> &str {
        match self.core() {
            Some(core) if !core.title().is_empty() => core.title(),
            _ => &self.title,
        }
    }

    /// Evaluate a configuration query against this part.
    pub fn matches_query(&self, query_text: &str) -> bool {
        query::evaluate(query_text, self)
    }
}

impl QueryTarget for Part {
    fn part_name(&self) -> &str {
        &self.name
    }

    fn full_name(&self) -> String {
        Part::full_name(self)
    }

    fn interop(&self, name: &str) -> InteropValue {
        self.interop_provider()
            .map(|p| p.get_interop(name))
            .unwrap_or_else(InteropValue::invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::ReliabilityCurve;
    use crate::failure::{
        FailureDetails, FailureKind, FailureSeverity, FailureWeight, RepairStatus,
    };
    use crate::interop::InteropStore;
    use crate::momentary::MomentaryFailureRate;
    use crate::part_core::PartStatus;

    // -----------------------------------------------------------------------
    // Test modules
    // -----------------------------------------------------------------------

    #[derive(Debug)]
    struct RecorderModule {
        operating: bool,
        enabled: bool,
    }

    impl PartModule for RecorderModule {
        fn enabled(&self) -> bool {
            self.enabled
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_data_recorder(&self) -> Option<&dyn DataRecorder> {
            Some(self)
        }
    }

    impl DataRecorder for RecorderModule {
        fn is_operating(&self) -> bool {
            self.operating
        }
    }

    #[derive(Debug)]
    struct FlatReliability {
        rate: f32,
    }

    impl PartModule for FlatReliability {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_reliability(&self) -> Option<&dyn Reliability> {
            Some(self)
        }
    }

    impl Reliability for FlatReliability {
        fn base_failure_rate(&self, _flight_data: f32) -> f32 {
            self.rate
        }
    }

    #[derive(Debug)]
    struct LeakFailure {
        broken: bool,
    }

    impl PartModule for LeakFailure {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_failure(&self) -> Option<&dyn Failure> {
            Some(self)
        }
        fn as_failure_mut(&mut self) -> Option<&mut dyn Failure> {
            Some(self)
        }
    }

    impl Failure for LeakFailure {
        fn details(&self) -> FailureDetails {
            FailureDetails {
                title: "Fuel Line Leak".to_string(),
                severity: FailureSeverity::Minor,
                weight: FailureWeight::Average,
                kind: FailureKind::Mechanical,
            }
        }
        fn do_failure(&mut self) {
            self.broken = true;
        }
        fn can_attempt_repair(&self) -> bool {
            true
        }
        fn repair_status(&self) -> RepairStatus {
            if self.broken {
                RepairStatus::Failed
            } else {
                RepairStatus::Complete
            }
        }
        fn attempt_repair(&mut self) -> RepairStatus {
            self.broken = false;
            RepairStatus::Complete
        }
        fn force_repair(&mut self) -> RepairStatus {
            self.broken = false;
            RepairStatus::Complete
        }
    }

    #[derive(Debug)]
    struct InteropModule {
        store: InteropStore,
    }

    impl PartModule for InteropModule {
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_interop(&self) -> Option<&dyn InteropProvider> {
            Some(&self.store)
        }
    }

    #[derive(Debug)]
    struct StubCore {
        configuration: String,
        title: String,
    }

    impl PartModule for StubCore {
        fn configuration(&self) -> &str {
            &self.configuration
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_core(&self) -> Option<&dyn PartCore> {
            Some(self)
        }
    }

    impl PartCore for StubCore {
        fn configuration(&self) -> &str {
            &self.configuration
        }
        fn title(&self) -> &str {
            &self.title
        }
        fn part_status(&self) -> PartStatus {
            PartStatus::Ok
        }
        fn active_failure(&self) -> Option<&dyn Failure> {
            None
        }
        fn initialize_flight_data(&mut self, _flight_data: f32) {}
        fn flight_data(&self) -> f32 {
            0.0
        }
        fn initial_flight_data(&self) -> f32 {
            0.0
        }
        fn flight_time(&self) -> f32 {
            0.0
        }
        fn modify_flight_data(&mut self, _modifier: f32, _additive: bool) -> f32 {
            0.0
        }
        fn modify_flight_time(&mut self, _modifier: f32, _additive: bool) -> f32 {
            0.0
        }
        fn set_data_rate_limit(&mut self, limit: f32) -> f32 {
            limit
        }
        fn set_data_cap(&mut self, cap: f32) -> f32 {
            cap
        }
        fn engineer_data_bonus(&self, per_level_bonus: f32) -> f32 {
            per_level_bonus
        }
        fn base_failure_rate(&self) -> f32 {
            0.0
        }
        fn base_reliability_curve(&self) -> Option<&ReliabilityCurve> {
            None
        }
        fn worst_momentary_failure_rate(&self) -> Option<MomentaryFailureRate> {
            None
        }
        fn best_momentary_failure_rate(&self) -> Option<MomentaryFailureRate> {
            None
        }
        fn all_momentary_failure_rates(&self) -> Vec<MomentaryFailureRate> {
            Vec::new()
        }
        fn momentary_failure_rate_for_trigger(&self, _trigger: &str) -> Option<f32> {
            None
        }
        fn set_trigger_momentary_failure_modifier(
            &mut self,
            _trigger: &str,
            _modifier: f32,
            _owner: &str,
        ) -> f32 {
            0.0
        }
        fn trigger_failure(&mut self) -> Option<&dyn Failure> {
            None
        }
        fn trigger_named_failure(
            &mut self,
            _name: &str,
            _fallback_to_random: bool,
        ) -> Option<&dyn Failure> {
            None
        }
        fn available_failures(&self) -> Vec<String> {
            Vec::new()
        }
        fn enable_failure(&mut self, _name: &str) {}
        fn disable_failure(&mut self, _name: &str) {}
        fn is_failure_acknowledged(&self) -> bool {
            false
        }
        fn acknowledge_failure(&mut self) {}
        fn repair_time(&self) -> f32 {
            0.0
        }
        fn attempt_repair(&mut self) -> RepairStatus {
            RepairStatus::Complete
        }
        fn force_repair(&mut self) -> RepairStatus {
            RepairStatus::Complete
        }
        fn operating_time(&self) -> Option<f32> {
            Some(0.0)
        }
        fn is_operating(&self) -> bool {
            false
        }
    }

    fn tank() -> Part {
        Part::new("jumboTank", "Jumbo Fuel Tank")
    }

    // -----------------------------------------------------------------------
    // Capability lookup
    // -----------------------------------------------------------------------

    #[test]
    fn empty_part_has_no_capabilities() {
        let part = tank();
        assert!(part.core().is_none());
        assert!(part.data_recorder().is_none());
        assert!(part.interop_provider().is_none());
        assert!(part.reliability_modules().is_empty());
        assert!(part.failure_modules().is_empty());
    }

    #[test]
    fn lookup_finds_each_role() {
        let mut part = tank();
        part.register_module(Box::new(RecorderModule {
            operating: true,
            enabled: true,
        }));
        part.register_module(Box::new(FlatReliability { rate: 0.01 }));
        part.register_module(Box::new(LeakFailure { broken: false }));
        part.register_module(Box::new(InteropModule {
            store: InteropStore::new(),
        }));

        assert!(part.data_recorder().unwrap().is_operating());
        assert_eq!(part.reliability_modules().len(), 1);
        assert_eq!(part.failure_modules().len(), 1);
        assert!(part.interop_provider().is_some());
        assert_eq!(part.module_count(), 4);
    }

    #[test]
    fn disabled_modules_are_skipped() {
        let mut part = tank();
        part.register_module(Box::new(RecorderModule {
            operating: true,
            enabled: false,
        }));
        assert!(part.data_recorder().is_none());
        // Still reachable by index for diagnostics.
        assert!(part.get_module(0).is_some());
    }

    #[test]
    fn multiple_failure_modules_in_registration_order() {
        let mut part = tank();
        part.register_module(Box::new(LeakFailure { broken: false }));
        part.register_module(Box::new(LeakFailure { broken: true }));
        let failures = part.failure_modules();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].repair_status(), RepairStatus::Complete);
        assert_eq!(failures[1].repair_status(), RepairStatus::Failed);
    }

    #[test]
    fn mutable_failure_lookup_allows_repair() {
        let mut part = tank();
        part.register_module(Box::new(LeakFailure { broken: true }));
        for failure in part.failure_modules_mut() {
            assert_eq!(failure.attempt_repair(), RepairStatus::Complete);
        }
        assert_eq!(part.failure_modules()[0].repair_status(), RepairStatus::Complete);
    }

    // -----------------------------------------------------------------------
    // Identity resolution
    // -----------------------------------------------------------------------

    #[test]
    fn full_name_without_core_is_base_name() {
        let part = tank();
        assert_eq!(part.full_name(), "jumboTank");
    }

    #[test]
    fn full_name_resolves_core_alias() {
        let mut part = tank();
        part.register_module(Box::new(StubCore {
            configuration: "Jumbo-64:fuel = kerosene".to_string(),
            title: String::new(),
        }));
        assert_eq!(part.full_name(), "Jumbo-64");
    }

    #[test]
    fn full_name_without_alias_is_base_name() {
        let mut part = tank();
        part.register_module(Box::new(StubCore {
            configuration: "fuel = kerosene".to_string(),
            title: String::new(),
        }));
        assert_eq!(part.full_name(), "jumboTank");
    }

    #[test]
    fn display_title_prefers_core_title() {
        let mut part = tank();
        assert_eq!(part.display_title(), "Jumbo Fuel Tank");
        part.register_module(Box::new(StubCore {
            configuration: String::new(),
            title: "Jumbo Fuel Tank (Upgraded)".to_string(),
        }));
        assert_eq!(part.display_title(), "Jumbo Fuel Tank (Upgraded)");
    }

    // -----------------------------------------------------------------------
    // Query integration
    // -----------------------------------------------------------------------

    #[test]
    fn part_answers_queries_through_its_interop_module() {
        let mut store = InteropStore::new();
        store.add("thrust", InteropValue::float(205.0, "engine"));
        let mut part = Part::new("mainsail", "Mainsail Engine");
        part.register_module(Box::new(InteropModule { store }));

        assert!(part.matches_query("thrust > 200"));
        assert!(!part.matches_query("thrust > 210"));
        assert!(part.matches_query("mainsail"));
        assert!(part.matches_query(""));
    }

    #[test]
    fn query_against_part_without_interop_degrades_to_false() {
        let part = tank();
        assert!(!part.matches_query("thrust > 200"));
        assert!(part.matches_query("jumbotank"));
    }

    #[test]
    fn concrete_module_reachable_through_as_any() {
        let mut part = tank();
        part.register_module(Box::new(FlatReliability { rate: 0.25 }));
        let module = part.get_module(0).unwrap();
        let concrete = module.as_any().downcast_ref::<FlatReliability>().unwrap();
        assert_eq!(concrete.rate, 0.25);
    }
}
