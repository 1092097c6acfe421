//! Optional scenario-wide flight-data store.
//!
//! The store that tracks accumulated flight data across every part ships in
//! a separate add-on that may not be installed. Instead of probing for it at
//! every call site, the host injects a [`DataStoreHandle`] once at startup;
//! an absent (or not-yet-ready) store answers every query with `None`.

/// Per-part accumulated flight record.
#[derive(Debug, Clone, PartialEq)]
pub struct PartData {
    pub part_name: String,
    pub flight_data: f32,
    pub flight_time: f32,
}

/// Scenario-wide store of per-part flight records.
pub trait DataStore: std::fmt::Debug {
    /// Whether the store has finished loading and can answer queries.
    fn ready(&self) -> bool {
        true
    }

    /// The part with the most accumulated flight data.
    fn part_with_most_data(&self) -> Option<String>;

    /// The part with the least accumulated flight data.
    fn part_with_least_data(&self) -> Option<String>;

    /// The first of `candidates` with no recorded data at all.
    fn part_with_no_data(&self, candidates: &[&str]) -> Option<String>;

    /// The record for a single part, `None` when nothing is recorded.
    fn part_data(&self, part_name: &str) -> Option<PartData>;
}

/// Handle to the optional data store, set once at startup.
#[derive(Debug, Default)]
pub struct DataStoreHandle {
    store: Option<Box<dyn DataStore + Send + Sync>>,
}

impl DataStoreHandle {
    /// A handle for a world without the data-store add-on.
    pub fn absent() -> Self {
        Self::default()
    }

    pub fn new(store: Box<dyn DataStore + Send + Sync>) -> Self {
        Self { store: Some(store) }
    }

    /// Whether the add-on is installed (regardless of readiness).
    pub fn installed(&self) -> bool {
        self.store.is_some()
    }

    fn ready_store(&self) -> Option<&(dyn DataStore + Send + Sync)> {
        self.store.as_deref().filter(|s| s.ready())
    }

    pub fn part_with_most_data(&self) -> Option<String> {
        self.ready_store()?.part_with_most_data()
    }

    pub fn part_with_least_data(&self) -> Option<String> {
        self.ready_store()?.part_with_least_data()
    }

    pub fn part_with_no_data(&self, candidates: &[&str]) -> Option<String> {
        self.ready_store()?.part_with_no_data(candidates)
    }

    pub fn part_data(&self, part_name: &str) -> Option<PartData> {
        self.ready_store()?.part_data(part_name)
    }
}
