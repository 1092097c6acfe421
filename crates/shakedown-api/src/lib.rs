//! Shakedown API -- the plugin contract for part-reliability simulation.
//!
//! This crate is the seam between a host vehicle simulation and the add-on
//! modules that give its parts a service life: modules that record flight
//! data, compute failure rates from it, and break (and repair) parts when the
//! dice come up wrong. The host owns the scheduling and the UI; add-ons
//! implement the contracts defined here and attach themselves to parts.
//!
//! # Key Types
//!
//! - [`part::Part`] -- Container for the plugin modules attached to one part,
//!   with capability lookup over the module list.
//! - [`part::PartModule`] -- Base trait every plugin module implements, plus
//!   `as_*` capability accessors for the roles it provides.
//! - [`interop::InteropStore`] -- Typed named values a module publishes for
//!   other modules (and the query evaluator) to read.
//! - [`query`] -- The configuration query evaluator: decides whether a
//!   configuration block applies to a part.
//! - [`reliability::Reliability`] / [`failure::Failure`] /
//!   [`recorder::DataRecorder`] -- Contracts for the three third-party module
//!   roles.
//! - [`part_core::PartCore`] -- The coordinating core module contract
//!   (implemented by the host reliability layer, one active core per part).
//! - [`momentary::MomentaryStateTable`] -- Per-part, per-trigger failure-rate
//!   modifier state, owned by the core.
//! - [`datastore::DataStoreHandle`] -- Optional scenario-wide flight-data
//!   store, injected at startup when the add-on providing it is installed.

pub mod curve;
pub mod datastore;
pub mod failure;
pub mod interop;
pub mod momentary;
pub mod mtbf;
pub mod part;
pub mod part_core;
pub mod query;
pub mod recorder;
pub mod reliability;
