//! Serde data-file structs for part reliability configurations.
//!
//! These define the on-disk format only; the loader resolves them into
//! `shakedown-api` types after validation.

use serde::Deserialize;
use shakedown_api::failure::{FailureKind, FailureSeverity, FailureWeight};

/// Top-level part-config data file.
#[derive(Debug, Clone, Deserialize)]
pub struct PartConfigFile {
    #[serde(default)]
    pub parts: Vec<PartConfigData>,
}

/// One part configuration block.
#[derive(Debug, Clone, Deserialize)]
pub struct PartConfigData {
    pub name: String,
    /// Configuration query deciding whether this block applies, optionally
    /// carrying an `alias:` display-name prefix. Empty matches everything.
    #[serde(default)]
    pub configuration: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub data_rate_limit: Option<f32>,
    #[serde(default)]
    pub data_cap: Option<f32>,
    /// `[flight_data, failure_rate]` key pairs for the base reliability curve.
    #[serde(default)]
    pub reliability_curve: Vec<[f32; 2]>,
    #[serde(default)]
    pub failures: Vec<FailureData>,
}

/// One failure definition attached to a part configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct FailureData {
    pub name: String,
    /// Display title; defaults to `name`.
    #[serde(default)]
    pub title: String,
    pub severity: FailureSeverity,
    pub weight: FailureWeight,
    pub kind: FailureKind,
    #[serde(default)]
    pub one_shot: bool,
    #[serde(default)]
    pub repair: Vec<RepairRequirementData>,
}

/// A repair requirement as authored in data.
#[derive(Debug, Clone, Deserialize)]
pub struct RepairRequirementData {
    pub message: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub repair_bonus: f32,
}
