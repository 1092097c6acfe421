//! Failure taxonomy and the failure-module contract.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Taxonomy
// ---------------------------------------------------------------------------

/// Player-facing severity of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureSeverity {
    Minor,
    Failure,
    Major,
}

/// Relative chance of a failure being picked, weighed against the other
/// failure modules on the same part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureWeight {
    Rare = 2,
    Seldom = 4,
    Average = 8,
    Often = 16,
    Common = 32,
}

impl FailureWeight {
    /// The numeric weight used for weighted selection.
    pub fn weight(self) -> u32 {
        self as u32
    }
}

/// Mechanical failures need hands-on repair; software failures may be fixed
/// remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Mechanical,
    Software,
}

/// Details describing a failure module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureDetails {
    /// Display title. Keep it short; status readouts have little room.
    pub title: String,
    pub severity: FailureSeverity,
    pub weight: FailureWeight,
    pub kind: FailureKind,
}

/// A single requirement gating repair, shown to the player.
#[derive(Debug, Clone, PartialEq)]
pub struct RepairRequirement {
    /// Player-facing explanation, kept as short as feasible.
    pub message: String,
    /// Whether the requirement is currently met.
    pub met: bool,
    /// Optional requirements grant `repair_bonus` instead of gating repair.
    pub optional: bool,
    /// Repair chance bonus when an optional requirement is met (0.05 = +5%).
    pub repair_bonus: f32,
}

/// Outcome of a repair attempt or progress query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RepairStatus {
    /// The part is functional again.
    Complete,
    /// Repair underway, `seconds` remaining.
    Pending { seconds: f32 },
    /// Repair failed or was interrupted; the part is still broken.
    Failed,
}

// ---------------------------------------------------------------------------
// Failure contract
// ---------------------------------------------------------------------------

/// A module that encapsulates one way a part can break.
///
/// The module owns the whole lifecycle of its failure: triggering the effect,
/// advertising repair requirements, and settling any consumable resources or
/// data transmission a repair attempt needs.
pub trait Failure {
    fn details(&self) -> FailureDetails;

    /// One-shot failures never trigger a second time on the same part.
    fn one_shot(&self) -> bool {
        false
    }

    /// Put the part into this failure state.
    fn do_failure(&mut self);

    /// Requirements the player must (or may optionally) meet to repair.
    fn repair_requirements(&self) -> Vec<RepairRequirement> {
        Vec::new()
    }

    /// Whether every mandatory repair requirement is currently met: the
    /// module verifies conditions (landed, crew on EVA, spares aboard) here.
    fn can_attempt_repair(&self) -> bool;

    /// Progress of an ongoing repair.
    fn repair_status(&self) -> RepairStatus;

    /// Attempt a repair. The module takes care of consumables itself.
    fn attempt_repair(&mut self) -> RepairStatus;

    /// Repair unconditionally, bypassing the requirement checks. Meant for
    /// failure simulations that need to wind a part back to healthy.
    fn force_repair(&mut self) -> RepairStatus;
}
