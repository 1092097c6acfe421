//! Typed interop values exchanged between a part and its plugin modules.
//!
//! A module publishes named values (thrust, chamber pressure, ignition count)
//! into the part's [`InteropStore`]; other modules and the query evaluator
//! read them back through the [`InteropProvider`] contract. A lookup miss is
//! not an error: it returns a value tagged [`InteropKind::Invalid`], and every
//! consumer must treat such a value as "not found" and short-circuit whatever
//! depended on it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Value types
// ---------------------------------------------------------------------------

/// Declared type of an [`InteropValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteropKind {
    /// Lookup-miss marker. A value of this kind carries no payload.
    Invalid,
    Str,
    Float,
    Int,
    Bool,
    StrList,
    FloatList,
    IntList,
    BoolList,
}

/// A typed, named value published by one module and readable by others.
///
/// The payload travels as its textual encoding; the `as_*` accessors parse it
/// back out according to `kind` and return `None` when the encoding does not
/// parse. List payloads are comma-separated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteropValue {
    pub kind: InteropKind,
    pub value: String,
    /// Name of the module that published this value.
    pub owner: String,
}

impl InteropValue {
    /// The "not found" value.
    pub fn invalid() -> Self {
        Self {
            kind: InteropKind::Invalid,
            value: String::new(),
            owner: String::new(),
        }
    }

    pub fn int(value: i64, owner: &str) -> Self {
        Self {
            kind: InteropKind::Int,
            value: value.to_string(),
            owner: owner.to_string(),
        }
    }

    pub fn float(value: f32, owner: &str) -> Self {
        Self {
            kind: InteropKind::Float,
            value: value.to_string(),
            owner: owner.to_string(),
        }
    }

    pub fn boolean(value: bool, owner: &str) -> Self {
        Self {
            kind: InteropKind::Bool,
            value: value.to_string(),
            owner: owner.to_string(),
        }
    }

    pub fn string(value: &str, owner: &str) -> Self {
        Self {
            kind: InteropKind::Str,
            value: value.to_string(),
            owner: owner.to_string(),
        }
    }

    pub fn int_list(values: &[i64], owner: &str) -> Self {
        Self {
            kind: InteropKind::IntList,
            value: join(values.iter()),
            owner: owner.to_string(),
        }
    }

    pub fn float_list(values: &[f32], owner: &str) -> Self {
        Self {
            kind: InteropKind::FloatList,
            value: join(values.iter()),
            owner: owner.to_string(),
        }
    }

    pub fn bool_list(values: &[bool], owner: &str) -> Self {
        Self {
            kind: InteropKind::BoolList,
            value: join(values.iter()),
            owner: owner.to_string(),
        }
    }

    pub fn str_list(values: &[&str], owner: &str) -> Self {
        Self {
            kind: InteropKind::StrList,
            value: values.join(","),
            owner: owner.to_string(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.kind != InteropKind::Invalid
    }

    /// The payload as an integer, when this is an `Int` value that parses.
    pub fn as_int(&self) -> Option<i64> {
        match self.kind {
            InteropKind::Int => self.value.parse().ok(),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self.kind {
            InteropKind::Float => self.value.parse().ok(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self.kind {
            InteropKind::Bool => parse_bool(&self.value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.kind {
            InteropKind::Str => Some(&self.value),
            _ => None,
        }
    }

    /// The payload as a list of integers. `None` if any entry fails to parse.
    pub fn as_int_list(&self) -> Option<Vec<i64>> {
        match self.kind {
            InteropKind::IntList => split(&self.value, |s| s.parse().ok()),
            _ => None,
        }
    }

    pub fn as_float_list(&self) -> Option<Vec<f32>> {
        match self.kind {
            InteropKind::FloatList => split(&self.value, |s| s.parse().ok()),
            _ => None,
        }
    }

    pub fn as_bool_list(&self) -> Option<Vec<bool>> {
        match self.kind {
            InteropKind::BoolList => split(&self.value, parse_bool),
            _ => None,
        }
    }

    pub fn as_str_list(&self) -> Option<Vec<&str>> {
        match self.kind {
            InteropKind::StrList => Some(self.value.split(',').collect()),
            _ => None,
        }
    }
}

/// Case-insensitive bool literal.
pub(crate) fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

fn join<T: ToString>(values: impl Iterator<Item = T>) -> String {
    values
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn split<T>(encoded: &str, parse: impl Fn(&str) -> Option<T>) -> Option<Vec<T>> {
    encoded.split(',').map(parse).collect()
}

// ---------------------------------------------------------------------------
// Provider contract
// ---------------------------------------------------------------------------

/// Per-part interop lookup consumed by the query evaluator and by modules
/// that read each other's published values.
pub trait InteropProvider {
    /// Returns the value published under `name`, or an [`InteropValue::invalid`]
    /// value when `name` is unknown. Names are case-insensitive.
    fn get_interop(&self, name: &str) -> InteropValue;
}

// ---------------------------------------------------------------------------
// InteropStore
// ---------------------------------------------------------------------------

/// The concrete interop table backing a part.
///
/// Names are stored lowercased so query qualifiers resolve regardless of
/// case. Writes are owner-guarded: a value can only be overwritten or removed
/// by the module that published it.
#[derive(Debug, Clone, Default)]
pub struct InteropStore {
    values: HashMap<String, InteropValue>,
}

impl InteropStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a value under `name`. Returns `false` (and leaves the table
    /// unchanged) when the name is already owned by a different module.
    pub fn add(&mut self, name: &str, value: InteropValue) -> bool {
        let key = name.to_lowercase();
        if let Some(existing) = self.values.get(&key) {
            if existing.owner != value.owner {
                return false;
            }
        }
        self.values.insert(key, value);
        true
    }

    /// Remove `owner`'s value under `name`. Returns `false` when the name is
    /// unknown or owned by someone else.
    pub fn remove(&mut self, name: &str, owner: &str) -> bool {
        let key = name.to_lowercase();
        match self.values.get(&key) {
            Some(existing) if existing.owner == owner => {
                self.values.remove(&key);
                true
            }
            _ => false,
        }
    }

    /// Drop every value published by `owner`.
    pub fn clear_owner(&mut self, owner: &str) {
        self.values.retain(|_, v| v.owner != owner);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl InteropProvider for InteropStore {
    fn get_interop(&self, name: &str) -> InteropValue {
        self.values
            .get(&name.to_lowercase())
            .cloned()
            .unwrap_or_else(InteropValue::invalid)
    }
}
