//! Piecewise-linear reliability curves.
//!
//! Stands in for the host engine's keyed float curve: a sorted set of
//! `(data, rate)` keys, evaluated by linear interpolation and clamped at the
//! ends. Reliability modules use these to map accumulated flight data to a
//! base failure rate.

use serde::{Deserialize, Serialize};

/// One key on a [`ReliabilityCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub data: f32,
    pub rate: f32,
}

/// A keyed curve mapping accumulated flight data to a failure rate.
///
/// Keys are kept sorted by `data`. Evaluation outside the keyed range clamps
/// to the first or last key; an empty curve evaluates to 0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReliabilityCurve {
    keys: Vec<CurveKey>,
}

impl ReliabilityCurve {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys(keys: &[(f32, f32)]) -> Self {
        let mut curve = Self::new();
        for &(data, rate) in keys {
            curve.add_key(data, rate);
        }
        curve
    }

    /// Insert a key, keeping the key list sorted by `data`.
    pub fn add_key(&mut self, data: f32, rate: f32) {
        let at = self
            .keys
            .partition_point(|k| k.data < data);
        self.keys.insert(at, CurveKey { data, rate });
    }

    pub fn evaluate(&self, data: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if data <= first.data {
            return first.rate;
        }
        if data >= last.data {
            return last.rate;
        }
        let hi = self.keys.partition_point(|k| k.data <= data);
        let (a, b) = (self.keys[hi - 1], self.keys[hi]);
        let span = b.data - a.data;
        if span <= 0.0 {
            return a.rate;
        }
        let t = (data - a.data) / span;
        a.rate + (b.rate - a.rate) * t
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The `data` position of the last key, 0 for an empty curve.
    pub fn max_data(&self) -> f32 {
        self.keys.last().map_or(0.0, |k| k.data)
    }
}
