//! Gym-style observation and action space descriptors.
//!
//! Only the shape information is needed by this layer: the policy table
//! records it and `FlowEnv` uses it to size observations and clip actions.
//! Unbounded limits serialize to `null` in JSON.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Space {
    /// Continuous box with the same bounds on every dimension.
    Box {
        low:   f64,
        high:  f64,
        shape: Vec<usize>,
    },
    /// `n` discrete choices.
    Discrete { n: usize },
}

impl Space {
    pub fn bounded(low: f64, high: f64, shape: Vec<usize>) -> Self {
        Space::Box { low, high, shape }
    }

    pub fn unbounded(shape: Vec<usize>) -> Self {
        Space::Box { low: f64::NEG_INFINITY, high: f64::INFINITY, shape }
    }

    /// Total number of scalar components (`1` for `Discrete`).
    pub fn dim(&self) -> usize {
        match self {
            Space::Box { shape, .. } => shape.iter().product(),
            Space::Discrete { .. }   => 1,
        }
    }

    /// `true` if every component of `x` lies inside the space.
    pub fn contains(&self, x: &[f64]) -> bool {
        match self {
            Space::Box { low, high, .. } => {
                x.len() == self.dim() && x.iter().all(|v| *v >= *low && *v <= *high)
            }
            Space::Discrete { n } => {
                x.len() == 1 && x[0] >= 0.0 && x[0].fract() == 0.0 && (x[0] as usize) < *n
            }
        }
    }

    /// Clamp `x` into a box space in place.  No-op for `Discrete`.
    pub fn clip(&self, x: &mut [f64]) {
        if let Space::Box { low, high, .. } = self {
            for v in x.iter_mut() {
                *v = v.clamp(*low, *high);
            }
        }
    }
}
