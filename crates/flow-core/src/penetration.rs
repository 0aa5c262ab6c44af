//! Penetration rate and the human/AV inflow split.
//!
//! ```text
//! human_rate = base * (1 - p)
//! av_rate    = base * p
//! ```
//!
//! The split is exact before rounding: `human + av == base`.  Whether the
//! per-hour rates are then truncated to whole vehicles is a per-experiment
//! choice expressed with [`RateRounding`]; the I-210 configurations
//! truncate, others keep fractional vehicles per hour.

use serde::{Deserialize, Serialize};

use crate::{FlowError, FlowResult};

// ── PenetrationRate ───────────────────────────────────────────────────────────

/// Fraction of the inflow on a road segment made up of automated vehicles.
///
/// Always strictly inside `(0, 1)`; the constructor is the only way to
/// obtain one.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Serialize)]
#[serde(transparent)]
pub struct PenetrationRate(f64);

impl PenetrationRate {
    /// Validate `p` as a fraction.  Values at or outside the open interval
    /// `(0, 1)` are rejected.
    pub fn new(p: f64) -> FlowResult<Self> {
        if p.is_nan() {
            return Err(FlowError::Validation(
                "penetration rate must be a number".to_owned(),
            ));
        }
        if p >= 1.0 {
            return Err(FlowError::Validation(format!(
                "your penetration rate is over 100% (got {p})"
            )));
        }
        if p <= 0.0 {
            return Err(FlowError::Validation(format!(
                "your penetration rate should be above zero (got {p})"
            )));
        }
        Ok(Self(p))
    }

    /// Validate a percentage, e.g. `from_percent(10.0)` for 10 %.
    pub fn from_percent(percent: f64) -> FlowResult<Self> {
        Self::new(percent / 100.0)
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0
    }

    /// Split `base` vehicles per hour into human and automated shares.
    pub fn split(self, base: f64) -> RateSplit {
        RateSplit {
            human: base * (1.0 - self.0),
            av:    base * self.0,
        }
    }
}

// ── RateSplit ─────────────────────────────────────────────────────────────────

/// Per-hour rates for the two vehicle classes on one edge.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct RateSplit {
    pub human: f64,
    pub av:    f64,
}

impl RateSplit {
    #[inline]
    pub fn total(&self) -> f64 {
        self.human + self.av
    }

    /// Apply `rounding` to both shares.
    pub fn rounded(self, rounding: RateRounding) -> RateSplit {
        RateSplit {
            human: rounding.apply(self.human),
            av:    rounding.apply(self.av),
        }
    }
}

// ── RateRounding ──────────────────────────────────────────────────────────────

/// How a fractional vehicles-per-hour rate is turned into an inflow rate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateRounding {
    /// Drop the fractional part, rounding toward zero.
    Truncate,
    /// Keep the exact product.
    #[default]
    Fractional,
}

impl RateRounding {
    #[inline]
    pub fn apply(self, rate: f64) -> f64 {
        match self {
            RateRounding::Truncate   => rate.trunc(),
            RateRounding::Fractional => rate,
        }
    }
}
