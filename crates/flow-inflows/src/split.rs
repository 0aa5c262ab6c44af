//! Human/AV inflow pairs derived from a base rate and a penetration rate.

use flow_core::{EdgeId, PenetrationRate, RateRounding, RateSplit, VehicleTypeName};

use crate::{DepartLane, DepartSpeed, InFlows, InflowsResult};

/// Template for adding a human inflow and an AV inflow on the same edge.
///
/// ```rust
/// use flow_core::RateRounding;
/// use flow_inflows::{DepartLane, DepartSpeed, InFlows, PenetrationSplit};
///
/// let mut inflows = InFlows::new();
/// let split = PenetrationSplit::new("human", "av")
///     .rounding(RateRounding::Truncate)
///     .depart_lane(DepartLane::Random)
///     .depart_speed(DepartSpeed::Value(20.0));
/// let rates = split.apply_fraction(&mut inflows, "119257914", 10_800.0, 0.1).unwrap();
/// assert_eq!((rates.human, rates.av), (9_720.0, 1_080.0));
/// assert_eq!(inflows.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PenetrationSplit {
    pub human:        VehicleTypeName,
    pub av:           VehicleTypeName,
    pub rounding:     RateRounding,
    pub depart_lane:  DepartLane,
    pub depart_speed: DepartSpeed,
}

impl PenetrationSplit {
    pub fn new(human: impl Into<VehicleTypeName>, av: impl Into<VehicleTypeName>) -> Self {
        Self {
            human:        human.into(),
            av:           av.into(),
            rounding:     RateRounding::default(),
            depart_lane:  DepartLane::default(),
            depart_speed: DepartSpeed::default(),
        }
    }

    pub fn rounding(mut self, rounding: RateRounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn depart_lane(mut self, lane: DepartLane) -> Self {
        self.depart_lane = lane;
        self
    }

    pub fn depart_speed(mut self, speed: DepartSpeed) -> Self {
        self.depart_speed = speed;
        self
    }

    /// Add the human entry then the AV entry for `edge`, returning the
    /// rates actually scheduled (after rounding).
    pub fn apply(
        &self,
        inflows: &mut InFlows,
        edge:    impl Into<EdgeId>,
        base:    f64,
        rate:    PenetrationRate,
    ) -> InflowsResult<RateSplit> {
        let edge = edge.into();
        let split = rate.split(base).rounded(self.rounding);
        inflows.add(self.human.clone(), edge.clone(), split.human, self.depart_lane, self.depart_speed)?;
        inflows.add(self.av.clone(), edge, split.av, self.depart_lane, self.depart_speed)?;
        Ok(split)
    }

    /// Like [`apply`](Self::apply) but validates a raw fraction first.  An
    /// out-of-range fraction fails before any entry is added.
    pub fn apply_fraction(
        &self,
        inflows:  &mut InFlows,
        edge:     impl Into<EdgeId>,
        base:     f64,
        fraction: f64,
    ) -> InflowsResult<RateSplit> {
        let rate = PenetrationRate::new(fraction)?;
        self.apply(inflows, edge, base, rate)
    }
}
