//! A kernel with no traffic model.
//!
//! `DryRunKernel` admits vehicles at their inflow rates onto their inflow
//! edges at departure speed, places the reset population, and changes a
//! vehicle's speed only when an acceleration is applied to it.  There is no
//! car following, lane changing, or collision handling.  On open networks
//! whose net params carry a `length`, a vehicle leaves once it has covered
//! that distance, which feeds [`Kernel::outflow_rate`].
//!
//! Admission is deterministic for a given `sumo.seed` (default `0`):
//! vehicles-per-hour flows use an arrival accumulator, probability flows
//! draw from [`SimRng`].

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use flow_core::{EdgeId, SimRng, VehicleId, VehicleTypeName};
use flow_inflows::{DepartSpeed, InflowEntry, InflowRate};
use flow_params::{EdgesDistribution, FlowParams};

use crate::{EnvError, EnvResult, Kernel};

const DEFAULT_MAX_SPEED: f64 = 30.0;

struct VehicleState {
    veh_type:   VehicleTypeName,
    edge:       Option<EdgeId>,
    speed:      f64,
    prev_speed: f64,
    /// Metres travelled since departure.
    travelled:  f64,
    is_rl:      bool,
}

struct FlowState {
    entry:    InflowEntry,
    /// Fractional vehicles owed to the network.
    owed:     f64,
    departed: u64,
}

pub struct DryRunKernel {
    started:     bool,
    sim_step:    f64,
    time:        f64,
    rng:         SimRng,
    vehicles:    BTreeMap<VehicleId, VehicleState>,
    flows:       Vec<FlowState>,
    max_speeds:  BTreeMap<VehicleTypeName, f64>,
    rl_types:    BTreeSet<VehicleTypeName>,
    /// Distance after which a vehicle leaves; `None` on closed networks.
    exit_after:  Option<f64>,
    /// Times at which vehicles left the network.
    exits:       VecDeque<f64>,
    accels:      BTreeMap<VehicleId, f64>,
}

impl DryRunKernel {
    pub fn new() -> Self {
        Self {
            started:    false,
            sim_step:   0.1,
            time:       0.0,
            rng:        SimRng::new(0),
            vehicles:   BTreeMap::new(),
            flows:      Vec::new(),
            max_speeds: BTreeMap::new(),
            rl_types:   BTreeSet::new(),
            exit_after: None,
            exits:      VecDeque::new(),
            accels:     BTreeMap::new(),
        }
    }

    /// Total vehicles admitted by inflows since `start`.
    pub fn departed(&self) -> u64 {
        self.flows.iter().map(|f| f.departed).sum()
    }

    /// Total vehicles that have left the network since `start`.
    pub fn arrived(&self) -> usize {
        self.exits.len()
    }

    fn ensure_started(&self) -> EnvResult<()> {
        if self.started { Ok(()) } else { Err(EnvError::NotStarted) }
    }

    fn max_speed(&self, veh_type: &VehicleTypeName) -> f64 {
        self.max_speeds.get(veh_type).copied().unwrap_or(DEFAULT_MAX_SPEED)
    }

    fn depart(&mut self, flow: usize) {
        let (id, veh_type, edge, depart_speed) = {
            let f = &mut self.flows[flow];
            let id = VehicleId::new(format!("{}.{}", f.entry.name, f.departed));
            f.departed += 1;
            (id, f.entry.veh_type.clone(), f.entry.edge.clone(), f.entry.depart_speed)
        };
        let max = self.max_speed(&veh_type);
        let speed = match depart_speed {
            DepartSpeed::Value(v) => v,
            DepartSpeed::Max      => max,
            DepartSpeed::Random if max > 0.0 => self.rng.gen_range(0.0..=max),
            DepartSpeed::Random   => 0.0,
        };
        let is_rl = self.rl_types.contains(&veh_type);
        self.vehicles.insert(id, VehicleState {
            veh_type,
            edge: Some(edge),
            speed,
            prev_speed: speed,
            travelled: 0.0,
            is_rl,
        });
    }

    fn admit(&mut self) {
        let dt = self.sim_step;
        let now = self.time;
        for i in 0..self.flows.len() {
            let (begin, end, rate) = {
                let e = &self.flows[i].entry;
                (e.begin, e.end, e.rate)
            };
            if now < begin || now > end {
                continue;
            }
            match rate {
                InflowRate::VehsPerHour(vph) => {
                    self.flows[i].owed += vph * dt / 3_600.0;
                    while self.flows[i].owed >= 1.0 {
                        self.flows[i].owed -= 1.0;
                        self.depart(i);
                    }
                }
                InflowRate::Probability(p) => {
                    if self.rng.gen_bool(p * dt) {
                        self.depart(i);
                    }
                }
            }
        }
    }
}

impl Default for DryRunKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for DryRunKernel {
    fn start(&mut self, params: &FlowParams) -> EnvResult<()> {
        let seed = params.sim.sumo_options().and_then(|o| o.seed).unwrap_or(0);
        self.rng = SimRng::new(seed);
        self.sim_step = params.sim.common().sim_step;
        self.time = 0.0;
        self.vehicles.clear();
        self.exits.clear();
        self.accels.clear();

        self.max_speeds = params
            .veh
            .types()
            .iter()
            .map(|t| (t.veh_id.clone(), t.car_following_params.max_speed))
            .collect();
        self.rl_types = params.veh.rl_types().map(|t| t.veh_id.clone()).collect();
        self.exit_after = if params.network.is_closed() {
            None
        } else {
            params.net.additional_params.get_f64("length")
        };
        self.flows = params
            .net
            .inflows
            .iter()
            .map(|entry| FlowState { entry: entry.clone(), owed: 0.0, departed: 0 })
            .collect();

        let edges: &[EdgeId] = match &params.initial.edges_distribution {
            EdgesDistribution::All          => &[],
            EdgesDistribution::Edges(edges) => edges.as_slice(),
        };
        let mut placed = 0usize;
        for ty in params.veh.types() {
            for i in 0..ty.num_vehicles {
                let edge = (!edges.is_empty()).then(|| edges[placed % edges.len()].clone());
                self.vehicles.insert(
                    VehicleId::new(format!("{}_{}", ty.veh_id, i)),
                    VehicleState {
                        veh_type:   ty.veh_id.clone(),
                        edge,
                        speed:      0.0,
                        prev_speed: 0.0,
                        travelled:  0.0,
                        is_rl:      ty.is_rl(),
                    },
                );
                placed += 1;
            }
        }

        self.started = true;
        log::debug!(
            "dry-run kernel started: {} initial vehicles, {} inflows, step {} s",
            placed,
            self.flows.len(),
            self.sim_step
        );
        Ok(())
    }

    fn step(&mut self) -> EnvResult<()> {
        self.ensure_started()?;
        let dt = self.sim_step;
        let accels = std::mem::take(&mut self.accels);

        let mut leaving = Vec::new();
        for (id, v) in self.vehicles.iter_mut() {
            v.prev_speed = v.speed;
            if let Some(a) = accels.get(id) {
                v.speed = (v.speed + a * dt).max(0.0);
            }
            v.travelled += v.speed * dt;
            if self.exit_after.is_some_and(|len| v.travelled >= len) {
                leaving.push(id.clone());
            }
        }

        self.time += dt;
        for id in leaving {
            self.vehicles.remove(&id);
            self.exits.push_back(self.time);
        }
        self.admit();
        Ok(())
    }

    fn sim_step(&self) -> f64 {
        self.sim_step
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn vehicle_ids(&self) -> Vec<VehicleId> {
        self.vehicles.keys().cloned().collect()
    }

    fn rl_ids(&self) -> Vec<VehicleId> {
        self.vehicles
            .iter()
            .filter(|(_, v)| v.is_rl)
            .map(|(id, _)| id.clone())
            .collect()
    }

    fn vehicle_type(&self, id: &VehicleId) -> Option<&VehicleTypeName> {
        self.vehicles.get(id).map(|v| &v.veh_type)
    }

    fn speed(&self, id: &VehicleId) -> Option<f64> {
        self.vehicles.get(id).map(|v| v.speed)
    }

    fn previous_speed(&self, id: &VehicleId) -> Option<f64> {
        self.vehicles.get(id).map(|v| v.prev_speed)
    }

    fn edge(&self, id: &VehicleId) -> Option<&EdgeId> {
        self.vehicles.get(id).and_then(|v| v.edge.as_ref())
    }

    fn outflow_rate(&self, window_secs: f64) -> f64 {
        // Early in a run the window only covers the time simulated so far.
        let covered = window_secs.min(self.time);
        if covered <= 0.0 {
            return f64::NAN;
        }
        let since = self.time - covered;
        let n = self.exits.iter().rev().take_while(|t| **t > since).count();
        n as f64 * 3_600.0 / covered
    }

    fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    fn apply_acceleration(&mut self, id: &VehicleId, accel: f64) {
        if self.vehicles.contains_key(id) {
            self.accels.insert(id.clone(), accel);
        }
    }

    fn close(&mut self) -> EnvResult<()> {
        self.started = false;
        self.vehicles.clear();
        self.flows.clear();
        Ok(())
    }
}
