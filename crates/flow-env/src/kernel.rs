//! The `Kernel` trait — the seam between an environment and a simulator.

use flow_core::{EdgeId, Simulator, VehicleId, VehicleTypeName};
use flow_params::FlowParams;

use crate::{DryRunKernel, EnvResult};

/// One live connection to a traffic simulator.
///
/// The environment owns its kernel and drives it from a single thread.
/// Queries about a vehicle that is not (or no longer) in the network return
/// `None`.
pub trait Kernel: Send {
    /// (Re)start the simulation described by `params`.  Any previous run is
    /// discarded.
    fn start(&mut self, params: &FlowParams) -> EnvResult<()>;

    /// Advance by one simulation step.
    fn step(&mut self) -> EnvResult<()>;

    /// Seconds per simulation step.
    fn sim_step(&self) -> f64;

    /// Simulated seconds since `start`.
    fn time(&self) -> f64;

    /// Vehicles currently in the network, sorted by id.
    fn vehicle_ids(&self) -> Vec<VehicleId>;

    /// RL-controlled vehicles currently in the network, sorted by id.
    fn rl_ids(&self) -> Vec<VehicleId>;

    fn vehicle_type(&self, id: &VehicleId) -> Option<&VehicleTypeName>;

    /// Current speed (m/s).
    fn speed(&self, id: &VehicleId) -> Option<f64>;

    /// Speed one simulation step ago (m/s).
    fn previous_speed(&self, id: &VehicleId) -> Option<f64>;

    fn edge(&self, id: &VehicleId) -> Option<&EdgeId>;

    /// Vehicles that left the network during the last `window_secs`
    /// seconds, scaled to vehicles per hour.  A window longer than the
    /// simulated time is cut to it; NaN before the first step.
    fn outflow_rate(&self, window_secs: f64) -> f64;

    fn num_vehicles(&self) -> usize;

    /// Request an acceleration (m/s²) for the next step.
    fn apply_acceleration(&mut self, id: &VehicleId, accel: f64);

    fn close(&mut self) -> EnvResult<()>;
}

impl<K: Kernel + ?Sized> Kernel for Box<K> {
    fn start(&mut self, params: &FlowParams) -> EnvResult<()> {
        (**self).start(params)
    }

    fn step(&mut self) -> EnvResult<()> {
        (**self).step()
    }

    fn sim_step(&self) -> f64 {
        (**self).sim_step()
    }

    fn time(&self) -> f64 {
        (**self).time()
    }

    fn vehicle_ids(&self) -> Vec<VehicleId> {
        (**self).vehicle_ids()
    }

    fn rl_ids(&self) -> Vec<VehicleId> {
        (**self).rl_ids()
    }

    fn vehicle_type(&self, id: &VehicleId) -> Option<&VehicleTypeName> {
        (**self).vehicle_type(id)
    }

    fn speed(&self, id: &VehicleId) -> Option<f64> {
        (**self).speed(id)
    }

    fn previous_speed(&self, id: &VehicleId) -> Option<f64> {
        (**self).previous_speed(id)
    }

    fn edge(&self, id: &VehicleId) -> Option<&EdgeId> {
        (**self).edge(id)
    }

    fn outflow_rate(&self, window_secs: f64) -> f64 {
        (**self).outflow_rate(window_secs)
    }

    fn num_vehicles(&self) -> usize {
        (**self).num_vehicles()
    }

    fn apply_acceleration(&mut self, id: &VehicleId, accel: f64) {
        (**self).apply_acceleration(id, accel)
    }

    fn close(&mut self) -> EnvResult<()> {
        (**self).close()
    }
}

/// The kernel used when no external backend is linked in.
pub fn default_kernel(params: &FlowParams) -> Box<dyn Kernel> {
    match params.simulator {
        Simulator::Traci => {
            log::info!("{}: no TraCI connection linked, using the dry-run kernel", params.exp_tag);
        }
        Simulator::Aimsun => {
            log::info!("{}: no Aimsun connection linked, using the dry-run kernel", params.exp_tag);
        }
    }
    Box::new(DryRunKernel::new())
}
