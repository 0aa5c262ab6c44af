//! CSV inflow loader.
//!
//! # CSV format
//!
//! One row per inflow, in schedule order.
//!
//! ```csv
//! veh_type,edge,vehs_per_hour,depart_lane,depart_speed
//! human,119257914,9720,random,20
//! av,119257914,1080,random,20
//! human,27414345,321,free,max
//! ```
//!
//! `depart_lane` accepts `first`, `random`, `free`, `best`, or a lane index;
//! `depart_speed` accepts `random`, `max`, or a speed in m/s.  Empty values
//! fall back to `first` / `0`.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::{DepartLane, DepartSpeed, InFlows, InflowsError, InflowsResult};

#[derive(Deserialize)]
struct InflowRecord {
    veh_type:      String,
    edge:          String,
    vehs_per_hour: f64,
    #[serde(default)]
    depart_lane:   String,
    #[serde(default)]
    depart_speed:  String,
}

/// Load an inflow schedule from a CSV file.
pub fn load_inflows_csv(path: &Path) -> InflowsResult<InFlows> {
    let file = std::fs::File::open(path)?;
    load_inflows_reader(file)
}

/// Like [`load_inflows_csv`] but accepts any `Read` source.
pub fn load_inflows_reader<R: Read>(reader: R) -> InflowsResult<InFlows> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut inflows = InFlows::new();

    for result in csv_reader.deserialize::<InflowRecord>() {
        let row = result.map_err(|e| InflowsError::Parse(e.to_string()))?;
        let depart_lane = if row.depart_lane.trim().is_empty() {
            DepartLane::default()
        } else {
            row.depart_lane.parse()?
        };
        let depart_speed = if row.depart_speed.trim().is_empty() {
            DepartSpeed::default()
        } else {
            row.depart_speed.parse()?
        };
        inflows.add(row.veh_type, row.edge, row.vehs_per_hour, depart_lane, depart_speed)?;
    }

    Ok(inflows)
}
