//! JSON encoding of a [`FlowParams`] configuration.
//!
//! Class references (environment, network, controllers) encode as their
//! class names; vehicle types and inflows encode as plain records.  Keys are
//! sorted and indented by four spaces.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::{FlowParams, ParamsResult};

/// Encode as a JSON tree.  Object keys come out sorted.
pub fn to_json_value(params: &FlowParams) -> ParamsResult<Value> {
    Ok(serde_json::to_value(params)?)
}

/// Sorted-key, 4-space-indented JSON text.
pub fn to_json_string(params: &FlowParams) -> ParamsResult<String> {
    // Going through `Value` sorts every object's keys.
    let value = to_json_value(params)?;
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `<dir>/<exp_tag>.json`, creating `dir` if needed.  Returns the path
/// written.
pub fn write_json(params: &FlowParams, dir: &Path) -> ParamsResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", params.exp_tag));
    fs::write(&path, to_json_string(params)?)?;
    log::info!("wrote flow params to {}", path.display());
    Ok(path)
}
