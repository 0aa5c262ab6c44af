//! Free-form extension parameters attached to env and net params.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::{ParamsError, ParamsResult};

/// A single extension value: number, bool, string, or list.
pub type ParamValue = Value;

/// Sorted key → value map.
///
/// Each environment class publishes the closed set of keys it understands
/// (its defaults).  [`overlay`](Self::overlay) only accepts overrides for
/// those keys.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AdditionalParams(BTreeMap<String, ParamValue>);

impl AdditionalParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ParamValue>,
    {
        Self(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Option<ParamValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Copy `defaults` and apply `overrides` on top.
    ///
    /// Fails on the first override key that `defaults` does not contain.
    pub fn overlay(defaults: &AdditionalParams, overrides: AdditionalParams) -> ParamsResult<Self> {
        let mut merged = defaults.clone();
        for (key, value) in overrides.0 {
            if !defaults.0.contains_key(&key) {
                return Err(ParamsError::UnknownEnvParam {
                    key,
                    known: defaults.0.keys().cloned().collect(),
                });
            }
            merged.0.insert(key, value);
        }
        Ok(merged)
    }

    /// Like [`overlay`](Self::overlay) but unknown keys are added anyway,
    /// with a warning each.
    pub fn overlay_lenient(defaults: &AdditionalParams, overrides: AdditionalParams) -> Self {
        let mut merged = defaults.clone();
        for (key, value) in overrides.0 {
            if !defaults.0.contains_key(&key) {
                log::warn!("adding unrecognized environment parameter {key:?}");
            }
            merged.0.insert(key, value);
        }
        merged
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.0.get(key)
    }

    pub fn get_f64(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.0.get(key).and_then(Value::as_u64)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
