//! Named metrics evaluated on the environment after every step.

use std::fmt;

use flow_env::Environment;

pub type Metric = Box<dyn Fn(&dyn Environment) -> f64 + Send + Sync>;

/// Ordered name → metric table.  Re-inserting a name replaces the metric in
/// place.
#[derive(Default)]
pub struct CustomCallables {
    entries: Vec<(String, Metric)>,
}

impl CustomCallables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<F>(&mut self, name: impl Into<String>, metric: F)
    where
        F: Fn(&dyn Environment) -> f64 + Send + Sync + 'static,
    {
        let name = name.into();
        let metric: Metric = Box::new(metric);
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = metric,
            None => self.entries.push((name, metric)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with<F>(mut self, name: impl Into<String>, metric: F) -> Self
    where
        F: Fn(&dyn Environment) -> f64 + Send + Sync + 'static,
    {
        self.insert(name, metric);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, m)| m)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Metric)> {
        self.entries.iter().map(|(n, m)| (n.as_str(), m))
    }

    /// Evaluate every metric on `env`, in insertion order.
    pub fn evaluate(&self, env: &dyn Environment) -> Vec<f64> {
        self.entries.iter().map(|(_, m)| m(env)).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for CustomCallables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
