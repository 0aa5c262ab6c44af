//! Process-wide registry of named environment factories.
//!
//! One registration per name.  `register` refuses to overwrite; callers that
//! really mean to replace an entry use `register_or_replace`, which logs it.

use std::collections::BTreeMap;
use std::sync::{Mutex, OnceLock};

use flow_env::Environment;

use crate::{EnvCreator, RllibError, RllibResult};

#[derive(Default)]
pub struct EnvRegistry {
    creators: BTreeMap<String, EnvCreator>,
}

impl EnvRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single instance shared by the whole process.
    pub fn global() -> &'static Mutex<EnvRegistry> {
        static GLOBAL: OnceLock<Mutex<EnvRegistry>> = OnceLock::new();
        GLOBAL.get_or_init(|| Mutex::new(EnvRegistry::new()))
    }

    pub fn register(&mut self, name: impl Into<String>, creator: EnvCreator) -> RllibResult<()> {
        let name = name.into();
        if self.creators.contains_key(&name) {
            return Err(RllibError::AlreadyRegistered(name));
        }
        log::info!("registered environment {name}");
        self.creators.insert(name, creator);
        Ok(())
    }

    /// Register, overwriting any existing entry.  Returns `true` if one was
    /// replaced.
    pub fn register_or_replace(&mut self, name: impl Into<String>, creator: EnvCreator) -> bool {
        let name = name.into();
        let replaced = self.creators.insert(name.clone(), creator).is_some();
        if replaced {
            log::warn!("replaced registered environment {name}");
        } else {
            log::info!("registered environment {name}");
        }
        replaced
    }

    pub fn get(&self, name: &str) -> Option<&EnvCreator> {
        self.creators.get(name)
    }

    /// Build a new environment from the factory registered as `name`.
    pub fn make(&self, name: &str) -> RllibResult<Box<dyn Environment>> {
        let creator = self
            .creators
            .get(name)
            .ok_or_else(|| RllibError::NotRegistered(name.to_owned()))?;
        Ok(creator()?)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.creators.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }
}

/// Register `creator` under `name` in [`EnvRegistry::global`].
pub fn register_env(name: impl Into<String>, creator: EnvCreator) -> RllibResult<()> {
    EnvRegistry::global()
        .lock()
        .map_err(|_| RllibError::RegistryPoisoned)?
        .register(name, creator)
}
