//! Strongly typed, string-backed identifiers.
//!
//! Vehicle types, edges, and vehicles are all named by free-form strings
//! that only the external simulator can validate.  Wrapping them keeps an
//! edge id from being passed where a vehicle-type name is expected.  Every
//! wrapper implements `Borrow<str>`, so maps keyed by an id can be queried
//! with a plain `&str`.

use std::borrow::Borrow;
use std::fmt;

/// Generate a typed wrapper around an owned `String`.
macro_rules! named_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        $vis struct $name(pub String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

named_id! {
    /// Unique key of a vehicle type within one configuration (`"human"`, `"av"`).
    pub struct VehicleTypeName;
}

named_id! {
    /// Network edge identifier as it appears in the network template
    /// (`"119257914"`, `"27414342#0"`).
    pub struct EdgeId;
}

named_id! {
    /// Identifier of one simulated vehicle, assigned by the kernel.
    pub struct VehicleId;
}

named_id! {
    /// Identifier of an RL agent.  In the multi-agent setups every
    /// RL-controlled vehicle is its own agent, so this usually mirrors a
    /// [`VehicleId`].
    pub struct AgentId;
}

impl From<VehicleId> for AgentId {
    fn from(id: VehicleId) -> Self {
        AgentId(id.0)
    }
}
