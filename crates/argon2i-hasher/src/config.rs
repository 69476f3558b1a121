//! Cost parameters for Argon2i hashing.
//!
//! A [`HashConfig`] is fixed when a [`Hasher`](crate::Hasher) is built and
//! never changes afterwards. Range checking is left to the primitive, which
//! is authoritative on what it accepts.
//!
//! Configs can be read from JSON; missing fields take their defaults:
//! ```json
//! { "t_cost": 3, "m_cost": 4096 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HashError, Result};

/// Default number of passes over memory.
pub const DEFAULT_T_COST: u32 = 2;
/// Default memory usage in KiB.
pub const DEFAULT_M_COST: u32 = 64;
/// Default lane count.
pub const DEFAULT_PARALLELISM: u32 = 1;

/// Argon2i cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashConfig {
    /// Number of passes over memory.
    #[serde(default = "default_t_cost")]
    pub t_cost: u32,
    /// Memory usage in KiB.
    #[serde(default = "default_m_cost")]
    pub m_cost: u32,
    /// Lanes; also used as the thread count.
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

fn default_t_cost() -> u32 {
    DEFAULT_T_COST
}

fn default_m_cost() -> u32 {
    DEFAULT_M_COST
}

fn default_parallelism() -> u32 {
    DEFAULT_PARALLELISM
}

impl Default for HashConfig {
    fn default() -> Self {
        Self {
            t_cost: DEFAULT_T_COST,
            m_cost: DEFAULT_M_COST,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

impl HashConfig {
    /// Build a config from explicit costs.
    pub fn new(t_cost: u32, m_cost: u32, parallelism: u32) -> Self {
        Self {
            t_cost,
            m_cost,
            parallelism,
        }
    }

    /// Parse a config from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| HashError::InvalidConfig(e.to_string()))
    }

    /// Load a config from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Io` if the file cannot be read and
    /// `HashError::InvalidConfig` if it does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|e| match e {
            HashError::InvalidConfig(msg) => {
                HashError::InvalidConfig(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Render the config as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| HashError::SerializationError(e.to_string()))
    }
}
