//! Construction options for a [`MathRandom`](crate::MathRandom) context

use serde::{Deserialize, Serialize};

use crate::error::RandomError;

/// Generator configuration
///
/// With no `seed` the generator stays unseeded until the first draw, which
/// then seeds it with `0.0`.
///
/// # Example
/// ```
/// use math_random_core_rs::RandomConfig;
///
/// let config = RandomConfig::from_json(r#"{"seed": 42.0}"#).unwrap();
/// assert_eq!(config.seed, Some(42.0));
///
/// let lazy = RandomConfig::from_json("{}").unwrap();
/// assert_eq!(lazy.seed, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RandomConfig {
    /// Seed applied at construction time
    pub seed: Option<f64>,
}

impl RandomConfig {
    pub fn from_json(json: &str) -> Result<Self, RandomError> {
        serde_json::from_str(json).map_err(|e| RandomError::InvalidConfig(e.to_string()))
    }
}
