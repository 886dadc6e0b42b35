// config.rs - Runtime tunables
//
// Interaction radii and placement limits. Every field has a default, so a
// host may pass a partial JSON object (or none at all).

use serde::Deserialize;

use crate::error::{GardenError, Result};

/// Used when the config carries no seed
pub const DEFAULT_SEED: u32 = 0x9E37_79B9;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    /// RNG seed; hosts pick one when absent
    pub seed: Option<u32>,
    /// Pointer radius that bends grass
    pub hover_radius: f64,
    /// Click radius that discovers a hidden spot
    pub discovery_radius: f64,
    /// Inset from every viewport edge for hidden spots
    pub spot_margin: f64,
    pub placement: PlacementConfig,
    /// Clicks this soon after a discovery are ignored
    pub discovery_cooldown_ms: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Bubbles closer than this collide
    pub min_distance: f64,
    /// Retries before the last candidate is accepted anyway
    pub attempts: u32,
    /// How long a placed bubble blocks its neighbourhood
    pub ttl_ms: f64,
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            seed: None,
            hover_radius: 100.0,
            discovery_radius: 110.0,
            spot_margin: 40.0,
            placement: PlacementConfig::default(),
            discovery_cooldown_ms: 50.0,
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            min_distance: 200.0,
            attempts: 10,
            ttl_ms: 5000.0,
        }
    }
}

impl GardenConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(GardenError::InvalidConfig)
    }
}
