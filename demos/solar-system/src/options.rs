use serde::Deserialize;
use orrery_engine::EngineError;
use crate::starfield::DEFAULT_STAR_COUNT;

/// Startup options the host may pass to `game_init` as JSON.
/// Every field is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SolarOptions {
    pub star_count: usize,
    /// Draw a wireframe marker at the sun's point light.
    pub show_light_helper: bool,
    /// Start with the ambient fill light on.
    pub ambient_enabled: bool,
    /// Fixed RNG seed for a reproducible starfield.
    pub seed: Option<u64>,
}

impl Default for SolarOptions {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            show_light_helper: true,
            ambient_enabled: false,
            seed: None,
        }
    }
}

impl SolarOptions {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}
