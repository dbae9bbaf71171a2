use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Texture assets the host has (or will have) uploaded to the GPU.
/// Loaded from a JSON file at runtime.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Named textures. Keys are what meshes reference.
    #[serde(default)]
    pub textures: BTreeMap<String, TextureDescriptor>,
}

/// Describes a single texture image.
///
/// Only the path matters here; the engine just assigns slots. Decoding hints
/// the host's loader keeps in the same entry (color space, wrapping) are
/// accepted and left for the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Relative path to the image file (e.g., "textures/sun.jpg").
    pub path: String,
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
