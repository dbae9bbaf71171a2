pub mod api;
pub mod core;
pub mod components;
pub mod controls;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, DEFAULT_SEED};
pub use api::types::{EntityId, GameEvent};
pub use api::error::EngineError;
pub use api::panel::{ControlSpec, ControlKind, ControlValue, RangeSpec, controls_to_json};
pub use components::entity::Entity;
pub use components::mesh::{Color, MeshComponent, MeshShape, Shading, TextureKey};
pub use core::scene::Scene;
pub use core::time::{FrameClock, FrameTime};
pub use core::viewport::Viewport;
pub use controls::orbit::OrbitControls;
pub use renderer::instance::{MeshInstance, RenderBuffer};
pub use renderer::camera::{Camera3D, CameraUniform};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::AssetManifest;
pub use assets::registry::TextureRegistry;
pub use bridge::protocol::{ProtocolLayout, FrameHeader};
pub use systems::lighting::{PointLight, LightState};
pub use systems::render::build_render_buffer;
