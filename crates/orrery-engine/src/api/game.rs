use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use crate::api::error::EngineError;
use crate::api::panel::{ControlSpec, ControlValue};
use crate::api::types::{EntityId, GameEvent};
use crate::core::scene::Scene;
use crate::core::time::FrameTime;
use crate::core::viewport::Viewport;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Maximum number of mesh instances drawn per frame (default: 4096).
    pub max_instances: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of game events per frame (default: 32).
    pub max_events: usize,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Near clip plane in world units.
    pub near: f32,
    /// Far clip plane in world units.
    pub far: f32,
    /// Viewport assumed until the host reports its real size.
    pub viewport: Viewport,
    /// Fixed seed for the context RNG. `None` leaves the choice to the runner.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_instances: 4096,
            max_lights: 8,
            max_events: 32,
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            viewport: Viewport::default(),
            seed: None,
        }
    }
}

/// Seed used when neither the game nor the runner supplies one.
pub const DEFAULT_SEED: u64 = 42;

/// The core contract every scene must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Apply host-supplied JSON options. Called before init, only when the
    /// host passed any.
    fn configure(&mut self, _json: &str) -> Result<(), EngineError> {
        Ok(())
    }

    /// Setup initial state, spawn entities, configure the scene.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One frame. `ctx.time` already holds this frame's clock sample.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Live-editable parameters for the host's debug panel.
    fn controls(&self) -> Vec<ControlSpec> {
        Vec::new()
    }

    /// Apply one panel edit. Takes effect on the next `update`.
    fn set_control(&mut self, key: &str, _value: ControlValue) -> Result<(), EngineError> {
        Err(EngineError::UnknownControl(key.to_string()))
    }
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub events: Vec<GameEvent>,
    pub camera: Camera3D,
    pub viewport: Viewport,
    /// Clock sample for the frame being updated.
    pub time: FrameTime,
    pub rng: ChaCha8Rng,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let viewport = config.viewport;
        Self {
            scene: Scene::with_capacity(config.max_instances),
            lights: LightState::with_capacity(config.max_lights),
            events: Vec::with_capacity(config.max_events),
            camera: Camera3D::perspective(config.fov_degrees, viewport.aspect(), config.near, config.far),
            viewport,
            time: FrameTime::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed.unwrap_or(DEFAULT_SEED)),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a game event to be forwarded to the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }

    /// Replace the viewport and refit the camera projection.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.camera.resize(&viewport);
    }

    /// Restart the RNG from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
