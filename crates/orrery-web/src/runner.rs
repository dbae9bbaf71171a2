use orrery_engine::bridge::protocol::{
    HEADER_AMBIENT_B, HEADER_AMBIENT_G, HEADER_AMBIENT_R, HEADER_ELAPSED, HEADER_EVENT_COUNT,
    HEADER_INSTANCE_COUNT, HEADER_LIGHT_COUNT, HEADER_PIXEL_RATIO, HEADER_VIEWPORT_HEIGHT,
    HEADER_VIEWPORT_WIDTH,
};
use orrery_engine::{
    build_render_buffer, controls_to_json, AssetManifest, CameraUniform, ControlValue,
    EngineContext, EngineError, FrameClock, FrameHeader, Game, GameConfig, InputEvent, InputQueue,
    ProtocolLayout, RenderBuffer, TextureRegistry, Viewport, DEFAULT_SEED,
};

/// Generic runner that wires a `Game` to the host's frame loop.
///
/// Each concrete app creates a `thread_local!` GameRunner and exports free
/// functions via `#[wasm_bindgen]`, because wasm-bindgen cannot export
/// generic structs directly. The host calls `tick` once per display refresh;
/// one call is one frame.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    textures: TextureRegistry,
    clock: FrameClock,
    camera: CameraUniform,
    header: FrameHeader,
    config: GameConfig,
    layout: ProtocolLayout,
    /// Seed used when the game does not pin one in its config.
    fallback_seed: u64,
    /// Last size reported by the host, kept across `init`.
    viewport: Option<Viewport>,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        Self::with_seed(game, DEFAULT_SEED)
    }

    /// Create a runner whose RNG falls back to `seed` unless the game
    /// configures its own.
    pub fn with_seed(game: G, seed: u64) -> Self {
        let config = game.config();
        let layout = ProtocolLayout::from_config(&config);

        Self {
            render_buffer: RenderBuffer::with_capacity(config.max_instances),
            ctx: EngineContext::from_config(&config),
            header: FrameHeader::new(&layout),
            game,
            input: InputQueue::new(),
            textures: TextureRegistry::new(),
            clock: FrameClock::new(),
            camera: CameraUniform::default(),
            layout,
            config,
            fallback_seed: seed,
            viewport: None,
            initialized: false,
        }
    }

    /// Hand host options to the game. Only meaningful before `init`.
    pub fn configure(&mut self, json: &str) -> Result<(), EngineError> {
        self.game.configure(json)
    }

    /// Initialize the game. Call once after construction (and `configure`).
    pub fn init(&mut self) {
        self.config = self.game.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.render_buffer = RenderBuffer::with_capacity(self.config.max_instances);
        self.header = FrameHeader::new(&self.layout);

        self.ctx = EngineContext::from_config(&self.config);
        if self.config.seed.is_none() {
            self.ctx.reseed(self.fallback_seed);
        }
        if let Some(viewport) = self.viewport {
            self.ctx.resize(viewport);
        }

        self.game.init(&mut self.ctx);
        self.camera = self.ctx.camera.uniform();
        self.initialized = true;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Apply a new drawing-surface size. Takes effect immediately so the
    /// next frame already projects with the new aspect ratio.
    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        let viewport = Viewport::new(width, height, pixel_ratio);
        self.viewport = Some(viewport);
        self.ctx.resize(viewport);
        self.camera = self.ctx.camera.uniform();
    }

    /// Register the host's texture manifest. On error the previous
    /// registry stays in place.
    pub fn load_manifest(&mut self, json: &str) -> Result<(), EngineError> {
        let manifest = AssetManifest::from_json(json)?;
        self.textures = TextureRegistry::from_manifest(&manifest);
        log::info!("manifest: {} textures", self.textures.len());
        Ok(())
    }

    /// Panel descriptors as JSON.
    pub fn controls_json(&self) -> Result<String, EngineError> {
        controls_to_json(&self.game.controls())
    }

    /// Apply one panel edit; it is visible from the next tick on.
    pub fn set_control(&mut self, key: &str, value: ControlValue) -> Result<(), EngineError> {
        self.game.set_control(key, value)
    }

    /// Run one frame: sample clock, update game, build buffers, publish.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        self.ctx.time = self.clock.advance(dt);
        self.game.update(&mut self.ctx, &self.input);

        // Input is consumed by exactly one update
        self.input.clear();

        if self.ctx.events.len() > self.layout.max_events {
            log::warn!(
                "dropping {} game events over capacity {}",
                self.ctx.events.len() - self.layout.max_events,
                self.layout.max_events
            );
            self.ctx.events.truncate(self.layout.max_events);
        }

        build_render_buffer(self.ctx.scene.iter(), &self.textures, &mut self.render_buffer);
        self.camera = self.ctx.camera.uniform();
        self.write_header();
        self.header.next_frame();
    }

    fn write_header(&mut self) {
        let viewport = self.ctx.viewport;
        let ambient = self.ctx.lights.ambient();
        let light_count = self.light_count();
        let h = &mut self.header;
        h.set(HEADER_INSTANCE_COUNT, self.render_buffer.instance_count() as f32);
        h.set(HEADER_LIGHT_COUNT, light_count as f32);
        h.set(HEADER_EVENT_COUNT, self.ctx.events.len() as f32);
        h.set(HEADER_VIEWPORT_WIDTH, viewport.width);
        h.set(HEADER_VIEWPORT_HEIGHT, viewport.height);
        h.set(HEADER_PIXEL_RATIO, viewport.pixel_ratio);
        h.set(HEADER_AMBIENT_R, ambient[0]);
        h.set(HEADER_AMBIENT_G, ambient[1]);
        h.set(HEADER_AMBIENT_B, ambient[2]);
        h.set(HEADER_ELAPSED, self.ctx.time.elapsed as f32);
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame_counter(&self) -> u32 {
        self.header.frame_counter()
    }

    // ---- Pointer accessors for host-side reads ----

    pub fn header_ptr(&self) -> *const f32 {
        self.header.as_ptr()
    }

    pub fn camera_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<CameraUniform, f32>(std::slice::from_ref(&self.camera)).as_ptr()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count().min(self.layout.max_lights) as u32
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        bytemuck::cast_slice::<_, f32>(&self.ctx.events[..]).as_ptr()
    }

    pub fn game_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }
}
