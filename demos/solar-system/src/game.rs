/// Solar system: sun, orbiting earth, starfield, three camera views.
///
/// Per frame: integrate the orbit, move and spin the bodies, let the camera
/// rig place the camera, publish a status event. Panel edits land in
/// `Tunables` between frames and are read fresh on the next one.

use glam::Vec3;
use orrery_engine::*;

use crate::bodies::{self, SceneHandles};
use crate::camera_rig::{self, CameraMode};
use crate::options::SolarOptions;
use crate::orbit::{self, OrbitalState};
use crate::panel::Tunables;

/// Where the free camera starts, looking back at the sun.
pub const INITIAL_CAMERA_POS: Vec3 = Vec3::new(0.0, 0.0, -120.0);
/// Orbit-control inertia.
pub const DAMPING_FACTOR: f32 = 0.05;

// ── Game event kinds to the host ─────────────────────────────────────

/// Every frame: a = elapsed seconds, b = orbital angle, c = view code.
pub const EVENT_ORBIT_INFO: f32 = 1.0;
/// On view change: a = new view code.
pub const EVENT_VIEW_CHANGED: f32 = 2.0;

pub struct SolarSystem {
    options: SolarOptions,
    tunables: Tunables,
    orbit: OrbitalState,
    controls: OrbitControls,
    /// View applied on the previous frame, for change events.
    last_view: Option<CameraMode>,
    handles: Option<SceneHandles>,
}

impl SolarSystem {
    pub fn new() -> Self {
        Self {
            options: SolarOptions::default(),
            tunables: Tunables::default(),
            orbit: OrbitalState::new(),
            controls: OrbitControls::new().with_damping(DAMPING_FACTOR),
            last_view: None,
            handles: None,
        }
    }

    /// Move earth along its orbit and spin both bodies. Returns earth's
    /// new position.
    fn move_bodies(&mut self, ctx: &mut EngineContext) -> Vec3 {
        let elapsed = ctx.time.elapsed;
        self.orbit.advance(elapsed, self.tunables.translations_per_second);
        let earth_pos = self.orbit.earth_position();

        let Some(handles) = &self.handles else {
            return earth_pos;
        };
        if let Some(earth) = ctx.scene.get_mut(handles.earth) {
            earth.pos = earth_pos;
            earth.rotation.y = orbit::earth_spin(self.tunables.earth_rotation_rate, elapsed);
        }
        if let Some(sun) = ctx.scene.get_mut(handles.sun) {
            sun.rotation.y = orbit::sun_spin(elapsed);
        }
        earth_pos
    }
}

impl Default for SolarSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SolarSystem {
    fn config(&self) -> GameConfig {
        let defaults = GameConfig::default();
        GameConfig {
            max_instances: defaults
                .max_instances
                .max(self.options.star_count + bodies::FIXED_BODY_COUNT),
            seed: self.options.seed,
            ..defaults
        }
    }

    fn configure(&mut self, json: &str) -> Result<(), EngineError> {
        self.options = SolarOptions::from_json(json)?;
        self.tunables.ambient_light = self.options.ambient_enabled;
        Ok(())
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        let handles = bodies::build_scene(ctx, &self.options);
        log::info!(
            "solar-system: {} stars, light helper {}",
            handles.stars.len(),
            if handles.light_helper.is_some() { "on" } else { "off" }
        );
        self.handles = Some(handles);

        ctx.camera.position = INITIAL_CAMERA_POS;
        self.controls.target = Vec3::ZERO;
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Handle input ─────────────────────────────────────────────
        for event in input.iter() {
            self.controls.handle_event(event, &ctx.viewport);
        }

        // ── Bodies ───────────────────────────────────────────────────
        let earth_pos = self.move_bodies(ctx);
        ctx.lights.set_ambient_enabled(self.tunables.ambient_light);

        // ── Camera ───────────────────────────────────────────────────
        let view = self.tunables.view;
        camera_rig::apply(
            view,
            &mut ctx.camera,
            &mut self.controls,
            earth_pos,
            self.tunables.camera_height as f32,
        );

        // ── Emit game events ─────────────────────────────────────────
        if self.last_view != Some(view) {
            if self.last_view.is_some() {
                log::info!("view: {}", view.name());
            }
            ctx.emit_event(GameEvent::new(EVENT_VIEW_CHANGED, view.code(), 0.0, 0.0));
            self.last_view = Some(view);
        }
        ctx.emit_event(GameEvent::new(
            EVENT_ORBIT_INFO,
            ctx.time.elapsed as f32,
            self.orbit.angle() as f32,
            view.code(),
        ));
    }

    fn controls(&self) -> Vec<ControlSpec> {
        self.tunables.controls()
    }

    fn set_control(&mut self, key: &str, value: ControlValue) -> Result<(), EngineError> {
        self.tunables.apply(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel;
    use std::f64::consts::TAU;

    fn started(options: &str) -> (SolarSystem, EngineContext) {
        let mut game = SolarSystem::new();
        game.configure(options).unwrap();
        let mut ctx = EngineContext::from_config(&game.config());
        game.init(&mut ctx);
        (game, ctx)
    }

    /// One frame at `elapsed` seconds with no input.
    fn frame(game: &mut SolarSystem, ctx: &mut EngineContext, elapsed: f64) {
        ctx.clear_frame_data();
        ctx.time = FrameTime { elapsed, delta: 0.0 };
        game.update(ctx, &InputQueue::new());
    }

    fn earth_entity<'a>(game: &SolarSystem, ctx: &'a EngineContext) -> &'a Entity {
        let id = game.handles.as_ref().unwrap().earth;
        ctx.scene.get(id).unwrap()
    }

    #[test]
    fn earth_orbits_at_fixed_radius() {
        let (mut game, mut ctx) = started(r#"{"starCount": 0}"#);
        game.set_control(panel::TRANSLATIONS_PER_SECOND, ControlValue::Number(0.3)).unwrap();
        let mut t = 0.0;
        for _ in 0..600 {
            t += 0.016;
            frame(&mut game, &mut ctx, t);
            let r = earth_entity(&game, &ctx).pos.length();
            assert!((r - 100.0).abs() < 1e-3);
        }
    }

    #[test]
    fn spins_follow_elapsed_time() {
        let (mut game, mut ctx) = started(r#"{"starCount": 0}"#);
        frame(&mut game, &mut ctx, 4.0);
        assert!((earth_entity(&game, &ctx).rotation.y - 2.0).abs() < 1e-6);

        let sun = ctx.scene.find_by_tag(bodies::SUN_TAG).unwrap();
        assert!((sun.rotation.y + 0.4).abs() < 1e-6);
        assert_eq!(sun.pos, Vec3::ZERO);
    }

    #[test]
    fn one_revolution_per_hundred_seconds_at_default_rate() {
        let (mut game, mut ctx) = started(r#"{"starCount": 0}"#);
        for i in 1..=250 {
            frame(&mut game, &mut ctx, i as f64 * 0.4);
        }
        assert!((game.orbit.angle() - TAU).abs() < 1e-9);
        let earth = earth_entity(&game, &ctx).pos;
        assert!((earth - Vec3::new(100.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn sun_view_places_camera_overhead() {
        let (mut game, mut ctx) = started(r#"{"starCount": 0}"#);
        frame(&mut game, &mut ctx, 0.0);
        game.set_control(panel::VIEW, ControlValue::Choice("Sun".into())).unwrap();
        game.set_control(panel::CAMERA_HEIGHT, ControlValue::Number(50.0)).unwrap();
        frame(&mut game, &mut ctx, 1.0);

        assert_eq!(ctx.camera.position, Vec3::new(0.0, 50.0, 0.0));
        assert!((ctx.camera.forward() - Vec3::NEG_Y).length() < 1e-4);
        assert_eq!(game.controls.target, Vec3::ZERO);
        assert!(!game.controls.enabled);
    }

    #[test]
    fn earth_view_uses_same_frame_position() {
        let (mut game, mut ctx) = started(r#"{"starCount": 0}"#);
        game.set_control(panel::VIEW, ControlValue::Choice("Earth".into())).unwrap();
        game.set_control(panel::TRANSLATIONS_PER_SECOND, ControlValue::Number(0.25)).unwrap();
        frame(&mut game, &mut ctx, 0.0);
        frame(&mut game, &mut ctx, 1.0);

        let earth = earth_entity(&game, &ctx).pos;
        assert!((earth - Vec3::new(0.0, 0.0, 100.0)).length() < 1e-3);
        assert_eq!(ctx.camera.position, Vec3::new(earth.x, 128.0, earth.z));
        assert_eq!(game.controls.target, earth);
    }

    #[test]
    fn free_view_returns_camera_to_controls() {
        let (mut game, mut ctx) = started(r#"{"starCount": 0}"#);
        frame(&mut game, &mut ctx, 0.0);
        // First free frame turns the camera toward the sun.
        assert!((ctx.camera.forward() - Vec3::Z).length() < 1e-4);

        game.set_control(panel::VIEW, ControlValue::Choice("Sun".into())).unwrap();
        frame(&mut game, &mut ctx, 0.1);
        game.set_control(panel::VIEW, ControlValue::Choice("You".into())).unwrap();
        game.set_control(panel::CAMERA_HEIGHT, ControlValue::Number(300.0)).unwrap();
        frame(&mut game, &mut ctx, 0.2);

        assert!(game.controls.enabled);
        // The rig no longer writes height into the camera.
        assert!((ctx.camera.position.length() - 128.0).abs() < 1e-2);
    }

    #[test]
    fn pointer_drag_orbits_only_in_free_view() {
        let (mut game, mut ctx) = started(r#"{"starCount": 0}"#);
        frame(&mut game, &mut ctx, 0.0);
        let start = ctx.camera.position;

        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 100.0, y: 100.0 });
        input.push(InputEvent::PointerMove { x: 300.0, y: 100.0 });
        ctx.time = FrameTime { elapsed: 0.1, delta: 0.1 };
        game.update(&mut ctx, &input);
        assert!((ctx.camera.position - start).length() > 1e-2);
        assert!((ctx.camera.position.length() - 120.0).abs() < 1e-2);
    }

    #[test]
    fn ambient_toggle_reaches_lights() {
        let (mut game, mut ctx) = started(r#"{"starCount": 0}"#);
        frame(&mut game, &mut ctx, 0.0);
        assert_eq!(ctx.lights.ambient(), [0.0; 3]);
        game.set_control(panel::AMBIENT_LIGHT, ControlValue::Toggle(true)).unwrap();
        frame(&mut game, &mut ctx, 0.1);
        assert!(ctx.lights.ambient_enabled());
    }

    #[test]
    fn events_report_orbit_and_view_changes() {
        let (mut game, mut ctx) = started(r#"{"starCount": 0}"#);
        frame(&mut game, &mut ctx, 0.0);
        assert_eq!(ctx.events.len(), 2);
        assert_eq!(ctx.events[0].kind, EVENT_VIEW_CHANGED);

        frame(&mut game, &mut ctx, 0.5);
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(ctx.events[0].kind, EVENT_ORBIT_INFO);
        assert_eq!(ctx.events[0].a, 0.5);
        let expected_angle = 0.5 * 0.01 * std::f64::consts::TAU;
        assert!((ctx.events[0].b as f64 - expected_angle).abs() < 1e-6);
        assert_eq!(ctx.events[0].c, CameraMode::Free.code());

        game.set_control(panel::VIEW, ControlValue::Choice("Earth".into())).unwrap();
        frame(&mut game, &mut ctx, 0.6);
        assert_eq!(ctx.events[0], GameEvent::new(EVENT_VIEW_CHANGED, CameraMode::Earth.code(), 0.0, 0.0));
    }

    #[test]
    fn options_shape_config() {
        let mut game = SolarSystem::new();
        game.configure(r#"{"starCount": 5000, "seed": 11, "ambientEnabled": true}"#).unwrap();
        let config = game.config();
        assert_eq!(config.max_instances, 5000 + bodies::FIXED_BODY_COUNT);
        assert_eq!(config.seed, Some(11));
        assert!(game.tunables.ambient_light);
    }

    #[test]
    fn bad_options_keep_defaults() {
        let mut game = SolarSystem::new();
        assert!(game.configure("not json").is_err());
        assert_eq!(game.config().max_instances, GameConfig::default().max_instances);
        assert_eq!(game.config().seed, None);
    }
}
