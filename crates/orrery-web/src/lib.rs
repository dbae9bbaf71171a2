pub mod runner;

pub use orrery_engine;
pub use runner::GameRunner;

/// Fresh RNG seed from the browser, for apps that do not pin one.
pub fn entropy_seed() -> u64 {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let now = js_sys::Date::now() as u64;
    (noise << 32) ^ now
}

/// Generate all `#[wasm_bindgen]` exports for an app.
///
/// Generates:
/// - `thread_local!` storage for the GameRunner
/// - `with_runner()` helper function
/// - All wasm-bindgen exports (init, tick, resize, input, panel, manifest,
///   buffer accessors)
///
/// Exports called before `game_init` do nothing and return zero/null.
///
/// # Usage
///
/// ```ignore
/// use wasm_bindgen::prelude::*;
///
/// mod game;
/// use game::MyScene;
///
/// orrery_web::export_game!(MyScene, "my-scene");
/// ```
///
/// The app crate must depend on `wasm-bindgen`, `log`, `console_log` and
/// `console_error_panic_hook`, and `$game_type` must provide `new()`.
#[macro_export]
macro_rules! export_game {
    ($game_type:ty, $game_name:literal) => {
        use std::cell::RefCell;

        thread_local! {
            static RUNNER: RefCell<Option<$crate::GameRunner<$game_type>>> = RefCell::new(None);
        }

        fn with_runner<R>(f: impl FnOnce(&mut $crate::GameRunner<$game_type>) -> R) -> Option<R> {
            RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
        }

        fn warn_on_err(what: &str, result: Option<Result<(), $crate::orrery_engine::EngineError>>) {
            if let Some(Err(e)) = result {
                log::warn!("{}: {} ignored: {}", $game_name, what, e);
            }
        }

        /// `options` is optional JSON; malformed options fall back to defaults.
        #[wasm_bindgen]
        pub fn game_init(options: Option<String>) {
            console_error_panic_hook::set_once();
            let _ = console_log::init_with_level(log::Level::Info);

            let game = <$game_type>::new();
            let mut runner = $crate::GameRunner::with_seed(game, $crate::entropy_seed());
            if let Some(json) = options.as_deref() {
                if let Err(e) = runner.configure(json) {
                    log::warn!("{}: bad options, using defaults: {}", $game_name, e);
                }
            }
            runner.init();

            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("{}: initialized", $game_name);
        }

        #[wasm_bindgen]
        pub fn game_tick(dt: f32) {
            with_runner(|r| r.tick(dt));
        }

        #[wasm_bindgen]
        pub fn game_resize(width: f32, height: f32, pixel_ratio: f32) {
            with_runner(|r| r.resize(width, height, pixel_ratio));
        }

        #[wasm_bindgen]
        pub fn game_pointer_down(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::PointerDown { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_up(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::PointerUp { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_pointer_move(x: f32, y: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::PointerMove { x, y }));
        }

        #[wasm_bindgen]
        pub fn game_wheel(delta_y: f32) {
            with_runner(|r| r.push_input($crate::orrery_engine::InputEvent::Wheel { delta_y }));
        }

        #[wasm_bindgen]
        pub fn game_load_manifest(json: &str) {
            warn_on_err("manifest", with_runner(|r| r.load_manifest(json)));
        }

        // ---- Debug panel ----

        #[wasm_bindgen]
        pub fn get_controls_json() -> String {
            match with_runner(|r| r.controls_json()) {
                Some(Ok(json)) => json,
                Some(Err(e)) => {
                    log::warn!("{}: controls unavailable: {}", $game_name, e);
                    String::from("[]")
                }
                None => String::from("[]"),
            }
        }

        #[wasm_bindgen]
        pub fn game_set_number(key: &str, value: f64) {
            warn_on_err(key, with_runner(|r| r.set_control(key, $crate::orrery_engine::ControlValue::Number(value))));
        }

        #[wasm_bindgen]
        pub fn game_set_choice(key: &str, option: &str) {
            warn_on_err(key, with_runner(|r| {
                r.set_control(key, $crate::orrery_engine::ControlValue::Choice(option.to_string()))
            }));
        }

        #[wasm_bindgen]
        pub fn game_set_toggle(key: &str, on: bool) {
            warn_on_err(key, with_runner(|r| r.set_control(key, $crate::orrery_engine::ControlValue::Toggle(on))));
        }

        // ---- Data accessors ----

        #[wasm_bindgen]
        pub fn get_header_ptr() -> *const f32 {
            with_runner(|r| r.header_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_camera_ptr() -> *const f32 {
            with_runner(|r| r.camera_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instances_ptr() -> *const f32 {
            with_runner(|r| r.instances_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_instance_count() -> u32 {
            with_runner(|r| r.instance_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_lights_ptr() -> *const f32 {
            with_runner(|r| r.lights_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_light_count() -> u32 {
            with_runner(|r| r.light_count()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_game_events_ptr() -> *const f32 {
            with_runner(|r| r.game_events_ptr()).unwrap_or(std::ptr::null())
        }

        #[wasm_bindgen]
        pub fn get_game_events_len() -> u32 {
            with_runner(|r| r.game_events_len()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_frame_counter() -> u32 {
            with_runner(|r| r.frame_counter()).unwrap_or(0)
        }

        // ---- Capacity accessors ----

        #[wasm_bindgen]
        pub fn get_max_instances() -> u32 {
            with_runner(|r| r.max_instances()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_lights() -> u32 {
            with_runner(|r| r.max_lights()).unwrap_or(0)
        }

        #[wasm_bindgen]
        pub fn get_max_events() -> u32 {
            with_runner(|r| r.max_events()).unwrap_or(0)
        }
    };
}
