/// Camera rig: decides each frame who owns the camera.
///
/// In `Free` mode the orbit controls drive it. The two locked views snap the
/// camera above the sun or above earth and look straight down; the orbit
/// controls are switched off and their target is parked on the viewed body
/// so that returning to `Free` orbits around it.

use std::f32::consts::FRAC_PI_2;
use glam::Vec3;
use orrery_engine::*;

/// Downward-looking orientation (Euler XYZ) shared by both locked views.
pub const TOP_DOWN_EULER: Vec3 = Vec3::new(-FRAC_PI_2, 0.0, 0.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// User orbit, labeled "You" in the panel.
    #[default]
    Free,
    /// Fixed above the sun.
    Sun,
    /// Fixed above earth, following it.
    Earth,
}

impl CameraMode {
    pub const ALL: [CameraMode; 3] = [CameraMode::Free, CameraMode::Sun, CameraMode::Earth];

    /// Panel option name.
    pub fn name(self) -> &'static str {
        match self {
            CameraMode::Free => "You",
            CameraMode::Sun => "Sun",
            CameraMode::Earth => "Earth",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    pub fn names() -> [&'static str; 3] {
        Self::ALL.map(CameraMode::name)
    }

    /// Numeric code used in game events.
    pub fn code(self) -> f32 {
        match self {
            CameraMode::Free => 0.0,
            CameraMode::Sun => 1.0,
            CameraMode::Earth => 2.0,
        }
    }
}

/// Position the camera for `mode`. `earth` must be this frame's earth
/// position so the Earth view never lags a frame behind.
pub fn apply(
    mode: CameraMode,
    camera: &mut Camera3D,
    controls: &mut OrbitControls,
    earth: Vec3,
    height: f32,
) {
    match mode {
        CameraMode::Free => {
            controls.set_enabled(true);
            controls.update(camera);
        }
        CameraMode::Sun => lock_above(camera, controls, Vec3::ZERO, Vec3::new(0.0, height, 0.0)),
        CameraMode::Earth => lock_above(camera, controls, earth, Vec3::new(earth.x, height, earth.z)),
    }
}

fn lock_above(camera: &mut Camera3D, controls: &mut OrbitControls, target: Vec3, position: Vec3) {
    camera.position = position;
    camera.set_euler(TOP_DOWN_EULER.x, TOP_DOWN_EULER.y, TOP_DOWN_EULER.z);
    controls.target = target;
    controls.set_enabled(false);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rig() -> (Camera3D, OrbitControls) {
        let camera = Camera3D::default().with_position(Vec3::new(0.0, 0.0, -120.0));
        (camera, OrbitControls::new().with_damping(0.05))
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn names_round_trip() {
        for mode in CameraMode::ALL {
            assert_eq!(CameraMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(CameraMode::names(), ["You", "Sun", "Earth"]);
        assert_eq!(CameraMode::from_name("Moon"), None);
        assert_eq!(CameraMode::default(), CameraMode::Free);
    }

    #[test]
    fn sun_view_from_any_mode() {
        let earth = Vec3::new(30.0, 0.0, 95.0);
        for prior in CameraMode::ALL {
            let (mut cam, mut controls) = rig();
            apply(prior, &mut cam, &mut controls, earth, 80.0);
            apply(CameraMode::Sun, &mut cam, &mut controls, earth, 50.0);

            assert_eq!(cam.position, Vec3::new(0.0, 50.0, 0.0));
            assert!(approx(cam.forward(), Vec3::NEG_Y));
            assert_eq!(controls.target, Vec3::ZERO);
            assert!(!controls.enabled);
        }
    }

    #[test]
    fn earth_view_tracks_current_earth() {
        let (mut cam, mut controls) = rig();
        let earth = Vec3::new(-70.7, 0.0, 70.7);
        apply(CameraMode::Earth, &mut cam, &mut controls, earth, 128.0);

        assert_eq!(cam.position, Vec3::new(-70.7, 128.0, 70.7));
        assert!(approx(cam.euler(), TOP_DOWN_EULER));
        assert_eq!(controls.target, earth);
        assert!(!controls.enabled);

        let moved = Vec3::new(0.0, 0.0, 100.0);
        apply(CameraMode::Earth, &mut cam, &mut controls, moved, 128.0);
        assert_eq!(cam.position, Vec3::new(0.0, 128.0, 100.0));
    }

    #[test]
    fn locked_views_ignore_pointer_input() {
        let (mut cam, mut controls) = rig();
        apply(CameraMode::Sun, &mut cam, &mut controls, Vec3::X * 100.0, 60.0);
        let vp = Viewport::default();
        assert!(!controls.handle_event(&InputEvent::PointerDown { x: 0.0, y: 0.0 }, &vp));
        apply(CameraMode::Sun, &mut cam, &mut controls, Vec3::X * 100.0, 60.0);
        assert_eq!(cam.position, Vec3::new(0.0, 60.0, 0.0));
    }

    #[test]
    fn free_mode_hands_camera_back_to_controls() {
        let (mut cam, mut controls) = rig();
        let earth = Vec3::new(100.0, 0.0, 0.0);
        apply(CameraMode::Earth, &mut cam, &mut controls, earth, 128.0);
        apply(CameraMode::Free, &mut cam, &mut controls, earth, 128.0);
        assert!(controls.enabled);

        // A drag now moves the camera, and the rig does not reset it.
        let vp = Viewport::default();
        controls.handle_event(&InputEvent::PointerDown { x: 10.0, y: 10.0 }, &vp);
        controls.handle_event(&InputEvent::PointerMove { x: 200.0, y: -100.0 }, &vp);
        let before = cam.position;
        apply(CameraMode::Free, &mut cam, &mut controls, earth, 300.0);
        assert!((cam.position - before).length() > 1e-3);
        assert!(cam.position.y < 128.0);
        assert!(((cam.position - earth).length() - 128.0).abs() < 1e-2);
    }
}
