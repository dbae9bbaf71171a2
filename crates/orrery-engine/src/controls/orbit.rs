//! Orbit camera controls.
//!
//! Drag to orbit around `target`, wheel to dolly. The camera's current
//! position is the source of truth: each `update` re-derives spherical
//! coordinates from it, so anything else that moved the camera (a locked
//! view, a reset) is picked up seamlessly on the next free-orbit frame.

use std::f32::consts::{PI, TAU};
use glam::Vec3;
use crate::core::viewport::Viewport;
use crate::input::queue::InputEvent;
use crate::renderer::camera::Camera3D;

/// Keeps the polar angle off the poles, where look-at has no stable up.
const POLAR_EPSILON: f32 = 1e-6;

/// Radius/polar/azimuth around the target. Polar angle is measured from +Y.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Spherical {
    radius: f32,
    phi: f32,
    theta: f32,
}

impl Spherical {
    fn from_offset(offset: Vec3) -> Self {
        let radius = offset.length();
        if radius < 1e-12 {
            return Self { radius: 0.0, phi: 0.0, theta: 0.0 };
        }
        Self {
            radius,
            theta: offset.x.atan2(offset.z),
            phi: (offset.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    fn to_offset(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// When false, pointer and wheel input is ignored.
    pub enabled: bool,
    /// Point the camera orbits around and looks at.
    pub target: Vec3,
    /// Inertia: pending rotation bleeds out over several frames.
    pub enable_damping: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,

    // Pending (theta, phi) rotation and dolly scale, consumed by `update`.
    delta_theta: f32,
    delta_phi: f32,
    scale: f32,

    dragging: bool,
    last_pointer: (f32, f32),
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: true,
            target: Vec3::ZERO,
            enable_damping: false,
            damping_factor: 0.05,
            rotate_speed: 1.0,
            zoom_speed: 1.0,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            delta_theta: 0.0,
            delta_phi: 0.0,
            scale: 1.0,
            dragging: false,
            last_pointer: (0.0, 0.0),
        }
    }
}

impl OrbitControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_damping(mut self, factor: f32) -> Self {
        self.enable_damping = true;
        self.damping_factor = factor.clamp(0.0, 1.0);
        self
    }

    /// Enable or disable user interaction. Disabling drops any drag in
    /// progress and any pending rotation.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled && !enabled {
            self.dragging = false;
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
            self.scale = 1.0;
        }
        self.enabled = enabled;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Feed one input event. Returns true if the event was consumed.
    pub fn handle_event(&mut self, event: &InputEvent, viewport: &Viewport) -> bool {
        if !self.enabled {
            return false;
        }
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.dragging = true;
                self.last_pointer = (x, y);
                true
            }
            InputEvent::PointerMove { x, y } => {
                if !self.dragging {
                    return false;
                }
                let dx = x - self.last_pointer.0;
                let dy = y - self.last_pointer.1;
                self.last_pointer = (x, y);
                self.rotate_left(TAU * dx / viewport.height * self.rotate_speed);
                self.rotate_up(TAU * dy / viewport.height * self.rotate_speed);
                true
            }
            InputEvent::PointerUp { .. } => {
                let was_dragging = self.dragging;
                self.dragging = false;
                was_dragging
            }
            InputEvent::Wheel { delta_y } => {
                let step = 0.95_f32.powf(self.zoom_speed);
                if delta_y < 0.0 {
                    self.scale *= step;
                } else if delta_y > 0.0 {
                    self.scale /= step;
                }
                delta_y != 0.0
            }
        }
    }

    pub fn rotate_left(&mut self, angle: f32) {
        self.delta_theta -= angle;
    }

    pub fn rotate_up(&mut self, angle: f32) {
        self.delta_phi -= angle;
    }

    /// Move the camera by the pending rotation/dolly and face the target.
    /// Returns true if the camera moved noticeably.
    pub fn update(&mut self, camera: &mut Camera3D) -> bool {
        let before = camera.position;
        let mut spherical = Spherical::from_offset(camera.position - self.target);

        if self.enable_damping {
            spherical.theta += self.delta_theta * self.damping_factor;
            spherical.phi += self.delta_phi * self.damping_factor;
        } else {
            spherical.theta += self.delta_theta;
            spherical.phi += self.delta_phi;
        }
        spherical.phi = spherical.phi.clamp(POLAR_EPSILON, PI - POLAR_EPSILON);
        spherical.radius = (spherical.radius * self.scale).clamp(self.min_distance, self.max_distance);

        camera.position = self.target + spherical.to_offset();
        camera.look_at(self.target);

        if self.enable_damping {
            self.delta_theta *= 1.0 - self.damping_factor;
            self.delta_phi *= 1.0 - self.damping_factor;
        } else {
            self.delta_theta = 0.0;
            self.delta_phi = 0.0;
        }
        self.scale = 1.0;

        (camera.position - before).length_squared() > 1e-12
    }
}
