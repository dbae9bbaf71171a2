/// Circular orbital motion. Pure math, no engine dependencies.
///
/// The orbital angle is integrated from frame deltas so that changing the
/// translation rate mid-flight never makes earth jump. Spin angles, in
/// contrast, are absolute functions of elapsed time.
///
/// f64 throughout; convert to f32 only when writing entity transforms.

use std::f64::consts::TAU;
use glam::Vec3;

/// Earth's orbital radius in world units.
pub const ORBIT_RADIUS: f64 = 100.0;

/// Sun spin in radians per second (negative: clockwise seen from above).
pub const SUN_SPIN_RATE: f64 = -0.1;

/// Earth's accumulated orbital angle plus the clock reading it was last
/// advanced to.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitalState {
    angle: f64,
    last_time: f64,
}

impl OrbitalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orbital angle in radians. Never decreases for non-negative rates.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Integrate up to `elapsed` seconds at `translations_per_second`
    /// revolutions per second. Returns the new angle.
    pub fn advance(&mut self, elapsed: f64, translations_per_second: f64) -> f64 {
        let delta = elapsed - self.last_time;
        self.last_time = elapsed;
        self.angle += delta * translations_per_second * TAU;
        self.angle
    }

    /// Earth's position on the orbit ring for the current angle.
    pub fn earth_position(&self) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        Vec3::new((ORBIT_RADIUS * cos) as f32, 0.0, (ORBIT_RADIUS * sin) as f32)
    }
}

/// Earth's spin about Y at `elapsed` seconds.
pub fn earth_spin(rotation_rate: f64, elapsed: f64) -> f32 {
    (rotation_rate * elapsed) as f32
}

/// Sun's spin about Y at `elapsed` seconds.
pub fn sun_spin(elapsed: f64) -> f32 {
    (SUN_SPIN_RATE * elapsed) as f32
}
