/// Elapsed/delta sample handed to the game once per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the first frame. Starts at zero, never decreases.
    pub elapsed: f64,
    /// Seconds covered by this frame.
    pub delta: f32,
}

/// Monotonic frame clock.
///
/// Fed by the host's per-refresh `dt`. The first sample after construction
/// reads zero no matter what `dt` the host reports, so elapsed time starts
/// when the loop starts rather than when the page loaded.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed: f64,
    started: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> FrameTime {
        if !self.started {
            self.started = true;
            return FrameTime { elapsed: 0.0, delta: 0.0 };
        }
        let dt = if frame_dt.is_finite() { frame_dt.max(0.0) } else { 0.0 };
        self.elapsed += dt as f64;
        FrameTime { elapsed: self.elapsed, delta: dt }
    }

    /// Seconds elapsed as of the last `advance`.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn is_started(&self) -> bool {
        self.started
    }
}
