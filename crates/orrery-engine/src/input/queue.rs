/// Pointer input from the canvas, in CSS pixels relative to its top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    /// Negative `delta_y` scrolls up (zoom in).
    Wheel { delta_y: f32 },
}

/// Events the host pushed since the last frame.
///
/// The game reads the whole batch during `update`; the runner clears it
/// right after, so every event is seen by exactly one frame.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self { events: Vec::with_capacity(32) }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Pending events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Forget the batch once a frame has consumed it.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
