use std::time::Instant;

/// Frame clock: tracks total elapsed time since startup.
///
/// The render loop ticks this once per frame and reads the elapsed value.
/// Nothing currently consumes it for a visual effect; it exists so that
/// time-driven effects have a stable clock to hang off when they arrive.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Advance the clock and return total elapsed seconds since creation.
    pub fn tick(&mut self) -> f32 {
        self.last_tick = Instant::now();
        self.elapsed()
    }

    /// Total elapsed seconds since creation.
    pub fn elapsed(&self) -> f32 {
        self.last_tick.duration_since(self.start).as_secs_f32()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
