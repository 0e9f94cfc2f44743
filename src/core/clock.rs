use std::time::Instant;

/// Monotonic frame clock - produces the timestamps fed to `PovController::update`
#[derive(Debug)]
pub struct FrameClock {
    epoch: Instant,
}

impl FrameClock {
    /// Create new clock whose epoch is now
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    /// Seconds elapsed since the epoch
    pub fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Restart the epoch at the current time
    pub fn reset(&mut self) {
        self.epoch = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
