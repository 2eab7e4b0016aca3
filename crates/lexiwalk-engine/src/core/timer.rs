/// Round clock driven by host-supplied frame deltas.
/// The host owns real time (wasm has no monotonic clock of its own); the
/// engine only accumulates whatever `dt` it is handed while the round runs.
#[derive(Debug, Clone, Default)]
pub struct RoundTimer {
    elapsed: f32,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self { elapsed: 0.0 }
    }

    /// Add frame time in seconds.
    pub fn tick(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed += dt;
        }
    }

    /// Whole elapsed seconds.
    pub fn seconds(&self) -> u32 {
        self.elapsed as u32
    }

    /// Clock display, `m:ss`.
    pub fn formatted(&self) -> String {
        let s = self.seconds();
        format!("{}:{:02}", s / 60, s % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_whole_seconds() {
        let mut timer = RoundTimer::new();
        for _ in 0..90 {
            timer.tick(1.0 / 60.0);
        }
        assert_eq!(timer.seconds(), 1);
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut timer = RoundTimer::new();
        timer.tick(2.0);
        timer.tick(-5.0);
        assert_eq!(timer.seconds(), 2);
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(RoundTimer::new().formatted(), "0:00");
        let mut timer = RoundTimer::new();
        timer.tick(125.0);
        assert_eq!(timer.formatted(), "2:05");
    }
}
