//! Count-up interpolation for stat counters.
//!
//! `CountUp` is a pure tick function: callers supply elapsed milliseconds from
//! whatever frame source the platform offers and get back the value to display.

/// One step of a count-up animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountFrame {
    pub value: u64,
    /// Once set, the caller stops scheduling frames.
    pub done: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountUp {
    start: u64,
    end: u64,
    duration_ms: f64,
}

impl CountUp {
    pub fn new(start: u64, end: u64, duration_ms: u64) -> Self {
        Self {
            start,
            end,
            duration_ms: duration_ms as f64,
        }
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn frame(&self, elapsed_ms: f64) -> CountFrame {
        let progress = self.progress(elapsed_ms);
        if progress >= 1.0 {
            return CountFrame {
                value: self.end,
                done: true,
            };
        }

        let eased = ease_out_cubic(progress);
        let range = self.end as f64 - self.start as f64;
        let value = (self.start as f64 + range * eased).floor().max(0.0) as u64;

        CountFrame { value, done: false }
    }

    fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || elapsed_ms.is_nan() {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }
}

/// `1 - (1 - p)^3`
pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}
