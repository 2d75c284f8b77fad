/// A single touch-down event as reported by the platform gesture layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchSample {
    pub x: f64,
    pub y: f64,
    pub timestamp_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoubleTapConfig {
    /// Maximum gap between the two touch-downs, in milliseconds.
    pub window_ms: u64,
    /// Maximum distance between the two touch points, in screen units.
    pub radius: f64,
}

impl Default for DoubleTapConfig {
    fn default() -> Self {
        DoubleTapConfig {
            window_ms: 300,
            radius: 20.0,
        }
    }
}

/// True iff `current` landed within the time window and the radius of
/// `previous`. Both thresholds are exclusive; a reversed timestamp pair
/// never matches.
pub fn is_double_tap(previous: &TouchSample, current: &TouchSample, config: &DoubleTapConfig) -> bool {
    let delta_ms = match current.timestamp_ms.checked_sub(previous.timestamp_ms) {
        Some(delta) => delta,
        None => return false,
    };
    if delta_ms >= config.window_ms {
        return false;
    }

    let dx = current.x - previous.x;
    let dy = current.y - previous.y;
    let distance = (dx * dx + dy * dy).sqrt();
    distance < config.radius
}

/// Owns the "previous touch" state so the predicate above stays pure. Feed
/// it every touch-down; it reports whether that touch completed a double tap.
#[derive(Debug, Default)]
pub struct TapTracker {
    config: DoubleTapConfig,
    previous: Option<TouchSample>,
}

impl TapTracker {
    pub fn new(config: DoubleTapConfig) -> Self {
        TapTracker {
            config,
            previous: None,
        }
    }

    /// Classifies `sample` against the previous touch, then stores it as the
    /// new previous touch regardless of the outcome.
    pub fn observe(&mut self, sample: TouchSample) -> bool {
        let double_tap = match self.previous {
            Some(ref previous) => is_double_tap(previous, &sample, &self.config),
            None => false,
        };
        self.previous = Some(sample);
        double_tap
    }

    pub fn reset(&mut self) {
        self.previous = None;
    }
}
