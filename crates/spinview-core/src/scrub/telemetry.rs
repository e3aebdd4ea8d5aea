/// Named debug metrics captured while scrubbing, for the on-screen overlay.
///
/// Metrics keep first-recorded order so the overlay doesn't jump around.
/// Recording is a no-op when disabled, so call sites never have to check.
#[derive(Debug, Default)]
pub struct Telemetry {
    enabled: bool,
    metrics: Vec<(&'static str, f64)>,
}

impl Telemetry {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            metrics: Vec::new(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the latest value for a metric.
    pub fn record(&mut self, name: &'static str, value: f64) {
        if !self.enabled {
            return;
        }
        match self.metrics.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.metrics.push((name, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.metrics.iter().copied()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}
