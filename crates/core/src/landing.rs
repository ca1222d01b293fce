//! Landing page metric rotation

use std::time::Duration;

/// How long each metric stays highlighted.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(3);

/// A highlighted figure on the landing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metric {
    /// Large figure
    pub value: &'static str,

    /// Caption under the figure
    pub label: &'static str,
}

/// Metrics cycled on the landing page.
pub const METRICS: [Metric; 3] = [
    Metric {
        value: "2",
        label: "Roles de usuario",
    },
    Metric {
        value: "100%",
        label: "En la nube",
    },
    Metric {
        value: "∞",
        label: "Productos posibles",
    },
];

/// Position in the metric cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricRotation {
    index: usize,
}

impl MetricRotation {
    /// Start at the first metric.
    pub fn new() -> Self {
        Self::default()
    }

    /// Metric currently highlighted.
    pub fn current(&self) -> Metric {
        METRICS.get(self.index).copied().unwrap_or_default()
    }

    /// Index of the highlighted metric.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next metric, wrapping after the last.
    pub fn advance(&mut self) -> Metric {
        self.index = (self.index + 1) % METRICS.len();
        self.current()
    }
}
