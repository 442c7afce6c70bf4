use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// Per-session activity counters.
pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub renders: usize,
    pub questions: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_render(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.renders += 1;
        }
    }

    pub fn record_question(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.questions += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            *metrics
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MetricsRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MetricsRecorder")
            .field(&self.snapshot())
            .finish()
    }
}
