use log::{debug, info};

/// Thin wrapper over the `log` facade used by render cycles and sessions.
#[derive(Debug)]
pub struct LogManager {
    scope: &'static str,
}

impl LogManager {
    pub fn new() -> Self {
        Self::scoped("model")
    }

    pub fn scoped(scope: &'static str) -> Self {
        Self { scope }
    }

    pub fn record(&self, message: &str) {
        info!("[{}] {}", self.scope, message);
    }

    pub fn trace(&self, message: &str) {
        debug!("[{}] {}", self.scope, message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
