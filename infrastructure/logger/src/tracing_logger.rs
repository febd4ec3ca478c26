use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards domain log lines to `tracing` under the `shopping_bag` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "shopping_bag", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "shopping_bag", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "shopping_bag", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "shopping_bag", "{}", message);
    }
}
