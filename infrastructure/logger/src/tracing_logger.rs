use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

const TARGET: &str = "storefront";

/// Forwards the business `Logger` port to `tracing`.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: TARGET, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: TARGET, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: TARGET, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: TARGET, "{}", message);
    }
    fn failure(&self, operation: &str, error: &dyn std::fmt::Display) {
        error!(target: TARGET, operation, code = %error, "operation failed");
    }
}
