/// Logging port. Business code never talks to a logging backend directly.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);

    /// Logs a failed operation together with its error code.
    fn failure(&self, operation: &str, error: &dyn std::fmt::Display) {
        self.error(&format!("{} failed: {}", operation, error));
    }
}
