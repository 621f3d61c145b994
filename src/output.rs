/// Abstraction over user-facing output.
///
/// Library code uses this trait instead of `println!`/`eprintln!` so that
/// progress messages can be suppressed or redirected when boxer is embedded
/// in another tool.
pub trait UserOutput: Send + Sync {
    /// Informational status message (e.g., "Running [checkout.sh] in box.db/")
    fn status(&self, message: &str);

    /// Success message (e.g., "Generated [demo.boxes/docker-compose.run.yml]")
    fn success(&self, message: &str);

    /// Warning message
    fn warning(&self, message: &str);

    /// Error message
    fn error(&self, message: &str);
}

/// Standard CLI output — writes to stdout/stderr.
pub struct CliOutput;

impl UserOutput for CliOutput {
    fn status(&self, message: &str) {
        println!("{}", message);
    }

    fn success(&self, message: &str) {
        println!("{}", message);
    }

    fn warning(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("\x1b[31m{}\x1b[0m", message);
    }
}

/// Suppresses all output. Used in tests and embedded contexts.
pub struct QuietOutput;

impl UserOutput for QuietOutput {
    fn status(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
    fn warning(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
