use std::io::Write;

/// The environment a command runs in.
///
/// The binary writes to the process's stdout and stderr and really exits; tests capture
/// both streams and record the exit code instead.
pub trait Host {
    /// Stream for reports and informational output.
    fn output(&mut self) -> impl Write;

    /// Stream for error messages.
    fn error(&mut self) -> impl Write;

    /// Terminate with `code`. Implementations used in tests may return normally.
    fn exit(&mut self, code: i32);
}
