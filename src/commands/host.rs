use std::io::Write;

/// Abstraction over the process environment, so commands can be driven from tests.
pub trait Host {
    /// Stream for regular output.
    fn output(&mut self) -> impl Write;

    /// Stream for error output.
    fn error(&mut self) -> impl Write;

    /// Terminate with the given exit code.
    fn exit(&mut self, code: i32);
}
