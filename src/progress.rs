// src/progress.rs
/// Diagnostic side channel for the pipeline stages.
/// Components report through this instead of printing, so a frontend (or a
/// test) decides where messages go.
pub trait Progress {
    /// A new pipeline stage begins.
    fn stage(&mut self, _name: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something was skipped but the run goes on.
    fn warn(&mut self, _msg: &str) {}

    /// A stage failed; the run degrades to an empty result.
    fn error(&mut self, _msg: &str) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Forwards every message to the logging macros (stdout).
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn stage(&mut self, name: &str) { logf!("== {name}"); }
    fn log(&mut self, msg: &str)    { logf!("{msg}"); }
    fn warn(&mut self, msg: &str)   { logw!("{msg}"); }
    fn error(&mut self, msg: &str)  { loge!("{msg}"); }
}
