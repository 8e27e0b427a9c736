// src/progress.rs
/// Lightweight progress reporting for the table load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one pipeline stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Extract,
    Normalize,
    Type,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Fetch, Stage::Extract, Stage::Normalize, Stage::Type];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Fetch => "Fetched page",
            Stage::Extract => "Read table",
            Stage::Normalize => "Renamed columns",
            Stage::Type => "Cleaned values",
        }
    }
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Writes each step to stderr.
#[derive(Default)]
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn stage_done(&mut self, stage: Stage) {
        self.done += 1;
        eprintln!("[{}/{}] {}", self.done, self.total, stage.label());
    }
}
