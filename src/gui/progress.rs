// src/gui/progress.rs
//
// Load progress → the status line under the export bar.
// Runs inside `App::new`, before any frame; the stage lines land in the log
// and the status keeps whatever the load ended on.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::progress::{Progress, Stage};

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    stages: Vec<Stage>,
    expected: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, stages: Vec::new(), expected: 0 }
    }

    fn show(&self, line: String) {
        debug!("Status: {line}");
        if let Ok(mut s) = self.status.lock() {
            *s = line;
        }
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.expected = total;
        self.stages.clear();
    }

    fn log(&mut self, msg: &str) {
        self.show(msg.to_string());
    }

    fn stage_done(&mut self, stage: Stage) {
        self.stages.push(stage);
        self.show(format!("{} ({}/{})", stage.label(), self.stages.len(), self.expected));
    }

    /// Leaves the last stage visible when the load stopped early.
    fn finish(&mut self) {
        if self.expected > 0 && self.stages.len() == self.expected {
            self.show(String::from("Ready"));
        }
    }
}
