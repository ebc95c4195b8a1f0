//! Drives the plugin state and the worker together, the way Zellij does.

#![allow(dead_code)]

use jobfinder::backend::JsonBackend;
use jobfinder::catalog::JobCatalog;
use jobfinder::worker::{JobFinderWorker, WorkerMessage};
use jobfinder::{handle_event, Action, AppState, Event, Region, ThemePreference};
use tempfile::TempDir;

pub struct Harness {
    pub state: AppState,
    pub worker: JobFinderWorker,
    /// Every message that reached the worker, in order.
    pub sent: Vec<WorkerMessage>,
    pub dir: TempDir,
}

impl Harness {
    pub fn new(region: Region) -> Self {
        let dir = TempDir::new().unwrap();
        let worker = Self::open_worker(&dir, region);

        Self {
            state: AppState::new(region, ThemePreference::System, None),
            worker,
            sent: Vec::new(),
            dir,
        }
    }

    fn open_worker(dir: &TempDir, region: Region) -> JobFinderWorker {
        let backend = JsonBackend::new(
            dir.path().join(format!("jobs-{}.json", region.key())),
            JobCatalog::seeded(region).jobs().to_vec(),
        )
        .unwrap();
        JobFinderWorker::with_backend(region, Box::new(backend))
    }

    /// Reopens the worker on the same board file, as after a plugin restart.
    pub fn restart(&mut self) {
        let region = self.state.region;
        self.worker = Self::open_worker(&self.dir, region);
        self.state = AppState::new(region, ThemePreference::System, None);
    }

    /// Handles `event` and runs every resulting action, feeding worker
    /// responses straight back in. Returns whether the first event asked for a
    /// render.
    pub fn send(&mut self, event: Event) -> bool {
        let (render, actions) = handle_event(&mut self.state, &event).unwrap();
        for action in actions {
            if let Action::PostToWorker(message) = action {
                self.sent.push(message.clone());
                let response = self.worker.handle_message(message);
                self.send(Event::WorkerResponse(response));
            }
        }
        render
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.send(Event::Char(c));
        }
    }
}
