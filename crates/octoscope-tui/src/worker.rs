//! Background worker running profile lookups off the UI thread.

use crate::state::Message;
use octoscope_github::{GitHubClient, LookupError, Profile};
use std::sync::mpsc::{Receiver, Sender};
use std::time::Duration;

pub enum WorkerCommand {
    Lookup { token: u64, username: String },
    Quit,
}

pub enum WorkerEvent {
    LookupFinished {
        token: u64,
        outcome: Result<Profile, LookupError>,
    },
}

impl From<WorkerEvent> for Message {
    fn from(event: WorkerEvent) -> Self {
        match event {
            WorkerEvent::LookupFinished { token, outcome } => {
                Message::LookupFinished { token, outcome }
            }
        }
    }
}

/// Start the worker thread.
///
/// Each lookup runs as its own task, so a second search does not wait for the
/// first; results come back tagged with their token in completion order.
pub fn start_worker(
    client: GitHubClient,
    cmd_rx: Receiver<WorkerCommand>,
    evt_tx: Sender<WorkerEvent>,
) -> std::io::Result<std::thread::JoinHandle<()>> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("octoscope-lookup")
        .enable_all()
        .build()?;

    std::thread::Builder::new()
        .name("octoscope-worker".to_string())
        .spawn(move || worker_loop(runtime, client, cmd_rx, evt_tx))
}

fn worker_loop(
    runtime: tokio::runtime::Runtime,
    client: GitHubClient,
    cmd_rx: Receiver<WorkerCommand>,
    evt_tx: Sender<WorkerEvent>,
) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            WorkerCommand::Lookup { token, username } => {
                let client = client.clone();
                let evt_tx = evt_tx.clone();
                runtime.spawn(async move {
                    let outcome = client.lookup(&username).await;
                    // The UI may already be gone on shutdown.
                    let _ = evt_tx.send(WorkerEvent::LookupFinished { token, outcome });
                });
            }
            WorkerCommand::Quit => break,
        }
    }

    runtime.shutdown_timeout(Duration::from_millis(250));
    tracing::debug!("Worker stopped");
}
