use std::sync::{mpsc, Arc};
use std::thread;

use suggestion_logging::{suggest_error, suggest_info};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;

use crate::{EngineEvent, FailureKind, RequestId, SuggestionClient, SuggestionError};

/// Receives engine events on the worker thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    Fetch {
        request_id: RequestId,
        tags: Vec<String>,
    },
}

/// Owns the background worker that runs retrievals.
///
/// Dropping the handle cancels anything in flight; no event is emitted for a
/// cancelled request. The worker thread drains its tasks before exiting, so
/// without cancellation a dropped handle would still deliver late results.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    sink: Arc<dyn EventSink>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(client: SuggestionClient, sink: Arc<dyn EventSink>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let worker_sink = sink.clone();
        let worker_cancel = cancel.clone();

        thread::spawn(move || run_worker(client, cmd_rx, worker_sink, worker_cancel));

        Self {
            cmd_tx,
            sink,
            cancel,
        }
    }

    pub fn fetch(&self, request_id: RequestId, tags: Vec<String>) {
        if self
            .cmd_tx
            .send(EngineCommand::Fetch { request_id, tags })
            .is_err()
        {
            self.sink.emit(worker_gone(request_id));
        }
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn run_worker(
    client: SuggestionClient,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    sink: Arc<dyn EventSink>,
    cancel: CancellationToken,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            suggest_error!("Could not start engine runtime: {}", err);
            // Settle every request so the caller never stays pending.
            while let Ok(EngineCommand::Fetch { request_id, .. }) = cmd_rx.recv() {
                sink.emit(worker_gone(request_id));
            }
            return;
        }
    };

    let tracker = TaskTracker::new();
    while let Ok(command) = cmd_rx.recv() {
        let client = client.clone();
        let sink = sink.clone();
        let cancel = cancel.clone();
        tracker.spawn_on(
            async move {
                handle_command(&client, command, sink.as_ref(), &cancel).await;
            },
            runtime.handle(),
        );
    }

    tracker.close();
    runtime.block_on(tracker.wait());
}

async fn handle_command(
    client: &SuggestionClient,
    command: EngineCommand,
    sink: &dyn EventSink,
    cancel: &CancellationToken,
) {
    match command {
        EngineCommand::Fetch { request_id, tags } => {
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    suggest_info!("Request {} cancelled by engine shutdown", request_id);
                    return;
                }
                result = client.fetch_suggestions(&tags) => result,
            };
            sink.emit(EngineEvent::SuggestionsFetched { request_id, result });
        }
    }
}

fn worker_gone(request_id: RequestId) -> EngineEvent {
    EngineEvent::SuggestionsFetched {
        request_id,
        result: Err(SuggestionError::new(
            FailureKind::Network,
            "engine worker is not running",
        )),
    }
}
