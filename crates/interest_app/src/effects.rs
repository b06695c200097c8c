use std::sync::{mpsc, Arc};

use interest_core::{Effect, ErrorKind, Msg, SuggestionItem, SuggestionResult};
use suggestion_engine::{
    EngineEvent, EngineHandle, EventSink, Suggestion, SuggestionClient, SuggestionError,
    Suggestions,
};
use suggestion_logging::{suggest_debug, suggest_info};

use crate::app::{EffectExecutor, Inbox};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(client: SuggestionClient, inbox_tx: mpsc::Sender<Inbox>) -> Self {
        let sink = Arc::new(InboxSink { tx: inbox_tx });
        Self {
            engine: EngineHandle::new(client, sink),
        }
    }
}

impl EffectExecutor for EffectRunner {
    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchSuggestions { request_id, tags } => {
                    suggest_info!(
                        "FetchSuggestions request_id={} tag_count={} tags={}",
                        request_id,
                        tags.len(),
                        tags.join(", ")
                    );
                    self.engine.fetch(request_id, tags);
                }
            }
        }
    }
}

/// Feeds engine completions back into the main loop as messages.
struct InboxSink {
    tx: mpsc::Sender<Inbox>,
}

impl EventSink for InboxSink {
    fn emit(&self, event: EngineEvent) {
        let EngineEvent::SuggestionsFetched { request_id, result } = event;
        let _ = self.tx.send(Inbox::Msg(Msg::SuggestionsArrived {
            request_id,
            outcome: map_outcome(request_id, result),
        }));
    }
}

/// Collapses engine failures into the user-facing taxonomy. The client has
/// already logged the detail.
fn map_outcome(
    request_id: u64,
    result: Result<Suggestions, SuggestionError>,
) -> Result<SuggestionResult, ErrorKind> {
    match result {
        Ok(suggestions) => Ok(SuggestionResult {
            video_channels: map_items(suggestions.video_channels),
            forums: map_items(suggestions.forums),
        }),
        Err(err) if err.is_retrieval_failure() => {
            suggest_debug!("Request {} settled as a retrieval failure", request_id);
            Err(ErrorKind::RetrievalFailed)
        }
        Err(_) => Err(ErrorKind::NoSelection),
    }
}

fn map_items(items: Vec<Suggestion>) -> Vec<SuggestionItem> {
    items
        .into_iter()
        .map(|item| SuggestionItem {
            name: item.name,
            url: item.url,
        })
        .collect()
}
