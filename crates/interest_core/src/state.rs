use std::fmt;

use crate::view_model::{AppViewModel, RequestStatus, TagChipView};
use crate::{catalog, SelectionStore, SuggestionResult};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Retrieval was triggered with nothing selected.
    NoSelection,
    /// Transport, authentication, status or response-shape failure.
    RetrievalFailed,
}

impl ErrorKind {
    /// Text shown to the user. Diagnostics stay in the log.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::NoSelection => "Please select at least one interest.",
            ErrorKind::RetrievalFailed => "Failed to fetch suggestions. Please try again.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.user_message())
    }
}

/// Lifecycle of the single retrieval slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Pending {
        request_id: RequestId,
    },
    Succeeded(SuggestionResult),
    Failed(ErrorKind),
}

impl RequestState {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    selection: SelectionStore,
    request: RequestState,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &SelectionStore {
        &self.selection
    }

    pub fn request(&self) -> &RequestState {
        &self.request
    }

    pub fn view(&self) -> AppViewModel {
        let rows = catalog::rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|&tag| TagChipView {
                        tag,
                        selected: self.selection.is_selected(tag),
                    })
                    .collect()
            })
            .collect();

        let (status, suggestions) = match &self.request {
            RequestState::Idle => (RequestStatus::Idle, None),
            RequestState::Pending { .. } => (RequestStatus::Loading, None),
            RequestState::Succeeded(result) => (RequestStatus::Ready, Some(result.clone())),
            RequestState::Failed(kind) => (RequestStatus::Error(kind.user_message()), None),
        };

        AppViewModel {
            rows,
            selected: self.selection.snapshot().to_vec(),
            fetch_enabled: !self.request.is_pending(),
            status,
            suggestions,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn toggle_tag(&mut self, tag: &str) {
        self.selection.toggle(tag);
        self.dirty = true;
    }

    pub(crate) fn clear_selection(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }
        self.selection.clear();
        self.dirty = true;
        true
    }

    /// Moves to `Pending` and hands out the id of the new request.
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.request = RequestState::Pending { request_id };
        self.dirty = true;
        request_id
    }

    pub(crate) fn fail(&mut self, kind: ErrorKind) {
        self.request = RequestState::Failed(kind);
        self.dirty = true;
    }

    /// Settles the pending request. Completions for any other id are stale.
    pub(crate) fn complete_request(
        &mut self,
        request_id: RequestId,
        outcome: Result<SuggestionResult, ErrorKind>,
    ) -> bool {
        match self.request {
            RequestState::Pending { request_id: pending } if pending == request_id => {}
            _ => return false,
        }
        self.request = match outcome {
            Ok(result) => RequestState::Succeeded(result),
            Err(kind) => RequestState::Failed(kind),
        };
        self.dirty = true;
        true
    }
}
