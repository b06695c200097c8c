use crate::{AppState, Effect, ErrorKind, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::TagToggled(tag) => {
            state.toggle_tag(&tag);
            Vec::new()
        }
        Msg::SelectionCleared => {
            state.clear_selection();
            Vec::new()
        }
        Msg::FetchRequested => {
            // Single flight: the trigger is inert while a request is pending.
            if state.request().is_pending() {
                return (state, Vec::new());
            }
            if state.selection().is_empty() {
                state.fail(ErrorKind::NoSelection);
                return (state, Vec::new());
            }
            let tags = state.selection().snapshot().to_vec();
            let request_id = state.begin_request();
            vec![Effect::FetchSuggestions { request_id, tags }]
        }
        Msg::SuggestionsArrived {
            request_id,
            outcome,
        } => {
            state.complete_request(request_id, outcome);
            Vec::new()
        }
    };

    (state, effects)
}
