//! Interest core: pure selection/request state machine and view-model helpers.
pub mod catalog;
mod effect;
mod msg;
mod selection;
mod state;
mod suggestion;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use selection::SelectionStore;
pub use state::{AppState, ErrorKind, RequestId, RequestState};
pub use suggestion::{Category, SuggestionItem, SuggestionResult};
pub use update::update;
pub use view_model::{AppViewModel, RequestStatus, TagChipView};
