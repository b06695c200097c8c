#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked an interest chip.
    TagToggled(String),
    /// User cleared the whole selection.
    SelectionCleared,
    /// User asked for recommendations.
    FetchRequested,
    /// Engine finished a retrieval.
    SuggestionsArrived {
        request_id: crate::RequestId,
        outcome: Result<crate::SuggestionResult, crate::ErrorKind>,
    },
}
