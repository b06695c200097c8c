use crate::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run one retrieval for `tags`, reporting back with the same id.
    FetchSuggestions {
        request_id: RequestId,
        tags: Vec<String>,
    },
}
