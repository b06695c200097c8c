use crate::SuggestionResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagChipView {
    pub tag: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// User-facing message only.
    Error(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Catalog chips grouped by display row.
    pub rows: Vec<Vec<TagChipView>>,
    /// Selection in selection order, including any non-catalog tags.
    pub selected: Vec<String>,
    /// False while a retrieval is in flight.
    pub fetch_enabled: bool,
    pub status: RequestStatus,
    pub suggestions: Option<SuggestionResult>,
    pub dirty: bool,
}
