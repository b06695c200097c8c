/// A recommended community: display name plus link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub name: String,
    pub url: String,
}

impl SuggestionItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    VideoChannels,
    DiscussionForums,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::VideoChannels => "Video Channels",
            Category::DiscussionForums => "Discussion Forums",
        }
    }
}

/// The two categorized lists returned by a successful retrieval.
///
/// Order is exactly what the service returned; nothing is sorted or
/// de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionResult {
    pub video_channels: Vec<SuggestionItem>,
    pub forums: Vec<SuggestionItem>,
}

impl SuggestionResult {
    pub fn is_empty(&self) -> bool {
        self.video_channels.is_empty() && self.forums.is_empty()
    }

    pub fn items(&self, category: Category) -> &[SuggestionItem] {
        match category {
            Category::VideoChannels => &self.video_channels,
            Category::DiscussionForums => &self.forums,
        }
    }

    /// Non-empty categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, &[SuggestionItem])> + '_ {
        [Category::VideoChannels, Category::DiscussionForums]
            .into_iter()
            .map(|category| (category, self.items(category)))
            .filter(|(_, items)| !items.is_empty())
    }
}
