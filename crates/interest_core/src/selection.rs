/// Ordered, duplicate-free set of chosen interest tags.
///
/// Order is selection order, not catalog order. Operations are total over any
/// string; catalog membership is the front end's concern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionStore {
    tags: Vec<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `tag` if present, otherwise appends it.
    pub fn toggle(&mut self, tag: &str) {
        match self.tags.iter().position(|existing| existing == tag) {
            Some(index) => {
                self.tags.remove(index);
            }
            None => self.tags.push(tag.to_owned()),
        }
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.tags.iter().any(|existing| existing == tag)
    }

    pub fn snapshot(&self) -> &[String] {
        &self.tags
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
