use forage_core::Category;

use crate::config::CategoryEntry;

/// Ordered set of known categories with display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryCatalog {
    entries: Vec<CategoryEntry>,
}

impl CategoryCatalog {
    pub fn new(mut entries: Vec<CategoryEntry>) -> Self {
        entries.sort_by_key(|e| e.id);
        entries.dedup_by_key(|e| e.id);
        Self { entries }
    }

    pub fn from_config(entries: &[CategoryEntry]) -> Self {
        Self::new(entries.to_vec())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.entries.iter().map(|e| Category(e.id))
    }

    pub fn contains(&self, category: Category) -> bool {
        self.find(category).is_some()
    }

    pub fn name(&self, category: Category) -> Option<&str> {
        self.find(category).map(|e| e.name.as_str())
    }

    pub fn by_name(&self, name: &str) -> Option<Category> {
        self.entries
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .map(|e| Category(e.id))
    }

    fn find(&self, category: Category) -> Option<&CategoryEntry> {
        self.entries
            .binary_search_by_key(&category.0, |e| e.id)
            .ok()
            .map(|idx| &self.entries[idx])
    }
}
