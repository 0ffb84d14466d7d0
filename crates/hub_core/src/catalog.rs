//! Catalog records and the filter/sort projection shared by every hub.
//!
//! The projection is a pure function of `(items, view)`: it never mutates the
//! collection, keeps no state between calls and is total over its inputs.

/// Read access to the fields the catalog engine filters and sorts on.
///
/// Games implement every method; collections without a rating or a "new"
/// marker (virtual spaces) rely on the defaults.
pub trait CatalogEntry {
    fn id(&self) -> &str;
    fn display_name(&self) -> &str;
    /// Category identifier, compared verbatim against `CategoryFilter::Only`.
    fn category(&self) -> &str;
    fn popularity(&self) -> u64;

    fn rating(&self) -> f32 {
        0.0
    }

    fn is_featured(&self) -> bool;

    fn is_new(&self) -> bool {
        false
    }
}

/// A browsable game.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogItem {
    pub id: String,
    pub title: String,
    pub thumbnail: String,
    pub category: String,
    pub tags: Vec<String>,
    /// 0.0..=5.0
    pub rating: f32,
    pub plays: u64,
    pub featured: bool,
    pub new: bool,
    pub multiplayer: bool,
    pub description: String,
}

impl CatalogEntry for CatalogItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn display_name(&self) -> &str {
        &self.title
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn popularity(&self) -> u64 {
        self.plays
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn is_featured(&self) -> bool {
        self.featured
    }

    fn is_new(&self) -> bool {
        self.new
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Informational only; never recomputed from the items.
    pub count: u32,
    pub gradient: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` is the sentinel; anything else names a category identifier.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(raw.to_owned())
        }
    }

    pub fn admits(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => id == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(id) => id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Descending popularity.
    #[default]
    Popular,
    /// Descending rating.
    Rating,
    /// Items flagged new first. A partition, not a recency order.
    New,
    /// Filtered items in collection order. Unrecognised keys land here.
    Unsorted,
}

impl SortKey {
    /// Never fails: unknown text maps to [`SortKey::Unsorted`].
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "popular" => Self::Popular,
            "rating" => Self::Rating,
            "new" => Self::New,
            _ => Self::Unsorted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Popular => "popular",
            Self::Rating => "rating",
            Self::New => "new",
            Self::Unsorted => "unsorted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Grid,
    List,
}

impl DisplayMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "grid" => Some(Self::Grid),
            "list" => Some(Self::List),
            _ => None,
        }
    }
}

/// User-chosen parameters for one browsable collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub category: CategoryFilter,
    pub search: String,
    pub sort: SortKey,
    /// Presentational only; ignored by [`derive_visible`].
    pub mode: DisplayMode,
}

impl ViewState {
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }
}

/// Visible, ordered subset of `items` under `view`.
///
/// Category and search filters are conjunctive and run before sorting. Every
/// ordering is a stable sort, so ties keep their collection order.
pub fn derive_visible<'a, T: CatalogEntry>(items: &'a [T], view: &ViewState) -> Vec<&'a T> {
    let needle = view.search.to_lowercase();
    let mut visible: Vec<&T> = items
        .iter()
        .filter(|item| view.category.admits(item.category()))
        .filter(|item| needle.is_empty() || item.display_name().to_lowercase().contains(&needle))
        .collect();

    match view.sort {
        SortKey::Popular => visible.sort_by(|a, b| b.popularity().cmp(&a.popularity())),
        SortKey::Rating => visible.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
        SortKey::New => visible.sort_by_key(|item| !item.is_new()),
        SortKey::Unsorted => {}
    }
    visible
}

/// Featured items drawn from the full collection, in collection order.
pub fn featured<T: CatalogEntry>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| item.is_featured()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_key_parse_is_total() {
        assert_eq!(SortKey::parse("Rating"), SortKey::Rating);
        assert_eq!(SortKey::parse(" new "), SortKey::New);
        assert_eq!(SortKey::parse("recent"), SortKey::Unsorted);
        assert_eq!(SortKey::parse(""), SortKey::Unsorted);
    }

    #[test]
    fn category_filter_parse_recognises_sentinel() {
        assert_eq!(CategoryFilter::parse("ALL"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("racing"),
            CategoryFilter::Only("racing".to_owned())
        );
    }
}
