use serde::{Deserialize, Serialize};

/// Which kind of content a search covers (the `searchType` axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    All,
    Article,
    Av,
}

/// Which top-level content area a search covers (the `cate` axis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    All,
    Course,
    Qa,
    Reference,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Sort expression sent to the record store. The mapping is inverted
    /// relative to what the names suggest (descending requests the bare
    /// field, ascending the `-` prefixed one); deployed clients depend on
    /// it, so it is kept as-is.
    pub fn created_sort(self) -> &'static str {
        match self {
            SortDirection::Descending => "created",
            SortDirection::Ascending => "-created",
        }
    }
}

/// One search invocation's input, immutable for the duration of the call.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Free text matched against record titles.
    pub title: Option<String>,
    /// Free text matched against record bodies.
    pub content: Option<String>,
    pub page: u32,
    pub page_size: u32,
    pub sort: SortDirection,
    pub scope: Scope,
    pub category: Category,
}

impl SearchQuery {
    /// A query with neither text field is a no-op, answered without
    /// contacting the record store.
    pub fn is_blank(&self) -> bool {
        fn blank(s: &Option<String>) -> bool {
            s.as_deref().map_or(true, |s| s.trim().is_empty())
        }
        blank(&self.title) && blank(&self.content)
    }

    /// Title text, falling back to content text. Used by the single-source
    /// paths (media collections, qa) that filter on titles only.
    pub fn title_or_content(&self) -> &str {
        self.title
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .or(self.content.as_deref())
            .unwrap_or("")
    }
}

/// One page of merged search results. Items are opaque records; the
/// aggregation layer never assumes a uniform schema across collections.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    pub items: Vec<serde_json::Value>,
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u32,
}

impl SearchResultPage {
    /// The degraded-but-well-formed shape returned for blank queries and
    /// total failures.
    pub fn empty(current_page: u32) -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            current_page: current_page.max(1),
        }
    }
}

/// `ceil(total_items / page_size)`, 0 when there are no items.
pub fn total_pages(total_items: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size as u64)
}
