use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::models::{Category, Scope, SearchQuery, SearchResultPage, SortDirection};
use crate::state::AppState;

/// GET /search query parameters. Everything is optional and arrives as a
/// string; malformed values fall back to their defaults so the endpoint
/// stays total for hand-edited URLs.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    pub title: Option<String>,
    /// Free text matched against record bodies.
    pub keywords: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
    /// "asc" | "desc"
    pub sort: Option<String>,
    /// "all" | "article" | "av"
    #[serde(rename = "searchType")]
    pub search_type: Option<String>,
    /// "all" | "course" | "qa" | "reference"
    pub cate: Option<String>,
}

impl SearchParams {
    pub fn into_query(self) -> SearchQuery {
        SearchQuery {
            title: self.title,
            content: self.keywords,
            page: parse_positive(self.page.as_deref(), 1),
            page_size: parse_positive(self.page_size.as_deref(), 10),
            sort: match self.sort.as_deref() {
                Some("asc") => SortDirection::Ascending,
                _ => SortDirection::Descending,
            },
            scope: match self.search_type.as_deref() {
                Some("article") => Scope::Article,
                Some("av") => Scope::Av,
                _ => Scope::All,
            },
            category: match self.cate.as_deref() {
                Some("course") => Category::Course,
                Some("qa") => Category::Qa,
                Some("reference") => Category::Reference,
                _ => Category::All,
            },
        }
    }
}

fn parse_positive(value: Option<&str>, default: u32) -> u32 {
    value
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|&v| v >= 1)
        .unwrap_or(default)
}

/// GET /search - run one aggregated search across the library collections.
///
/// The orchestrator degrades failures to an empty page itself; the 500 here
/// is the last-resort net for a panic inside the pipeline.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResultPage>, (StatusCode, Json<serde_json::Value>)> {
    let query = params.into_query();
    let store = state.store.clone();

    let page = tokio::spawn(async move { crate::search::search(&*store, &query).await })
        .await
        .map_err(|e| {
            tracing::error!("Search task failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Search failed" })),
            )
        })?;

    Ok(Json(page))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> SearchParams {
        SearchParams {
            title: None,
            keywords: None,
            page: None,
            page_size: None,
            sort: None,
            search_type: None,
            cate: None,
        }
    }

    #[test]
    fn test_defaults() {
        let q = params().into_query();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 10);
        assert_eq!(q.sort, SortDirection::Descending);
        assert_eq!(q.scope, Scope::All);
        assert_eq!(q.category, Category::All);
    }

    #[test]
    fn test_explicit_values() {
        let q = SearchParams {
            title: Some("zazen".to_string()),
            keywords: Some("breath".to_string()),
            page: Some("3".to_string()),
            page_size: Some("25".to_string()),
            sort: Some("asc".to_string()),
            search_type: Some("av".to_string()),
            cate: Some("course".to_string()),
        }
        .into_query();
        assert_eq!(q.title.as_deref(), Some("zazen"));
        assert_eq!(q.content.as_deref(), Some("breath"));
        assert_eq!(q.page, 3);
        assert_eq!(q.page_size, 25);
        assert_eq!(q.sort, SortDirection::Ascending);
        assert_eq!(q.scope, Scope::Av);
        assert_eq!(q.category, Category::Course);
    }

    #[test]
    fn test_malformed_values_fall_back_to_defaults() {
        let q = SearchParams {
            page: Some("banana".to_string()),
            page_size: Some("0".to_string()),
            sort: Some("sideways".to_string()),
            search_type: Some("hologram".to_string()),
            cate: Some("".to_string()),
            ..params()
        }
        .into_query();
        assert_eq!(q.page, 1);
        assert_eq!(q.page_size, 10);
        assert_eq!(q.sort, SortDirection::Descending);
        assert_eq!(q.scope, Scope::All);
        assert_eq!(q.category, Category::All);
    }
}
