//! Count, fetch and merge phases of an aggregated search.
//!
//! Both remote phases are scatter-gather: every per-collection query runs
//! concurrently and the phase joins on all of them. Results are carried with
//! their collection name, so out-of-order network replies can never be
//! misattributed. A failing collection degrades to zero/empty with a warning
//! instead of failing the search.

use futures_util::future::join_all;

use crate::models::{total_pages, SearchResultPage};
use crate::search::allocate::{CollectionCount, FetchPlan};
use crate::search::registry::CollectionSpec;
use crate::store::{QueryRequest, RecordStore};

/// A collection plus its compiled filter, the unit both phases operate on.
#[derive(Debug, Clone)]
pub struct QueryTarget {
    pub spec: CollectionSpec,
    pub filter: String,
}

/// One collection's contribution to the merge.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub collection: &'static str,
    pub items: Vec<serde_json::Value>,
    pub total_items: u64,
}

/// Ask every collection how many records match, one page-of-one query each.
///
/// Targets with an empty filter never reach the store: an unconstrained
/// filter would match the whole collection, so a blank filter counts as
/// zero matches.
pub async fn count_all<S: RecordStore>(
    store: &S,
    targets: &[QueryTarget],
    sort: &str,
) -> Vec<CollectionCount> {
    let futures = targets.iter().map(|target| async move {
        if target.filter.is_empty() {
            return CollectionCount {
                collection: target.spec.name,
                total_matching: 0,
            };
        }
        let req = QueryRequest {
            filter: target.filter.clone(),
            page: 1,
            page_size: 1,
            sort: sort.to_string(),
            fields: Some("id".to_string()),
        };
        let total = match store.query(target.spec.name, &req).await {
            Ok(page) => page.total_items,
            Err(e) => {
                tracing::warn!("Count query failed for '{}': {e}", target.spec.name);
                0
            }
        };
        CollectionCount {
            collection: target.spec.name,
            total_matching: total,
        }
    });

    join_all(futures).await
}

/// Fetch the planned number of items from every collection. Plans are
/// matched to targets by collection name; zero-size plans and empty filters
/// contribute an empty result without issuing a query.
pub async fn fetch_all<S: RecordStore>(
    store: &S,
    targets: &[QueryTarget],
    plans: &[FetchPlan],
    sort: &str,
) -> Vec<FetchResult> {
    let futures = targets.iter().map(|target| async move {
        let empty = FetchResult {
            collection: target.spec.name,
            items: Vec::new(),
            total_items: 0,
        };

        let Some(plan) = plans.iter().find(|p| p.collection == target.spec.name) else {
            return empty;
        };
        if plan.fetch_size == 0 || target.filter.is_empty() {
            return empty;
        }

        let req = QueryRequest {
            filter: target.filter.clone(),
            page: 1,
            page_size: plan.fetch_size.min(u32::MAX as u64) as u32,
            sort: sort.to_string(),
            fields: None,
        };
        match store.query(target.spec.name, &req).await {
            Ok(page) => FetchResult {
                collection: target.spec.name,
                items: page.items,
                total_items: page.total_items,
            },
            Err(e) => {
                tracing::warn!("Fetch query failed for '{}': {e}", target.spec.name);
                empty
            }
        }
    });

    join_all(futures).await
}

/// Concatenate per-collection results in registry order and slice out the
/// requested page window.
///
/// `total_items` sums the store-reported totals, not the fetched items, so
/// the page count reflects the whole corpus even though only a window was
/// fetched. If a collection under-delivered, the slice is simply shorter
/// than a full page.
pub fn merge_and_paginate(
    results: Vec<FetchResult>,
    page: u32,
    page_size: u32,
) -> SearchResultPage {
    let total_items: u64 = results.iter().map(|r| r.total_items).sum();

    let concatenated: Vec<serde_json::Value> =
        results.into_iter().flat_map(|r| r.items).collect();

    let start = (page.max(1) as usize - 1).saturating_mul(page_size as usize);
    let items: Vec<serde_json::Value> = concatenated
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .collect();

    SearchResultPage {
        items,
        total_items,
        total_pages: total_pages(total_items, page_size),
        current_page: page.max(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result(name: &'static str, n: usize, total: u64) -> FetchResult {
        FetchResult {
            collection: name,
            items: (0..n).map(|i| json!({ "src": name, "i": i })).collect(),
            total_items: total,
        }
    }

    #[test]
    fn test_merge_preserves_registry_order() {
        let page = merge_and_paginate(vec![result("a", 2, 2), result("b", 2, 2)], 1, 10);
        let sources: Vec<&str> = page
            .items
            .iter()
            .map(|v| v["src"].as_str().unwrap())
            .collect();
        assert_eq!(sources, vec!["a", "a", "b", "b"]);
    }

    #[test]
    fn test_totals_come_from_reported_counts() {
        // Only 4 items fetched but the stores report 30 matches overall.
        let page = merge_and_paginate(vec![result("a", 2, 20), result("b", 2, 10)], 1, 10);
        assert_eq!(page.total_items, 30);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_page_window_slicing() {
        let page = merge_and_paginate(vec![result("a", 12, 12)], 2, 5);
        assert_eq!(page.items.len(), 5);
        assert_eq!(page.items[0]["i"], 5);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn test_short_final_page() {
        let page = merge_and_paginate(vec![result("a", 12, 12)], 3, 5);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_slice_past_end_is_empty_not_error() {
        let page = merge_and_paginate(vec![result("a", 3, 3)], 5, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 3);
    }

    #[test]
    fn test_empty_results() {
        let page = merge_and_paginate(Vec::new(), 1, 10);
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
    }
}
