//! Federated search over the record store's independent collections.
//!
//! The store offers no cross-collection join or global pagination, so one
//! user-facing search fans out to several collections and re-assembles a
//! single correctly paginated page in application code:
//!
//! ```text
//!   query text ── keywords ── filter ──┐
//!                                      ▼
//!   scope × category ── registry ── count phase (page-of-1 per collection)
//!                                      │
//!                                      ▼
//!                        allocation plan (proportional fair share)
//!                                      │
//!                                      ▼
//!                        fetch phase (concurrent, planned sizes)
//!                                      │
//!                                      ▼
//!                        merge in registry order + slice page window
//! ```
//!
//! The qa category short-cuts the whole pipeline: it is a single dedicated
//! collection, so the store's native pagination is used directly.

pub mod allocate;
pub mod filter;
pub mod keywords;
pub mod pipeline;
pub mod registry;

use anyhow::Result;

use crate::models::{total_pages, Category, SearchQuery, SearchResultPage};
use crate::search::allocate::{overfetch_size, plan, FetchPlan};
use crate::search::filter::build_media_filter;
use crate::search::pipeline::{count_all, fetch_all, merge_and_paginate, QueryTarget};
use crate::search::registry::{resolve_collections, QA_MEDIA};
use crate::store::{QueryRequest, RecordStore};

/// Run one search. Always returns a well-formed page: a blank query or a
/// total failure degrades to an empty page rather than an error, so the
/// endpoint never turns a broken collection into a broken search.
pub async fn search<S: RecordStore>(store: &S, query: &SearchQuery) -> SearchResultPage {
    if query.is_blank() {
        return SearchResultPage::empty(1);
    }

    match run(store, query).await {
        Ok(page) => page,
        Err(e) => {
            tracing::error!("Search failed, returning empty page: {e}");
            SearchResultPage::empty(query.page)
        }
    }
}

async fn run<S: RecordStore>(store: &S, query: &SearchQuery) -> Result<SearchResultPage> {
    let sort = query.sort.created_sort();

    match query.category {
        Category::Qa => qa_search(store, query, sort).await,

        // With global visibility across up to four collections, a count
        // phase lets the planner split the page budget fairly.
        Category::All => {
            let targets = targets_for(query);
            let counts = count_all(store, &targets, sort).await;
            let plans = plan(&counts, query.page_size, query.page);
            let results = fetch_all(store, &targets, &plans, sort).await;
            Ok(merge_and_paginate(results, query.page, query.page_size))
        }

        // At most two collections: skip the count phase and over-fetch a
        // full page's worth from each.
        Category::Course | Category::Reference => {
            let targets = targets_for(query);
            let fetch_size = overfetch_size(query.page_size, query.page);
            let plans: Vec<FetchPlan> = targets
                .iter()
                .map(|t| FetchPlan {
                    collection: t.spec.name,
                    allocated_size: query.page_size,
                    fetch_size,
                })
                .collect();
            let results = fetch_all(store, &targets, &plans, sort).await;
            Ok(merge_and_paginate(results, query.page, query.page_size))
        }
    }
}

fn targets_for(query: &SearchQuery) -> Vec<QueryTarget> {
    resolve_collections(query.scope, query.category)
        .into_iter()
        .map(|spec| QueryTarget {
            filter: spec.strategy.compile(query),
            spec,
        })
        .collect()
}

/// Direct single-collection path for the qa category: one query with the
/// store's native pagination, no client-side re-slicing.
async fn qa_search<S: RecordStore>(
    store: &S,
    query: &SearchQuery,
    sort: &str,
) -> Result<SearchResultPage> {
    let filter = build_media_filter(query.title_or_content());
    if filter.is_empty() {
        return Ok(SearchResultPage::empty(query.page));
    }

    let req = QueryRequest {
        filter,
        page: query.page.max(1),
        page_size: query.page_size,
        sort: sort.to_string(),
        fields: None,
    };

    match store.query(QA_MEDIA, &req).await {
        Ok(page) => Ok(SearchResultPage {
            total_pages: total_pages(page.total_items, query.page_size),
            total_items: page.total_items,
            items: page.items,
            current_page: query.page.max(1),
        }),
        Err(e) => {
            tracing::warn!("Q&A query failed: {e}");
            Ok(SearchResultPage::empty(query.page))
        }
    }
}
