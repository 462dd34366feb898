//! # library-search
//!
//! Federated search aggregation service for a meditation course library.
//! The library's records live in a remote store split across independent
//! collections (articles, reference books, course and reference media,
//! Q&A recordings) with no cross-collection join or global pagination, so
//! this service queries the collections itself, splits one page's fetch
//! budget proportionally across them, merges the results and re-slices the
//! requested page in application code.
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server and the record store
//! - [`models`] - Shared data types: `SearchQuery`, `SearchResultPage`, the scope/category axes
//! - [`store`] - The remote record-store collaborator: `RecordStore` trait + HTTP client
//! - [`search::keywords`] - Free-text tokenization
//! - [`search::filter`] - Keyword-to-filter-expression compilation
//! - [`search::registry`] - Static scope × category → collections mapping
//! - [`search::allocate`] - Proportional fetch-budget allocation
//! - [`search::pipeline`] - Scatter-gather count/fetch phases and merge + paginate
//! - [`search`] - The orchestrator dispatching the four category strategies
//! - [`api`] - Axum HTTP handler for GET /search
//! - [`state`] - Shared application state holding config and the store client

pub mod api;
pub mod config;
pub mod models;
pub mod search;
pub mod state;
pub mod store;
