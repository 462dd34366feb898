//! Static mapping from search scope and category to physical collections.
//!
//! The record store splits the library across independent collections:
//! article-like ones (`articles`, `reference_books`) searched with the
//! article filter, and media-like ones (`course_media`, `reference_media`)
//! searched title-only. The `qa_media` collection never goes through the
//! registry; the qa category is a dedicated single-collection path.

use crate::models::{Category, Scope, SearchQuery};
use crate::search::filter::{build_article_filter, build_media_filter};

/// Course articles.
pub const ARTICLES: &str = "articles";
/// Reference book chapters.
pub const REFERENCE_BOOKS: &str = "reference_books";
/// Course audio/video recordings.
pub const COURSE_MEDIA: &str = "course_media";
/// Reference audio/video recordings.
pub const REFERENCE_MEDIA: &str = "reference_media";
/// Question-and-answer recordings (dedicated path, not in the registry).
pub const QA_MEDIA: &str = "qa_media";

/// How a collection's filter is compiled from the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStrategy {
    /// Title/content dispatch over title, fulltext, introtext and summary.
    Article,
    /// Tokenized title-only matching, fed from title falling back to content.
    MediaTitle,
}

impl FilterStrategy {
    pub fn compile(self, query: &SearchQuery) -> String {
        match self {
            FilterStrategy::Article => {
                build_article_filter(query.title.as_deref(), query.content.as_deref())
            }
            FilterStrategy::MediaTitle => build_media_filter(query.title_or_content()),
        }
    }
}

/// One queryable collection plus its filter-compilation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionSpec {
    pub name: &'static str,
    pub strategy: FilterStrategy,
}

const ARTICLE_SPECS: [CollectionSpec; 2] = [
    CollectionSpec {
        name: ARTICLES,
        strategy: FilterStrategy::Article,
    },
    CollectionSpec {
        name: REFERENCE_BOOKS,
        strategy: FilterStrategy::Article,
    },
];

const MEDIA_SPECS: [CollectionSpec; 2] = [
    CollectionSpec {
        name: COURSE_MEDIA,
        strategy: FilterStrategy::MediaTitle,
    },
    CollectionSpec {
        name: REFERENCE_MEDIA,
        strategy: FilterStrategy::MediaTitle,
    },
];

/// Resolve the ordered list of collections to query. The returned order is
/// the merge order: article-like collections always precede media-like ones.
///
/// `Category::Qa` resolves to nothing here; the orchestrator handles qa as a
/// direct single-collection query.
pub fn resolve_collections(scope: Scope, category: Category) -> Vec<CollectionSpec> {
    match category {
        Category::Qa => Vec::new(),
        Category::All => match scope {
            Scope::Article => ARTICLE_SPECS.to_vec(),
            Scope::Av => MEDIA_SPECS.to_vec(),
            Scope::All => {
                let mut specs = ARTICLE_SPECS.to_vec();
                specs.extend_from_slice(&MEDIA_SPECS);
                specs
            }
        },
        Category::Course => scoped(scope, ARTICLE_SPECS[0], MEDIA_SPECS[0]),
        Category::Reference => scoped(scope, ARTICLE_SPECS[1], MEDIA_SPECS[1]),
    }
}

fn scoped(scope: Scope, article: CollectionSpec, media: CollectionSpec) -> Vec<CollectionSpec> {
    match scope {
        Scope::Article => vec![article],
        Scope::Av => vec![media],
        Scope::All => vec![article, media],
    }
}
