//! Compiles keyword tokens into record-store filter expressions.
//!
//! An empty compiled filter means "no constraint" and must short-circuit the
//! corresponding fetch entirely. Sending an unconstrained filter to the store
//! would scan a whole collection, so callers treat `""` as zero results
//! instead.

use crate::search::keywords::get_keywords;

/// Escape a keyword for interpolation into a quoted filter literal. User
/// input must not be able to terminate the quote and rewrite the expression.
fn escape(kw: &str) -> String {
    kw.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Build a conjunctive filter over `keywords`: every keyword must match,
/// each possibly in a different field.
pub fn build_filter(keywords: &[String], title_only: bool) -> String {
    let clauses: Vec<String> = keywords
        .iter()
        .map(|kw| {
            let kw = escape(kw);
            if title_only {
                format!("title ~ \"{kw}\"")
            } else {
                format!("(fulltext ~ \"{kw}\" || introtext ~ \"{kw}\" || summary ~ \"{kw}\")")
            }
        })
        .collect();
    clauses.join(" && ")
}

/// Title-only filter over tokenized free text, used for media collections.
pub fn build_media_filter(text: &str) -> String {
    build_filter(&get_keywords(text), true)
}

/// Filter for article-like collections, dispatching on which text fields
/// the query provided.
pub fn build_article_filter(title: Option<&str>, content: Option<&str>) -> String {
    let title = title.filter(|s| !s.trim().is_empty());
    let content = content.filter(|s| !s.trim().is_empty());
    match (title, content) {
        // Both given: one combined disjunction over the raw strings. The
        // texts are not tokenized here, matching the single-clause shape
        // the site's clients expect for combined queries.
        (Some(t), Some(c)) => {
            let t = escape(t);
            let c = escape(c);
            format!(
                "(title ~ \"{t}\" || fulltext ~ \"{c}\" || introtext ~ \"{c}\" || summary ~ \"{c}\")"
            )
        }
        (Some(t), None) => build_filter(&get_keywords(t), true),
        (None, Some(c)) => build_filter(&get_keywords(c), false),
        (None, None) => String::new(),
    }
}
