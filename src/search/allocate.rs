//! Fetch-budget allocation across collections.
//!
//! The store cannot paginate across collections, so one page's worth of
//! budget is split proportionally to each collection's share of total
//! matches, and every page request re-fetches enough to cover all pages up
//! to the requested one (no cross-call caching, so arbitrary page jumps
//! must work from a single fetch).

/// One collection's total match count, as reported by a count query.
#[derive(Debug, Clone)]
pub struct CollectionCount {
    pub collection: &'static str,
    pub total_matching: u64,
}

/// How much to actually fetch from one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub collection: &'static str,
    /// This collection's share of one page.
    pub allocated_size: u32,
    /// Items to request: covers every page up to the requested one.
    pub fetch_size: u64,
}

/// Proportional fair-share allocation.
///
/// Collections with no matches are skipped outright. Every collection with
/// matches gets at least one slot and at most a full page, scaled by its
/// share of the total.
pub fn plan(counts: &[CollectionCount], page_size: u32, page: u32) -> Vec<FetchPlan> {
    let total_across_all: u64 = counts.iter().map(|c| c.total_matching).sum();

    counts
        .iter()
        .map(|count| {
            if count.total_matching == 0 || total_across_all == 0 {
                return FetchPlan {
                    collection: count.collection,
                    allocated_size: 0,
                    fetch_size: 0,
                };
            }
            let share =
                (page_size as u64 * count.total_matching).div_ceil(total_across_all);
            let allocated = share.clamp(1, page_size as u64) as u32;
            FetchPlan {
                collection: count.collection,
                allocated_size: allocated,
                fetch_size: (allocated as u64 * page as u64).min(count.total_matching),
            }
        })
        .collect()
}

/// Fallback for category-scoped searches (at most two collections): skip the
/// count phase and over-fetch a full page's worth per collection.
pub fn overfetch_size(page_size: u32, page: u32) -> u64 {
    page_size as u64 * page as u64
}
