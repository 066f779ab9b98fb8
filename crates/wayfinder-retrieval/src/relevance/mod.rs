//! Relevance filtering with an all-items fallback.
//!
//! Filters never return an empty list when the entry has items to show:
//! when nothing matches, everything is shown instead.

mod examples;
mod solutions;

pub use examples::select_examples;
pub use solutions::select_solutions;

/// Stable filter that falls back to every item when none are kept.
fn filter_or_all<'a, T, F>(items: &'a [T], keep: F) -> Vec<&'a T>
where
    F: Fn(&T) -> bool,
{
    let kept: Vec<&T> = items.iter().filter(|item| keep(*item)).collect();
    if kept.is_empty() {
        items.iter().collect()
    } else {
        kept
    }
}
