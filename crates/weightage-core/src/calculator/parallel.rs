//! Conditional parallel iteration for batch impact computation.
//!
//! Uses rayon when the `parallel` feature is enabled and the configuration
//! allows it; otherwise falls back to a sequential iterator. Output order is
//! the input order in both cases.

use crate::types::ImpactConfig;

/// Maps a fallible function over items, stopping at the first error.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
///
/// In sequential mode the error returned is the one from the earliest
/// failing item. In parallel mode any failing item's error may be returned.
#[allow(unused_variables)]
pub fn maybe_parallel_try_map<T, U, E, F>(
    items: &[T],
    config: &ImpactConfig,
    f: F,
) -> Result<Vec<U>, E>
where
    T: Sync,
    U: Send,
    E: Send,
    F: Fn(&T) -> Result<U, E> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
