use std::collections::HashMap;
use std::hash::Hash;

/// Re-sort `items` to follow `wanted`.
///
/// Each id in `wanted` ranks by its first occurrence; ids that match nothing
/// are skipped. Items whose id is absent from `wanted` keep their relative
/// order and go after every ranked item.
pub fn reorder_by_ids<T, K, F>(items: &mut [T], wanted: &[K], key: F)
where
    K: Eq + Hash,
    F: Fn(&T) -> &K,
{
    let mut rank: HashMap<&K, usize> = HashMap::with_capacity(wanted.len());
    for (i, id) in wanted.iter().enumerate() {
        rank.entry(id).or_insert(i);
    }
    // sort_by_key is stable, so unranked items keep their relative order.
    items.sort_by_key(|item| rank.get(key(item)).copied().unwrap_or(usize::MAX));
}
