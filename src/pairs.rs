use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Produces the first `min(cap, src.len())` map entries as a pair
/// `Vec`, in ascending key order.
#[must_use]
pub fn map_to_pairs<K: Clone, V: Clone>(src: &BTreeMap<K, V>, cap: usize) -> Vec<(K, V)> {
    src.iter()
        .take(cap)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Builds a map from the first `min(cap, src.len())` pairs, keyed by
/// each pair's first element.
///
/// Among the considered pairs, a later duplicate key overwrites an
/// earlier one. The cap bounds how many source pairs are considered,
/// not the final map size: pairs past the cap are ignored even when
/// deduplication leaves the map smaller than `cap`.
#[must_use]
pub fn pairs_to_map<K: Clone + Ord, V: Clone>(src: &[(K, V)], cap: usize) -> BTreeMap<K, V> {
    let count = cap.min(src.len());
    let mut result = BTreeMap::new();
    for (key, value) in &src[..count] {
        result.insert(key.clone(), value.clone());
    }
    result
}
