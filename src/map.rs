use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Builds a map from the `[key, value]` rows of a two-column array.
///
/// Rows are inserted in source order, so when two rows share a key the
/// later row wins. The result holds at most `N` entries.
#[must_use]
pub fn rows_to_map<T: Clone + Ord, const N: usize>(src: &[[T; 2]; N]) -> BTreeMap<T, T> {
    let mut result = BTreeMap::new();
    for row in src {
        result.insert(row[0].clone(), row[1].clone());
    }
    result
}

/// Zips two parallel fixed arrays index-wise into a map.
///
/// Entries are inserted in ascending index order, so a duplicate key
/// keeps the value from the highest source index.
#[must_use]
pub fn zip_arrays_to_map<K: Clone + Ord, V: Clone, const N: usize>(
    keys: &[K; N],
    values: &[V; N],
) -> BTreeMap<K, V> {
    let mut result = BTreeMap::new();
    for (key, value) in keys.iter().zip(values.iter()) {
        result.insert(key.clone(), value.clone());
    }
    result
}

/// Zips two slices index-wise into a map, considering at most `cap`
/// index positions. Same duplicate-key contract as
/// [`zip_arrays_to_map`].
#[must_use]
pub fn zip_slices_to_map<K: Clone + Ord, V: Clone>(
    keys: &[K],
    values: &[V],
    cap: usize,
) -> BTreeMap<K, V> {
    let mut result = BTreeMap::new();
    for (key, value) in keys.iter().zip(values.iter()).take(cap) {
        result.insert(key.clone(), value.clone());
    }
    result
}

/// Copies `min(N, src.len())` map entries into the `[key, value]` rows
/// of a two-column array, in ascending key order.
///
/// Returns the number of rows written; rows at indices `>= count` keep
/// their prior values.
pub fn map_to_rows<T: Clone, const N: usize>(src: &BTreeMap<T, T>, dst: &mut [[T; 2]; N]) -> usize {
    let count = N.min(src.len());
    for (row, (key, value)) in dst.iter_mut().zip(src.iter()) {
        row[0] = key.clone();
        row[1] = value.clone();
    }
    count
}

/// Copies `min(N, src.len())` map entries into two parallel fixed
/// arrays, in ascending key order. Same truncation contract as
/// [`map_to_rows`].
pub fn map_to_arrays<K: Clone, V: Clone, const N: usize>(
    src: &BTreeMap<K, V>,
    keys: &mut [K; N],
    values: &mut [V; N],
) -> usize {
    let count = N.min(src.len());
    for (i, (key, value)) in src.iter().take(count).enumerate() {
        keys[i] = key.clone();
        values[i] = value.clone();
    }
    count
}

/// Copies at most `cap` map entries into two destination `Vec`s, in
/// ascending key order.
///
/// Both destinations are cleared first and hold exactly the returned
/// number of elements afterwards.
pub fn map_to_vecs<K: Clone, V: Clone>(
    src: &BTreeMap<K, V>,
    keys: &mut Vec<K>,
    values: &mut Vec<V>,
    cap: usize,
) -> usize {
    let count = cap.min(src.len());
    keys.clear();
    values.clear();
    for (key, value) in src.iter().take(count) {
        keys.push(key.clone());
        values.push(value.clone());
    }
    count
}
