use recollect::{by_value_desc, map_to_pairs, pairs_to_map, zip_arrays_to_map};

#[test]
fn test_map_to_pairs_ascending_key_order() {
    let m = zip_arrays_to_map(&["b", "a", "c"], &[2, 1, 3]);

    let pairs = map_to_pairs(&m, 10);
    assert_eq!(pairs, vec![("a", 1), ("b", 2), ("c", 3)]);
}

#[test]
fn test_map_to_pairs_cap_below_size() {
    let m = zip_arrays_to_map(&["b", "a", "c"], &[2, 1, 3]);

    let pairs = map_to_pairs(&m, 2);
    assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
}

#[test]
fn test_map_to_pairs_cap_equals_size() {
    let m = zip_arrays_to_map(&["b", "a", "c"], &[2, 1, 3]);

    let pairs = map_to_pairs(&m, 3);
    assert_eq!(pairs.len(), 3);
}

#[test]
fn test_map_to_pairs_zero_cap() {
    let m = zip_arrays_to_map(&["b", "a", "c"], &[2, 1, 3]);

    assert!(map_to_pairs(&m, 0).is_empty());
}

#[test]
fn test_pairs_to_map_last_pair_wins() {
    let pairs = [("a", 1), ("a", 2)];
    let m = pairs_to_map(&pairs, 10);

    assert_eq!(m.len(), 1);
    assert_eq!(m["a"], 2);
}

#[test]
fn test_pairs_to_map_cap_bounds_considered_pairs() {
    // The cap bounds the source prefix, not the final map size: with
    // cap 2, the ("b", 3) pair is ignored even though deduplication
    // leaves only one entry.
    let pairs = [("a", 1), ("a", 2), ("b", 3)];
    let m = pairs_to_map(&pairs, 2);

    assert_eq!(m.len(), 1);
    assert_eq!(m["a"], 2);
    assert!(!m.contains_key("b"));
}

#[test]
fn test_pairs_to_map_round_trip() {
    let m = zip_arrays_to_map(&["x", "y"], &[10, 20]);

    let pairs = map_to_pairs(&m, m.len());
    let m2 = pairs_to_map(&pairs, pairs.len());

    assert_eq!(m, m2);
}

#[test]
fn test_sort_pairs_by_value_desc() {
    let m = zip_arrays_to_map(&["a", "b", "c"], &[1, 3, 2]);

    let mut pairs = map_to_pairs(&m, 3);
    pairs.sort_by(by_value_desc);

    assert_eq!(pairs, vec![("b", 3), ("c", 2), ("a", 1)]);
}
