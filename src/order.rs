use core::cmp::Ordering;

/// Compares two pairs by their second element, descending.
///
/// For use with `sort_by`-style facilities when a pair sequence should
/// be ordered by value instead of by key.
///
/// ```
/// use recollect::by_value_desc;
///
/// let mut pairs = [("a", 1), ("b", 3), ("c", 2)];
/// pairs.sort_by(by_value_desc);
/// assert_eq!(pairs, [("b", 3), ("c", 2), ("a", 1)]);
/// ```
pub fn by_value_desc<K, V: Ord>(x: &(K, V), y: &(K, V)) -> Ordering {
    y.1.cmp(&x.1)
}
