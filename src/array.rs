use alloc::vec::Vec;

use crate::error::RecollectError;

/// Copies all elements of a fixed array into a `Vec`, preserving order.
///
/// The result length always equals `N`; the destination has no fixed
/// capacity, so nothing is truncated.
#[must_use]
pub fn array_to_vec<T: Clone, const N: usize>(src: &[T; N]) -> Vec<T> {
    src.to_vec()
}

/// Turns each `[key, value]` row of a two-column array into a pair.
#[must_use]
pub fn rows_to_vec<T: Clone, const N: usize>(src: &[[T; 2]; N]) -> Vec<(T, T)> {
    src.iter()
        .map(|row| (row[0].clone(), row[1].clone()))
        .collect()
}

/// Zips two parallel fixed arrays index-wise into a pair `Vec` of
/// length `N`.
#[must_use]
pub fn zip_arrays<A: Clone, B: Clone, const N: usize>(
    first: &[A; N],
    second: &[B; N],
) -> Vec<(A, B)> {
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect()
}

/// Zips two slices index-wise into at most `cap` pairs.
///
/// The result length is `min(cap, first.len(), second.len())`; excess
/// elements on either side are dropped.
#[must_use]
pub fn zip_slices<A: Clone, B: Clone>(first: &[A], second: &[B], cap: usize) -> Vec<(A, B)> {
    first
        .iter()
        .zip(second.iter())
        .take(cap)
        .map(|(a, b)| (a.clone(), b.clone()))
        .collect()
}

/// Copies `min(N, src.len())` elements into the front of a fixed array.
///
/// Returns the number of elements written. Destination elements at
/// indices `>= count` keep their prior values.
pub fn vec_to_array<T: Clone, const N: usize>(src: &[T], dst: &mut [T; N]) -> usize {
    let count = N.min(src.len());
    dst[..count].clone_from_slice(&src[..count]);
    count
}

/// Splits `min(N, src.len())` pairs into the `[key, value]` rows of a
/// two-column array. Same truncation contract as [`vec_to_array`].
pub fn vec_to_rows<T: Clone, const N: usize>(src: &[(T, T)], dst: &mut [[T; 2]; N]) -> usize {
    let count = N.min(src.len());
    for (row, (first, second)) in dst.iter_mut().zip(src) {
        row[0] = first.clone();
        row[1] = second.clone();
    }
    count
}

/// Splits `min(N, src.len())` pairs across two parallel fixed arrays.
/// Same truncation contract as [`vec_to_array`].
pub fn unzip_to_arrays<A: Clone, B: Clone, const N: usize>(
    src: &[(A, B)],
    first: &mut [A; N],
    second: &mut [B; N],
) -> usize {
    let count = N.min(src.len());
    for (i, (a, b)) in src[..count].iter().enumerate() {
        first[i] = a.clone();
        second[i] = b.clone();
    }
    count
}

/// Splits at most `cap` pairs into two destination `Vec`s.
///
/// Both destinations are cleared first and hold exactly the returned
/// number of elements afterwards.
pub fn unzip_to_vecs<A: Clone, B: Clone>(
    src: &[(A, B)],
    first: &mut Vec<A>,
    second: &mut Vec<B>,
    cap: usize,
) -> usize {
    let count = cap.min(src.len());
    first.clear();
    second.clear();
    first.extend(src[..count].iter().map(|(a, _)| a.clone()));
    second.extend(src[..count].iter().map(|(_, b)| b.clone()));
    count
}

/// Converts a `Vec` into a fixed array of exactly its length.
///
/// The strict dual of [`vec_to_array`]: instead of truncating, it fails
/// unless `src.len() == N`. Elements are moved, not cloned.
///
/// # Errors
///
/// Returns [`RecollectError::LengthMismatch`] if the lengths differ.
pub fn try_vec_to_array<T, const N: usize>(src: Vec<T>) -> Result<[T; N], RecollectError> {
    src.try_into()
        .map_err(|v: Vec<T>| RecollectError::LengthMismatch {
            expected: N,
            actual: v.len(),
        })
}

/// Converts a pair `Vec` into a two-column array of exactly its length.
///
/// # Errors
///
/// Returns [`RecollectError::LengthMismatch`] if `src.len() != N`.
pub fn try_vec_to_rows<T, const N: usize>(src: Vec<(T, T)>) -> Result<[[T; 2]; N], RecollectError> {
    let rows: Vec<[T; 2]> = src.into_iter().map(|(first, second)| [first, second]).collect();
    try_vec_to_array(rows)
}
