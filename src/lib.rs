#![no_std]

//! `recollect`: conversion helpers between fixed-size arrays, vectors,
//! and sorted maps.
//!
//! Moving data between C-style fixed-capacity buffers and growable
//! in-memory collections is repetitive to write by hand. This crate
//! provides the conversions as plain functions, grouped by
//! source/destination shape:
//!
//! - fixed array ⇄ `Vec` (flat elements, `[key, value]` rows, and
//!   parallel arrays)
//! - fixed array ⇄ `BTreeMap`
//! - pair `Vec` ⇄ `BTreeMap`
//!
//! Every conversion is a single linear pass that copies values; sources
//! are never mutated. When the destination capacity is fixed, excess
//! source elements are silently dropped and the function returns how
//! many elements were written: the output count is always
//! `min(destination capacity, source count)`. Callers that need to
//! detect truncation compare the returned count against the source
//! length.
//!
//! ```
//! use recollect::{array_to_vec, vec_to_array};
//!
//! let src = [12, 23, 34];
//! let v = array_to_vec(&src);
//! assert_eq!(v[1], 23);
//!
//! let mut dst = [0; 2];
//! let count = vec_to_array(&v, &mut dst);
//! assert_eq!(count, 2);
//! assert_eq!(dst, [12, 23]);
//! ```
//!
//! Map conversions iterate in ascending key order and resolve duplicate
//! keys by letting the last write win:
//!
//! ```
//! use recollect::rows_to_map;
//!
//! let rows = [["one", "check 1"], ["two", "check 2"]];
//! let m = rows_to_map(&rows);
//! assert_eq!(m["two"], "check 2");
//! ```
//!
//! The truncating conversions never fail. For callers that require an
//! exact shape instead, the `try_` duals return
//! [`RecollectError::LengthMismatch`] rather than dropping elements:
//!
//! ```
//! use recollect::try_vec_to_array;
//!
//! let exact: [i32; 3] = try_vec_to_array(vec![1, 2, 3]).unwrap();
//! assert_eq!(exact, [1, 2, 3]);
//! assert!(try_vec_to_array::<i32, 3>(vec![1, 2]).is_err());
//! ```
//!
//! This crate is `no_std` compatible and only requires `alloc`. Enable
//! the optional `std` feature in std environments:
//! ```toml
//! [dependencies]
//! recollect = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod array;
mod error;
mod map;
mod order;
mod pairs;

// Re-export public functions and types
pub use array::{
    array_to_vec, rows_to_vec, try_vec_to_array, try_vec_to_rows, unzip_to_arrays, unzip_to_vecs,
    vec_to_array, vec_to_rows, zip_arrays, zip_slices,
};
pub use error::RecollectError;
pub use map::{
    map_to_arrays, map_to_rows, map_to_vecs, rows_to_map, zip_arrays_to_map, zip_slices_to_map,
};
pub use order::by_value_desc;
pub use pairs::{map_to_pairs, pairs_to_map};
