//! Exercises each converter on literal sample data and prints selected
//! results.

use recollect::{array_to_vec, rows_to_map, rows_to_vec, zip_arrays, zip_arrays_to_map};

fn main() {
    // array to vector
    let a = [12, 23, 34];
    let v = array_to_vec(&a);
    println!("{}", v[1]);

    // two-column array to map
    let b = [["one", "check 1"], ["two", "check 2"]];
    let m = rows_to_map(&b);
    println!("{}", m["two"]);

    let vp = rows_to_vec(&b);
    println!("{} {}", vp[1].0, vp[1].1);

    // parallel arrays to map
    let x = ["one", "two"];
    let y = [1, 2];
    let p = zip_arrays_to_map(&x, &y);
    println!("{}", p["two"]);

    let vpr = zip_arrays(&x, &y);
    println!("{} {}", vpr[1].0, vpr[1].1);
}
