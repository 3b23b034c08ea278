pub mod render;
mod seq_list;

pub use render::RenderStyle;
pub use seq_list::{Iter, SeqList};

#[cfg(test)]
static SOME_ELEMS: i32 = 10;
#[cfg(test)]
static MANY_ELEMS: i32 = 100_000;

/// Builds a list of `n` elements from both ends, searches it and then empties
/// it again one value at a time. Used by the benchmarks.
pub fn seq_test(n: i32) -> usize {
    let mut list = SeqList::new();

    for elem in 0..n {
        if elem % 2 == 0 {
            list.push_front(elem);
        } else {
            list.push_back(elem);
        }
    }

    let found = (0..n).filter(|elem| list.contains(elem)).count();

    for elem in 0..n {
        list.remove_first(&elem);
    }

    found
}
