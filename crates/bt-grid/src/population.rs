//! Population pool generation and shuffling.
//!
//! The pool is built in three contiguous blocks (vacant, endline, newline)
//! with exact counts, then permuted uniformly before being laid out on the
//! grid.  Generation and shuffling are separate steps so the proportions of
//! the unshuffled pool are checkable on their own.

use bt_core::{Cell, CellCounts, SimRng, Style};

/// Build the flat cell pool for `counts`: `counts.total` cells — the vacant
/// block first, then endline occupants, then newline occupants filling the
/// remainder.
///
/// Counts are clamped to the pool size here even though the CLI validates
/// the percentages upstream; the generator itself must not be able to
/// overrun the pool.
pub fn generate(counts: &CellCounts) -> Vec<Cell> {
    let total = counts.total;
    let vacant = counts.vacant.min(total);
    let endline = counts.endline.min(total - vacant);

    let mut pool = Vec::with_capacity(total);
    pool.resize(vacant, Cell::Vacant);
    pool.resize(vacant + endline, Cell::Occupied(Style::Endline));
    pool.resize(total, Cell::Occupied(Style::Newline));
    pool
}

/// Permute `pool` in place with a forward Fisher–Yates pass: for each `i`,
/// swap with a uniformly drawn `j` in `[i, len)`.  Every permutation is
/// equally likely given a uniform source.
pub fn shuffle(pool: &mut [Cell], rng: &mut SimRng) {
    let len = pool.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        let j = rng.gen_range(i..len);
        pool.swap(i, j);
    }
}
