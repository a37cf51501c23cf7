//! Per-cell happiness and the contentment threshold.
//!
//! Happiness of an occupant is the fraction of same-style occupants among
//! its real neighbors — the in-bounds, non-vacant cells of its Moore
//! neighborhood.

use bt_core::Cell;

use crate::Grid;

/// The 8 Moore-neighborhood offsets.  Off-grid offsets are excluded from
/// consideration; there is no wraparound.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Happiness of the cell at (`row`, `col`), in `[0.0, 1.0]`.
///
/// Vacant cells have happiness `0.0` by definition.  An occupant with no
/// real neighbors — every in-bounds neighbor vacant, which includes a
/// corner islanded by vacancies — is maximally content at `1.0`: no
/// evidence of discontent.
pub fn happiness(grid: &Grid, row: usize, col: usize) -> f64 {
    let Some(style) = grid.get(row, col).style() else {
        return 0.0;
    };

    let dim = grid.dimension() as i32;
    let mut valid = 0u32;
    let mut vacant = 0u32;
    let mut same_style = 0u32;

    for (dr, dc) in NEIGHBOR_OFFSETS {
        let (r, c) = (row as i32 + dr, col as i32 + dc);
        if r < 0 || r >= dim || c < 0 || c >= dim {
            continue;
        }
        valid += 1;
        match grid.get(r as usize, c as usize) {
            Cell::Vacant => vacant += 1,
            Cell::Occupied(s) if s == style => same_style += 1,
            Cell::Occupied(_) => {}
        }
    }

    let real = valid - vacant;
    if real == 0 {
        return 1.0;
    }
    f64::from(same_style) / f64::from(real)
}

/// Contentment check: contented iff `happiness × 100 ≥ strength_percent`;
/// strictly less is discontented.  Vacant cells are never consulted.
#[inline]
pub fn is_contented(happiness: f64, strength_percent: u8) -> bool {
    happiness * 100.0 >= f64::from(strength_percent)
}
