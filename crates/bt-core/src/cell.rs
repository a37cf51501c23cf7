//! Grid cell values.
//!
//! A cell is either vacant or occupied by an agent holding one of two brace
//! style preferences.  The value domain is closed over exactly these three
//! states: relocation bookkeeping ("moved this cycle", "freed this cycle")
//! lives in per-cycle side buffers inside the cycle engine, never in the
//! cell value, so rendered output can only ever contain `.`, `n`, or `e`.

use std::fmt;

// ── Style ─────────────────────────────────────────────────────────────────────

/// Brace style preference of an occupant.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Style {
    /// Opening brace on its own line.
    Newline,
    /// Opening brace at the end of the statement line.
    Endline,
}

impl Style {
    /// Single-character symbol used by the plain-text renderer.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Style::Newline => 'n',
            Style::Endline => 'e',
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// ── Cell ──────────────────────────────────────────────────────────────────────

/// One grid cell.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    /// Unoccupied; eligible as a relocation target.
    Vacant,
    /// Occupied by an agent with the given style preference.
    Occupied(Style),
}

impl Cell {
    #[inline]
    pub fn is_vacant(self) -> bool {
        matches!(self, Cell::Vacant)
    }

    #[inline]
    pub fn is_occupied(self) -> bool {
        !self.is_vacant()
    }

    /// The occupant's style, or `None` for a vacant cell.
    #[inline]
    pub fn style(self) -> Option<Style> {
        match self {
            Cell::Vacant => None,
            Cell::Occupied(style) => Some(style),
        }
    }

    /// Single-character symbol used by the plain-text renderer.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Vacant => '.',
            Cell::Occupied(style) => style.symbol(),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
