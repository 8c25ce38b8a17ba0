//! Touch areas partitioned into grids of cells
//!
//! A [`TouchArea`] splits a rectangle into `rows x columns` cells and keeps a
//! saturating press count per cell. The count only reports an edge on its
//! `0 -> 1` and `1 -> 0` transitions, which is what lets several fingers rest
//! on one cell without repeating the action.
//!
//! [`TouchSurface`] orders areas for hit-testing and [`FingerTracker`] maps
//! active touch ids to the cell each one owns.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod area;
pub mod cell;
pub mod geometry;
pub mod surface;
pub mod tracker;

pub use area::{AreaKind, SLIDER_BITMAP_CELLS, TouchArea};
pub use cell::{Cell, CellRole, CellSpec, DPadButton};
pub use geometry::{AreaGeometry, CellRect};
pub use surface::{AreaId, CellRef, TouchSurface};
pub use tracker::{FingerId, FingerTracker, Routed};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Cell metadata count mismatch: expected {expected} (rows x columns), got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("Grid must have at least one row and one column (got {rows}x{columns})")]
    EmptyGrid { rows: u16, columns: u16 },

    #[error("Touch area has no extent: top-left ({left}, {top}), bottom-right ({right}, {bottom})")]
    EmptyExtent {
        left: i32,
        top: i32,
        right: i32,
        bottom: i32,
    },

    #[error("Cell {index} declares both a button and a D-pad role")]
    ConflictingRole { index: usize },
}

pub type GridResult<T> = Result<T, GridError>;
