//! Area geometry and cell hit-testing.
//!
//! An area covers `left ..= left + width` and `top ..= top + height`; both
//! edges are inclusive, matching a top-left/bottom-right corner pair. A point
//! maps to column `(x - left) * columns / width`, clamped to the last column
//! so the far edge belongs to the last cell. Rows work the same way.

use crate::{GridError, GridResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
    pub rows: u16,
    pub columns: u16,
}

/// Inclusive pixel rectangle. Empty when `left > right` or `top > bottom`,
/// which happens when an area has fewer pixels than cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl CellRect {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.left..=self.right).contains(&x) && (self.top..=self.bottom).contains(&y)
    }

    pub fn is_empty(&self) -> bool {
        self.left > self.right || self.top > self.bottom
    }
}

impl AreaGeometry {
    pub fn from_corners(
        top_left: (i32, i32),
        bottom_right: (i32, i32),
        rows: u16,
        columns: u16,
    ) -> GridResult<Self> {
        let (left, top) = top_left;
        let (right, bottom) = bottom_right;
        let empty = || GridError::EmptyExtent {
            left,
            top,
            right,
            bottom,
        };
        let width = u32::try_from(i64::from(right) - i64::from(left))
            .ok()
            .ok_or_else(empty)?;
        let height = u32::try_from(i64::from(bottom) - i64::from(top))
            .ok()
            .ok_or_else(empty)?;

        let geometry = Self {
            left,
            top,
            width,
            height,
            rows,
            columns,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> GridResult<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GridError::EmptyGrid {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.width == 0 || self.height == 0 {
            let (right, bottom) = self.bottom_right();
            return Err(GridError::EmptyExtent {
                left: self.left,
                top: self.top,
                right,
                bottom,
            });
        }
        Ok(())
    }

    pub fn bottom_right(&self) -> (i32, i32) {
        (
            saturate(i64::from(self.left) + i64::from(self.width)),
            saturate(i64::from(self.top) + i64::from(self.height)),
        )
    }

    pub fn cell_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.columns)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        let (right, bottom) = self.bottom_right();
        (self.left..=right).contains(&x) && (self.top..=bottom).contains(&y)
    }

    /// `(row, column)` of the cell under `(x, y)`, or `None` outside the area.
    pub fn locate(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        if !self.contains(x, y) {
            return None;
        }
        let column = bucket(x, self.left, self.width, self.columns)?;
        let row = bucket(y, self.top, self.height, self.rows)?;
        Some((row, column))
    }

    /// Row-major index of `(row, column)`.
    pub fn index_of(&self, row: u16, column: u16) -> usize {
        usize::from(row) * usize::from(self.columns) + usize::from(column)
    }

    pub fn position_of(&self, index: usize) -> Option<(u16, u16)> {
        if index >= self.cell_count() {
            return None;
        }
        let columns = usize::from(self.columns);
        let row = u16::try_from(index / columns).ok()?;
        let column = u16::try_from(index % columns).ok()?;
        Some((row, column))
    }

    /// The pixels [`AreaGeometry::locate`] maps to `(row, column)`.
    pub fn cell_rect(&self, row: u16, column: u16) -> CellRect {
        let (left, right) = span(self.left, self.width, column, self.columns);
        let (top, bottom) = span(self.top, self.height, row, self.rows);
        CellRect {
            left,
            top,
            right,
            bottom,
        }
    }
}

fn bucket(coord: i32, origin: i32, extent: u32, count: u16) -> Option<u16> {
    if extent == 0 || count == 0 {
        return None;
    }
    let offset = i64::from(coord) - i64::from(origin);
    let idx = offset * i64::from(count) / i64::from(extent);
    let last = i64::from(count) - 1;
    u16::try_from(idx.clamp(0, last)).ok()
}

fn span(origin: i32, extent: u32, index: u16, count: u16) -> (i32, i32) {
    let origin = i64::from(origin);
    let extent = i64::from(extent);
    let count = i64::from(count.max(1));
    let index = i64::from(index);

    let start = origin + ceil_div(index * extent, count);
    let end = if index + 1 >= count {
        origin + extent
    } else {
        origin + ceil_div((index + 1) * extent, count) - 1
    };
    (saturate(start), saturate(end))
}

fn ceil_div(num: i64, den: i64) -> i64 {
    (num + den - 1) / den
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}
