//! Bit-run scanner.
//!
//! The scan walks from bit 31 down to bit 0. A set bit opens a segment; inside
//! a segment up to [`DEBOUNCE_GAP`] consecutive clear bits are absorbed and a
//! set bit resets the gap count. The next clear bit after that closes the
//! segment at its last set bit. A segment still open when the scan runs out is
//! closed the same way.

use serde::{Deserialize, Serialize};

/// Width of the presence bitmap.
pub const SLIDER_BITS: u8 = 32;

/// Clear bits tolerated inside one contact. Tuned to the cell pitch of the
/// slider strip; changing it changes which touches count as one hand.
pub const DEBOUNCE_GAP: u8 = 3;

/// One contact, as bit indices. `start >= end` because the scan runs from the
/// most significant bit down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub start: u8,
    pub end: u8,
}

impl Segment {
    pub fn new(start: u8, end: u8) -> Self {
        Self { start, end }
    }

    /// Number of cells spanned, gaps included.
    pub fn width(&self) -> u8 {
        self.start.saturating_sub(self.end).saturating_add(1)
    }

    /// Twice the centre bit index. Kept doubled so odd-width segments stay
    /// exact in integer arithmetic.
    pub fn doubled_center(&self) -> u16 {
        u16::from(self.start) + u16::from(self.end)
    }

    /// Leftmost cell, counting physical cells from the left edge.
    pub fn first_cell(&self) -> u8 {
        (SLIDER_BITS - 1).saturating_sub(self.start)
    }

    /// Rightmost cell, counting physical cells from the left edge.
    pub fn last_cell(&self) -> u8 {
        (SLIDER_BITS - 1).saturating_sub(self.end)
    }
}

#[derive(Debug, Clone, Copy)]
enum Scan {
    Idle,
    Inside { start: u8, gap: u8 },
}

/// Split `bits` into contacts, ordered left to right.
pub fn find_segments(bits: u32) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut scan = Scan::Idle;

    for bit in (0..SLIDER_BITS).rev() {
        let set = bits & (1u32 << bit) != 0;
        scan = match (scan, set) {
            (Scan::Idle, false) => Scan::Idle,
            (Scan::Idle, true) => Scan::Inside { start: bit, gap: 0 },
            (Scan::Inside { start, .. }, true) => Scan::Inside { start, gap: 0 },
            (Scan::Inside { start, gap }, false) if gap >= DEBOUNCE_GAP => {
                segments.push(Segment::new(start, bit + gap + 1));
                Scan::Idle
            }
            (Scan::Inside { start, gap }, false) => Scan::Inside { start, gap: gap + 1 },
        };
    }

    if let Scan::Inside { start, gap } = scan {
        segments.push(Segment::new(start, gap));
    }
    segments
}
