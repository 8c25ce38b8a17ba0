//! Finger ownership and edge routing.
//!
//! Each active touch id owns at most one cell. The tracker turns raw
//! down/move/up events into press-count edges on a [`TouchSurface`] and
//! reports what changed as a [`Routed`] outcome; acting on it (gamepad
//! buttons, slider recomputation) is the caller's job.

use crate::surface::{CellRef, TouchSurface};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Touch identifier supplied by the input source.
pub type FingerId = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routed {
    /// Nothing the caller needs to act on.
    Idle,
    /// The cell went from idle to pressed.
    Press(CellRef),
    /// The cell went from pressed to idle.
    Release(CellRef),
    /// A finger slid from one cell to another. `released`/`pressed` report
    /// which of the two edges fired. When `coupled` is set both cells belong
    /// to the same slider area, whose aggregate state should be recomputed
    /// once rather than per edge.
    Relocate {
        from: CellRef,
        to: CellRef,
        released: bool,
        pressed: bool,
        coupled: bool,
    },
}

impl Routed {
    pub fn is_idle(&self) -> bool {
        matches!(self, Routed::Idle)
    }
}

#[derive(Debug, Clone, Default)]
pub struct FingerTracker {
    fingers: HashMap<FingerId, CellRef>,
}

impl FingerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn owner(&self, id: FingerId) -> Option<CellRef> {
        self.fingers.get(&id).copied()
    }

    pub fn active_count(&self) -> usize {
        self.fingers.len()
    }

    /// A new contact. A down outside every area is not tracked; a repeated
    /// down for an id that is already tracked behaves as a move.
    pub fn down(&mut self, surface: &mut TouchSurface, id: FingerId, x: i32, y: i32) -> Routed {
        if self.fingers.contains_key(&id) {
            trace!(id, "down for tracked finger, treating as move");
            return self.move_to(surface, id, x, y);
        }
        let Some(at) = surface.hit_test(x, y) else {
            trace!(id, x, y, "down outside every area");
            return Routed::Idle;
        };

        self.fingers.insert(id, at);
        if surface.press_edge(at) {
            debug!(id, area = at.area.0, cell = at.cell, "press edge");
            Routed::Press(at)
        } else {
            Routed::Idle
        }
    }

    /// End of a contact. Untracked ids are ignored; the position is not
    /// re-hit-tested, the owned cell is released.
    pub fn up(&mut self, surface: &mut TouchSurface, id: FingerId) -> Routed {
        let Some(at) = self.fingers.remove(&id) else {
            trace!(id, "up for untracked finger");
            return Routed::Idle;
        };
        if surface.release_edge(at) {
            debug!(id, area = at.area.0, cell = at.cell, "release edge");
            Routed::Release(at)
        } else {
            Routed::Idle
        }
    }

    /// Contact moved. Moving off every area keeps the current ownership.
    pub fn move_to(&mut self, surface: &mut TouchSurface, id: FingerId, x: i32, y: i32) -> Routed {
        let Some(from) = self.owner(id) else {
            return Routed::Idle;
        };
        let Some(to) = surface.hit_test(x, y) else {
            return Routed::Idle;
        };
        if to == from {
            return Routed::Idle;
        }

        let coupled = from.area == to.area && surface.is_slider(from.area);
        let released = surface.release_edge(from);
        let pressed = surface.press_edge(to);
        self.fingers.insert(id, to);

        debug!(
            id,
            from_area = from.area.0,
            from_cell = from.cell,
            to_area = to.area.0,
            to_cell = to.cell,
            released,
            pressed,
            coupled,
            "relocate"
        );
        Routed::Relocate {
            from,
            to,
            released,
            pressed,
            coupled,
        }
    }

    /// Drop every tracked finger, releasing the cells they own. Returns the
    /// cells whose release edge fired.
    pub fn release_all(&mut self, surface: &mut TouchSurface) -> Vec<CellRef> {
        let mut released: Vec<CellRef> = self
            .fingers
            .drain()
            .filter_map(|(_, at)| surface.release_edge(at).then_some(at))
            .collect();
        released.sort_by_key(|at| (at.area, at.cell));
        released
    }
}
