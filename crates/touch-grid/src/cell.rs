//! Grid cells and their configured roles.

use serde::{Deserialize, Serialize};

/// D-pad arm a button-area cell drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DPadButton {
    Up,
    Down,
    Left,
    Right,
}

/// Per-cell metadata supplied by configuration, in row-major order.
///
/// `color` and `picture` are carried through for the drawing side and never
/// interpreted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CellSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpad: Option<DPadButton>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 3]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl CellSpec {
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn button(label: impl Into<String>, id: u8) -> Self {
        Self {
            label: Some(label.into()),
            button: Some(id),
            ..Self::default()
        }
    }

    pub fn dpad(label: impl Into<String>, arm: DPadButton) -> Self {
        Self {
            label: Some(label.into()),
            dpad: Some(arm),
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: [u8; 3]) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }
}

/// What an edge on this cell does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    /// Press/release a gamepad button by id.
    Button(u8),
    /// Drive one arm of the D-pad.
    DPad(DPadButton),
    /// Contributes one bit to its slider area's presence bitmap.
    Slider,
    /// Label only.
    Inert,
}

#[derive(Debug, Clone)]
pub struct Cell {
    index: usize,
    row: u16,
    column: u16,
    press_count: u32,
    role: CellRole,
    spec: CellSpec,
    dirty: bool,
}

impl Cell {
    pub(crate) fn new(index: usize, row: u16, column: u16, role: CellRole, spec: CellSpec) -> Self {
        Self {
            index,
            row,
            column,
            press_count: 0,
            role,
            spec,
            dirty: false,
        }
    }

    /// Position in the owning area's row-major cell list.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn column(&self) -> u16 {
        self.column
    }

    pub fn press_count(&self) -> u32 {
        self.press_count
    }

    pub fn is_pressed(&self) -> bool {
        self.press_count > 0
    }

    pub fn role(&self) -> CellRole {
        self.role
    }

    pub fn spec(&self) -> &CellSpec {
        &self.spec
    }

    pub fn label(&self) -> Option<&str> {
        self.spec.label.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Count one more contact. `true` only on the `0 -> 1` transition.
    pub fn press_edge(&mut self) -> bool {
        self.press_count = self.press_count.saturating_add(1);
        let edge = self.press_count == 1;
        if edge {
            self.dirty = true;
        }
        edge
    }

    /// Count one contact fewer, never below zero. `true` only on the
    /// `1 -> 0` transition; a release on an idle cell reports nothing.
    pub fn release_edge(&mut self) -> bool {
        if self.press_count == 0 {
            return false;
        }
        self.press_count -= 1;
        let edge = self.press_count == 0;
        if edge {
            self.dirty = true;
        }
        edge
    }

    pub(crate) fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
