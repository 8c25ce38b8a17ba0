//! A rectangular touch area split into a grid of cells.

use crate::cell::{Cell, CellRole, CellSpec};
use crate::geometry::{AreaGeometry, CellRect};
use crate::{GridError, GridResult};
use serde::{Deserialize, Serialize};

/// Cells beyond this many do not appear in [`TouchArea::presence_bits`].
pub const SLIDER_BITMAP_CELLS: usize = 32;

/// Decides how a finger sliding between two cells is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaKind {
    /// Independent buttons: leaving one cell and entering another are
    /// separate release and press actions.
    #[default]
    Buttons,
    /// Linear slider: cells feed one aggregate bitmap, so moving between two
    /// slider cells is one coupled update.
    Slider,
}

#[derive(Debug, Clone)]
pub struct TouchArea {
    name: String,
    kind: AreaKind,
    geometry: AreaGeometry,
    cells: Vec<Cell>,
}

impl TouchArea {
    /// Build the grid. `specs` is row-major and must hold exactly
    /// `rows * columns` entries.
    pub fn new(
        name: impl Into<String>,
        kind: AreaKind,
        geometry: AreaGeometry,
        specs: Vec<CellSpec>,
    ) -> GridResult<Self> {
        geometry.validate()?;
        let expected = geometry.cell_count();
        if specs.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: specs.len(),
            });
        }

        let mut cells = Vec::with_capacity(expected);
        for (index, spec) in specs.into_iter().enumerate() {
            let (row, column) = geometry
                .position_of(index)
                .ok_or(GridError::CellCountMismatch {
                    expected,
                    actual: index + 1,
                })?;
            let role = role_for(kind, index, &spec)?;
            cells.push(Cell::new(index, row, column, role, spec));
        }

        Ok(Self {
            name: name.into(),
            kind,
            geometry,
            cells,
        })
    }

    /// Area with unlabeled cells, for slider strips and tests.
    pub fn blank(name: impl Into<String>, kind: AreaKind, geometry: AreaGeometry) -> GridResult<Self> {
        let specs = vec![CellSpec::default(); geometry.cell_count()];
        Self::new(name, kind, geometry, specs)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AreaKind {
        self.kind
    }

    pub fn is_slider(&self) -> bool {
        self.kind == AreaKind::Slider
    }

    pub fn geometry(&self) -> &AreaGeometry {
        &self.geometry
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Index of the cell under `(x, y)`, or `None` outside the area.
    pub fn hit_test(&self, x: i32, y: i32) -> Option<usize> {
        let (row, column) = self.geometry.locate(x, y)?;
        let index = self.geometry.index_of(row, column);
        (index < self.cells.len()).then_some(index)
    }

    pub fn cell_rect(&self, index: usize) -> Option<CellRect> {
        let (row, column) = self.geometry.position_of(index)?;
        Some(self.geometry.cell_rect(row, column))
    }

    /// See [`Cell::press_edge`]. Unknown indices report no edge.
    pub fn press_edge(&mut self, index: usize) -> bool {
        self.cells.get_mut(index).is_some_and(Cell::press_edge)
    }

    /// See [`Cell::release_edge`]. Unknown indices report no edge.
    pub fn release_edge(&mut self, index: usize) -> bool {
        self.cells.get_mut(index).is_some_and(Cell::release_edge)
    }

    /// One bit per cell: cell 0 is bit 31, cell 31 is bit 0. A bit is set
    /// while at least one finger rests on the cell.
    pub fn presence_bits(&self) -> u32 {
        self.cells
            .iter()
            .take(SLIDER_BITMAP_CELLS)
            .zip((0..u32::BITS).rev())
            .filter(|(cell, _)| cell.is_pressed())
            .fold(0u32, |bits, (_, bit)| bits | (1 << bit))
    }

    /// Indices of cells whose pressed state changed since the last call.
    pub fn take_dirty(&mut self) -> Vec<usize> {
        self.cells
            .iter_mut()
            .filter_map(|cell| cell.take_dirty().then_some(cell.index()))
            .collect()
    }

    pub fn pressed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_pressed()).count()
    }
}

fn role_for(kind: AreaKind, index: usize, spec: &CellSpec) -> GridResult<CellRole> {
    if kind == AreaKind::Slider {
        return Ok(CellRole::Slider);
    }
    match (spec.button, spec.dpad) {
        (Some(_), Some(_)) => Err(GridError::ConflictingRole { index }),
        (Some(id), None) => Ok(CellRole::Button(id)),
        (None, Some(arm)) => Ok(CellRole::DPad(arm)),
        (None, None) => Ok(CellRole::Inert),
    }
}
