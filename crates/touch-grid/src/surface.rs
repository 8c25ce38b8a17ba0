//! Ordered collection of touch areas sharing one coordinate space.

use crate::area::TouchArea;
use crate::cell::Cell;

/// Position of an area in its [`TouchSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(pub usize);

/// Non-owning reference to one cell of one area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRef {
    pub area: AreaId,
    pub cell: usize,
}

impl CellRef {
    pub fn new(area: AreaId, cell: usize) -> Self {
        Self { area, cell }
    }
}

/// Areas are hit-tested in insertion order; the first area containing a point
/// wins, so overlapping areas resolve by priority.
#[derive(Debug, Clone, Default)]
pub struct TouchSurface {
    areas: Vec<TouchArea>,
}

impl TouchSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an area at the lowest priority so far.
    pub fn push(&mut self, area: TouchArea) -> AreaId {
        self.areas.push(area);
        AreaId(self.areas.len().saturating_sub(1))
    }

    pub fn areas(&self) -> &[TouchArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn area(&self, id: AreaId) -> Option<&TouchArea> {
        self.areas.get(id.0)
    }

    pub fn area_mut(&mut self, id: AreaId) -> Option<&mut TouchArea> {
        self.areas.get_mut(id.0)
    }

    pub fn find(&self, name: &str) -> Option<AreaId> {
        self.areas
            .iter()
            .position(|area| area.name() == name)
            .map(AreaId)
    }

    /// The first slider-class area, if any.
    pub fn slider(&self) -> Option<AreaId> {
        self.areas.iter().position(TouchArea::is_slider).map(AreaId)
    }

    pub fn hit_test(&self, x: i32, y: i32) -> Option<CellRef> {
        self.areas.iter().enumerate().find_map(|(idx, area)| {
            area.hit_test(x, y).map(|cell| CellRef::new(AreaId(idx), cell))
        })
    }

    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        self.area(at.area)?.cell(at.cell)
    }

    pub fn is_slider(&self, id: AreaId) -> bool {
        self.area(id).is_some_and(TouchArea::is_slider)
    }

    pub fn press_edge(&mut self, at: CellRef) -> bool {
        self.area_mut(at.area)
            .is_some_and(|area| area.press_edge(at.cell))
    }

    pub fn release_edge(&mut self, at: CellRef) -> bool {
        self.area_mut(at.area)
            .is_some_and(|area| area.release_edge(at.cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::AreaKind;
    use crate::geometry::AreaGeometry;

    fn surface() -> Result<TouchSurface, crate::GridError> {
        let mut surface = TouchSurface::new();
        surface.push(TouchArea::blank(
            "top",
            AreaKind::Buttons,
            AreaGeometry::from_corners((0, 0), (99, 9), 1, 10)?,
        )?);
        surface.push(TouchArea::blank(
            "slider",
            AreaKind::Slider,
            AreaGeometry::from_corners((0, 10), (99, 49), 1, 32)?,
        )?);
        surface.push(TouchArea::blank(
            "overlap",
            AreaKind::Buttons,
            AreaGeometry::from_corners((0, 0), (99, 99), 1, 4)?,
        )?);
        Ok(surface)
    }

    #[test]
    fn test_first_area_wins() -> Result<(), Box<dyn std::error::Error>> {
        let surface = surface()?;
        assert_eq!(surface.hit_test(5, 5), Some(CellRef::new(AreaId(0), 0)));
        assert_eq!(surface.hit_test(0, 10), Some(CellRef::new(AreaId(1), 0)));
        assert_eq!(surface.hit_test(99, 80), Some(CellRef::new(AreaId(2), 3)));
        assert_eq!(surface.hit_test(100, 80), None);
        Ok(())
    }

    #[test]
    fn test_lookup_by_name_and_kind() -> Result<(), Box<dyn std::error::Error>> {
        let surface = surface()?;
        assert_eq!(surface.find("slider"), Some(AreaId(1)));
        assert_eq!(surface.slider(), Some(AreaId(1)));
        assert!(surface.is_slider(AreaId(1)));
        assert!(!surface.is_slider(AreaId(0)));
        assert!(!surface.is_slider(AreaId(7)));
        assert_eq!(surface.find("missing"), None);
        Ok(())
    }

    #[test]
    fn test_edges_through_refs() -> Result<(), Box<dyn std::error::Error>> {
        let mut surface = surface()?;
        let at = CellRef::new(AreaId(1), 5);
        assert!(surface.press_edge(at));
        assert!(!surface.press_edge(at));
        assert_eq!(surface.cell(at).map(Cell::press_count), Some(2));
        assert!(!surface.press_edge(CellRef::new(AreaId(9), 0)));
        Ok(())
    }
}
