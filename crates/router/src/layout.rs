//! Layout configuration: which touch areas exist and what their cells do.

use crate::{LayoutError, LayoutResult};
use padtouch_hid_gadget_protocol::ConsoleKind;
use padtouch_touch_grid::{
    AreaGeometry, AreaKind, CellSpec, SLIDER_BITMAP_CELLS, TouchArea, TouchSurface,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// How slider cell changes reach the gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderMode {
    /// The raw presence bitmap is packed into the four stick axes, for games
    /// with native touch-slider support.
    #[default]
    Dedicated,
    /// Slider gestures are classified into digital left/right stick X moves.
    Normal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    #[serde(default)]
    pub console: ConsoleKind,

    #[serde(default)]
    pub slider_mode: SliderMode,

    /// Hit-test priority order: the first area containing a point wins.
    pub areas: Vec<AreaConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AreaConfig {
    pub name: String,

    #[serde(default)]
    pub kind: AreaKind,

    /// Inclusive `[x, y]` corners in screen pixels.
    pub top_left: [i32; 2],
    pub bottom_right: [i32; 2],

    pub rows: u16,
    pub columns: u16,

    /// Row-major, one entry per cell. May be left empty for slider areas.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cells: Vec<CellSpec>,
}

impl AreaConfig {
    pub fn geometry(&self) -> LayoutResult<AreaGeometry> {
        let [left, top] = self.top_left;
        let [right, bottom] = self.bottom_right;
        AreaGeometry::from_corners((left, top), (right, bottom), self.rows, self.columns)
            .map_err(|source| self.grid_error(source))
    }

    pub fn build(&self) -> LayoutResult<TouchArea> {
        let geometry = self.geometry()?;
        let area = if self.cells.is_empty() && self.kind == AreaKind::Slider {
            TouchArea::blank(self.name.clone(), self.kind, geometry)
        } else {
            TouchArea::new(self.name.clone(), self.kind, geometry, self.cells.clone())
        };
        area.map_err(|source| self.grid_error(source))
    }

    fn grid_error(&self, source: padtouch_touch_grid::GridError) -> LayoutError {
        LayoutError::Grid {
            area: self.name.clone(),
            source,
        }
    }
}

impl LayoutConfig {
    pub fn from_yaml_str(text: &str) -> LayoutResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_json_str(text: &str) -> LayoutResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a layout, choosing the parser from the file extension
    /// (`.yaml`/`.yml` or `.json`).
    pub fn load(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let layout = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            "json" => Self::from_json_str(&text)?,
            _ => return Err(LayoutError::UnknownFormat(path.display().to_string())),
        };
        debug!(path = %path.display(), areas = layout.areas.len(), "layout loaded");
        Ok(layout)
    }

    pub fn to_yaml(&self) -> LayoutResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn to_json(&self) -> LayoutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check everything [`LayoutConfig::build_surface`] would reject.
    pub fn validate(&self) -> LayoutResult<()> {
        self.build_surface().map(|_| ())
    }

    /// Construct the touch areas in priority order.
    pub fn build_surface(&self) -> LayoutResult<TouchSurface> {
        if self.areas.is_empty() {
            return Err(LayoutError::NoAreas);
        }

        let mut surface = TouchSurface::new();
        let mut slider: Option<&str> = None;
        for config in &self.areas {
            if config.kind == AreaKind::Slider {
                if let Some(first) = slider {
                    return Err(LayoutError::DuplicateSlider {
                        first: first.to_string(),
                        second: config.name.clone(),
                    });
                }
                slider = Some(config.name.as_str());
            }

            let area = config.build()?;
            if area.is_slider() && area.cells().len() > SLIDER_BITMAP_CELLS {
                return Err(LayoutError::SliderTooWide {
                    area: config.name.clone(),
                    cells: area.cells().len(),
                    max: SLIDER_BITMAP_CELLS,
                });
            }
            surface.push(area);
        }
        Ok(surface)
    }
}
