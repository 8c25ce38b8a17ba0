//! Built-in layouts.

use crate::layout::{AreaConfig, LayoutConfig, SliderMode};
use crate::{LayoutError, LayoutResult};
use padtouch_hid_gadget_protocol::{ConsoleKind, Ds4Button, SwitchButton};
use padtouch_touch_grid::{AreaKind, CellSpec, DPadButton};
use std::fmt;
use std::str::FromStr;

/// Cell labels spelling out the slider banner, one character per cell.
const SLIDER_BANNER: [&str; 32] = [
    "<", "L", " ", " ", "T", " ", "O", " ", "U", " ", "C", " ", "H", " ", " ", " ", " ", "S", " ",
    "L", " ", "I", " ", "D", " ", "E", " ", "R", " ", " ", "R", ">",
];

const FACE_COLORS: [[u8; 3]; 4] = [[180, 201, 132], [225, 178, 212], [143, 181, 220], [213, 62, 31]];
const FACE_PICTURES: [&str; 4] = ["triangle.png", "square.png", "cross.png", "circle.png"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Gamepad-button strip on top, 32-cell slider, four big face buttons
    /// along the bottom.
    ProjectDiva,
    /// Slider across the top half, four face buttons across the bottom half.
    SplitScreen,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::ProjectDiva, Preset::SplitScreen];

    pub fn name(self) -> &'static str {
        match self {
            Preset::ProjectDiva => "project-diva",
            Preset::SplitScreen => "split-screen",
        }
    }

    pub fn layout(self, console: ConsoleKind, width: i32, height: i32) -> LayoutConfig {
        match self {
            Preset::ProjectDiva => project_diva(console, width, height),
            Preset::SplitScreen => split_screen(console, width, height),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = LayoutError;

    fn from_str(s: &str) -> LayoutResult<Self> {
        let wanted = s.trim().replace('_', "-").to_ascii_lowercase();
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name() == wanted)
            .ok_or_else(|| LayoutError::UnknownPreset(s.to_string()))
    }
}

/// Touchscreen layout for Project Diva style rhythm games on a `width` x
/// `height` screen.
pub fn project_diva(console: ConsoleKind, width: i32, height: i32) -> LayoutConfig {
    let max_x = width - 1;
    let strip_bottom = height / 16 - 1;
    let face_top = height - width / 4;

    LayoutConfig {
        console,
        slider_mode: SliderMode::Dedicated,
        areas: vec![
            AreaConfig {
                name: "gamepad".to_string(),
                kind: AreaKind::Buttons,
                top_left: [0, 0],
                bottom_right: [max_x, strip_bottom],
                rows: 1,
                columns: 14,
                cells: strip_cells(console),
            },
            AreaConfig {
                name: "slider".to_string(),
                kind: AreaKind::Slider,
                top_left: [0, height / 16],
                bottom_right: [max_x, face_top - 1],
                rows: 1,
                columns: 32,
                cells: SLIDER_BANNER.iter().map(|&c| CellSpec::label(c)).collect(),
            },
            face_row(console, [0, face_top], [max_x, height - 1]),
        ],
    }
}

/// Two-area layout: slider over the top half, face buttons
/// over the bottom half.
pub fn split_screen(console: ConsoleKind, width: i32, height: i32) -> LayoutConfig {
    let max_x = width - 1;
    let half = height / 2;

    LayoutConfig {
        console,
        slider_mode: SliderMode::Dedicated,
        areas: vec![
            face_row(console, [0, half], [max_x, height - 1]),
            AreaConfig {
                name: "slider".to_string(),
                kind: AreaKind::Slider,
                top_left: [0, 0],
                bottom_right: [max_x, half - 1],
                rows: 1,
                columns: 32,
                cells: Vec::new(),
            },
        ],
    }
}

fn face_row(console: ConsoleKind, top_left: [i32; 2], bottom_right: [i32; 2]) -> AreaConfig {
    let ids = match console {
        ConsoleKind::Switch => [
            SwitchButton::X.id(),
            SwitchButton::Y.id(),
            SwitchButton::B.id(),
            SwitchButton::A.id(),
        ],
        ConsoleKind::DualShock4 => [
            Ds4Button::Triangle.id(),
            Ds4Button::Square.id(),
            Ds4Button::Cross.id(),
            Ds4Button::Circle.id(),
        ],
    };
    let cells = ["X", "Y", "B", "A"]
        .into_iter()
        .zip(ids)
        .zip(FACE_COLORS.into_iter().zip(FACE_PICTURES))
        .map(|((label, id), (color, picture))| {
            CellSpec::button(label, id)
                .with_color(color)
                .with_picture(picture)
        })
        .collect();

    AreaConfig {
        name: "face".to_string(),
        kind: AreaKind::Buttons,
        top_left,
        bottom_right,
        rows: 1,
        columns: 4,
        cells,
    }
}

fn strip_cells(console: ConsoleKind) -> Vec<CellSpec> {
    let dpad = [
        CellSpec::dpad("Up", DPadButton::Up),
        CellSpec::dpad("Down", DPadButton::Down),
        CellSpec::dpad("Left", DPadButton::Left),
        CellSpec::dpad("Right", DPadButton::Right),
    ];
    let (left, right): (Vec<CellSpec>, Vec<CellSpec>) = match console {
        ConsoleKind::Switch => (
            vec![
                CellSpec::button("ZL", SwitchButton::LeftThrottle.id()),
                CellSpec::button("L", SwitchButton::LeftTrigger.id()),
                CellSpec::button("LSB/L3", SwitchButton::LeftStick.id()),
            ],
            vec![
                CellSpec::button("-", SwitchButton::Minus.id()),
                CellSpec::button("Capture", SwitchButton::Capture.id()),
                CellSpec::button("Home", SwitchButton::Home.id()),
                CellSpec::button("+", SwitchButton::Plus.id()),
                CellSpec::button("RSB/R3", SwitchButton::RightStick.id()),
                CellSpec::button("R", SwitchButton::RightTrigger.id()),
                CellSpec::button("ZR", SwitchButton::RightThrottle.id()),
            ],
        ),
        ConsoleKind::DualShock4 => (
            vec![
                CellSpec::button("L2", Ds4Button::L2.id()),
                CellSpec::button("L1", Ds4Button::L1.id()),
                CellSpec::button("L3", Ds4Button::L3.id()),
            ],
            vec![
                CellSpec::button("Share", Ds4Button::Share.id()),
                CellSpec::button("Logo", Ds4Button::Logo.id()),
                CellSpec::button("TPad", Ds4Button::Touchpad.id()),
                CellSpec::button("Options", Ds4Button::Options.id()),
                CellSpec::button("R3", Ds4Button::R3.id()),
                CellSpec::button("R1", Ds4Button::R1.id()),
                CellSpec::button("R2", Ds4Button::R2.id()),
            ],
        ),
    };
    left.into_iter().chain(dpad).chain(right).collect()
}
