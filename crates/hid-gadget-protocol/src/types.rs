//! Button and D-pad identifiers shared by both gadget variants

use serde::{Deserialize, Serialize};

/// Width of the button mask carried by both frame layouts.
pub const MAX_BUTTONS: u8 = 16;

/// Switch-style buttons, numbered by their bit in the button mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SwitchButton {
    Y = 0,
    B = 1,
    A = 2,
    X = 3,
    /// L
    LeftTrigger = 4,
    /// R
    RightTrigger = 5,
    /// ZL
    LeftThrottle = 6,
    /// ZR
    RightThrottle = 7,
    Minus = 8,
    Plus = 9,
    LeftStick = 10,
    RightStick = 11,
    Home = 12,
    Capture = 13,
}

impl SwitchButton {
    pub const ALL: [SwitchButton; 14] = [
        SwitchButton::Y,
        SwitchButton::B,
        SwitchButton::A,
        SwitchButton::X,
        SwitchButton::LeftTrigger,
        SwitchButton::RightTrigger,
        SwitchButton::LeftThrottle,
        SwitchButton::RightThrottle,
        SwitchButton::Minus,
        SwitchButton::Plus,
        SwitchButton::LeftStick,
        SwitchButton::RightStick,
        SwitchButton::Home,
        SwitchButton::Capture,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// DualShock-style buttons, numbered by their bit in the button mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Ds4Button {
    Square = 0,
    Cross = 1,
    Circle = 2,
    Triangle = 3,
    L1 = 4,
    R1 = 5,
    L2 = 6,
    R2 = 7,
    Share = 8,
    Options = 9,
    L3 = 10,
    R3 = 11,
    Logo = 12,
    Touchpad = 13,
}

impl Ds4Button {
    pub const ALL: [Ds4Button; 14] = [
        Ds4Button::Square,
        Ds4Button::Cross,
        Ds4Button::Circle,
        Ds4Button::Triangle,
        Ds4Button::L1,
        Ds4Button::R1,
        Ds4Button::L2,
        Ds4Button::R2,
        Ds4Button::Share,
        Ds4Button::Options,
        Ds4Button::L3,
        Ds4Button::R3,
        Ds4Button::Logo,
        Ds4Button::Touchpad,
    ];

    pub const fn id(self) -> u8 {
        self as u8
    }
}

/// Eight-way D-pad compass code as carried in the switch-style hat byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DPadDirection {
    Up = 0,
    UpRight = 1,
    Right = 2,
    DownRight = 3,
    Down = 4,
    DownLeft = 5,
    Left = 6,
    UpLeft = 7,
    #[default]
    Centered = 15,
}

/// X byte per compass code 0..=7.
const COMPASS_X: [u8; 8] = [128, 255, 255, 255, 128, 0, 0, 0];
/// Y byte per compass code 0..=7.
const COMPASS_Y: [u8; 8] = [0, 0, 128, 255, 255, 255, 128, 0];

impl DPadDirection {
    pub const COMPASS: [DPadDirection; 8] = [
        DPadDirection::Up,
        DPadDirection::UpRight,
        DPadDirection::Right,
        DPadDirection::DownRight,
        DPadDirection::Down,
        DPadDirection::DownLeft,
        DPadDirection::Left,
        DPadDirection::UpLeft,
    ];

    /// Map a raw code to a direction. Anything outside `0..=7` is centered.
    pub fn from_code(code: i32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::COMPASS.get(idx).copied())
            .unwrap_or(DPadDirection::Centered)
    }

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// X/Y axis bytes for this direction; centered is `(128, 128)`.
    pub fn axes(self) -> (u8, u8) {
        let idx = usize::from(self.code());
        match (COMPASS_X.get(idx), COMPASS_Y.get(idx)) {
            (Some(&x), Some(&y)) => (x, y),
            _ => (128, 128),
        }
    }

    /// Classify a continuous X/Y pair against the 128 midpoint on each axis.
    pub fn from_axes(x: u8, y: u8) -> Self {
        use std::cmp::Ordering::{Equal, Greater, Less};
        match (x.cmp(&128), y.cmp(&128)) {
            (Equal, Equal) => DPadDirection::Centered,
            (Equal, Less) => DPadDirection::Up,
            (Equal, Greater) => DPadDirection::Down,
            (Less, Equal) => DPadDirection::Left,
            (Less, Less) => DPadDirection::UpLeft,
            (Less, Greater) => DPadDirection::DownLeft,
            (Greater, Equal) => DPadDirection::Right,
            (Greater, Less) => DPadDirection::UpRight,
            (Greater, Greater) => DPadDirection::DownRight,
        }
    }
}
