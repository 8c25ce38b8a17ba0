//! Applies routed touch edges to the gamepad.

use crate::layout::{LayoutConfig, SliderMode};
use crate::script::TouchEvent;
use crate::LayoutResult;
use padtouch_hid_gadget_protocol::{
    AXIS_CENTER, ByteSink, GadgetResult, Gamepad, StickAxis,
};
use padtouch_slider::HandTracker;
use padtouch_touch_grid::{
    AreaId, CellRef, CellRole, DPadButton, FingerId, FingerTracker, Routed, TouchSurface,
};
use std::sync::Arc;
use tracing::{debug, warn};

const DPAD_LOW: i32 = 0;
const DPAD_HIGH: i32 = 255;

/// Owns the touch surface and finger state for one gadget link.
///
/// Gadget write failures never reach the touch input path: they are logged
/// and counted, the gamepad keeps the committed state, and
/// [`TouchRouter::reflush`] resends it once the link is back.
pub struct TouchRouter<S: ByteSink> {
    surface: TouchSurface,
    tracker: FingerTracker,
    gamepad: Arc<Gamepad<S>>,
    slider_mode: SliderMode,
    hands: HandTracker,
    failed_writes: u64,
}

impl<S: ByteSink> TouchRouter<S> {
    pub fn new(surface: TouchSurface, gamepad: Arc<Gamepad<S>>, slider_mode: SliderMode) -> Self {
        Self {
            surface,
            tracker: FingerTracker::new(),
            gamepad,
            slider_mode,
            hands: HandTracker::new(),
            failed_writes: 0,
        }
    }

    /// Build the surface from `layout` and a gamepad of the layout's console
    /// kind on top of `sink`.
    pub fn from_layout(layout: &LayoutConfig, sink: S) -> LayoutResult<Self> {
        let surface = layout.build_surface()?;
        let gamepad = Arc::new(Gamepad::new(layout.console, sink));
        Ok(Self::new(surface, gamepad, layout.slider_mode))
    }

    pub fn gamepad(&self) -> &Arc<Gamepad<S>> {
        &self.gamepad
    }

    pub fn surface(&self) -> &TouchSurface {
        &self.surface
    }

    pub fn slider_mode(&self) -> SliderMode {
        self.slider_mode
    }

    pub fn active_fingers(&self) -> usize {
        self.tracker.active_count()
    }

    /// Gadget writes that failed since the router was created.
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes
    }

    /// Send the neutral state, as at the start of a session.
    pub fn begin(&mut self) {
        let result = self.gamepad.begin();
        self.absorb(result);
    }

    pub fn finger_down(&mut self, id: FingerId, x: i32, y: i32) -> Routed {
        let routed = self.tracker.down(&mut self.surface, id, x, y);
        self.apply(routed);
        routed
    }

    pub fn finger_up(&mut self, id: FingerId) -> Routed {
        let routed = self.tracker.up(&mut self.surface, id);
        self.apply(routed);
        routed
    }

    pub fn finger_move(&mut self, id: FingerId, x: i32, y: i32) -> Routed {
        let routed = self.tracker.move_to(&mut self.surface, id, x, y);
        self.apply(routed);
        routed
    }

    pub fn handle(&mut self, event: TouchEvent) -> Routed {
        match event {
            TouchEvent::Down { id, x, y } => self.finger_down(id, x, y),
            TouchEvent::Up { id, .. } => self.finger_up(id),
            TouchEvent::Move { id, x, y } => self.finger_move(id, x, y),
        }
    }

    /// Lift every finger, e.g. when the input device goes away.
    pub fn release_all(&mut self) {
        let released = self.tracker.release_all(&mut self.surface);
        let mut slider_touched = false;
        for at in released {
            match self.role(at) {
                Some(CellRole::Slider) => slider_touched = true,
                Some(role) => self.on_release(role),
                None => {}
            }
        }
        if slider_touched {
            self.update_slider();
        }
    }

    /// Resend the full current frame.
    pub fn reflush(&self) -> GadgetResult<()> {
        self.gamepad.reflush()
    }

    /// Cells whose pressed state changed since the last call, for redrawing.
    pub fn take_dirty(&mut self) -> Vec<CellRef> {
        let ids: Vec<AreaId> = (0..self.surface.len()).map(AreaId).collect();
        ids.into_iter()
            .flat_map(|area| {
                self.surface
                    .area_mut(area)
                    .map(|a| a.take_dirty())
                    .unwrap_or_default()
                    .into_iter()
                    .map(move |cell| CellRef::new(area, cell))
            })
            .collect()
    }

    fn apply(&mut self, routed: Routed) {
        match routed {
            Routed::Idle => {}
            Routed::Press(at) => self.press(at),
            Routed::Release(at) => self.release(at),
            Routed::Relocate {
                from,
                to,
                released,
                pressed,
                coupled,
            } => {
                if coupled {
                    if released || pressed {
                        self.update_slider();
                    }
                    return;
                }
                if released {
                    self.release(from);
                }
                if pressed {
                    self.press(to);
                }
            }
        }
    }

    fn role(&self, at: CellRef) -> Option<CellRole> {
        self.surface.cell(at).map(|cell| cell.role())
    }

    fn press(&mut self, at: CellRef) {
        match self.role(at) {
            Some(CellRole::Slider) => self.update_slider(),
            Some(role) => self.on_press(role),
            None => {}
        }
    }

    fn release(&mut self, at: CellRef) {
        match self.role(at) {
            Some(CellRole::Slider) => self.update_slider(),
            Some(role) => self.on_release(role),
            None => {}
        }
    }

    fn on_press(&mut self, role: CellRole) {
        let result = match role {
            CellRole::Button(id) => self.gamepad.press_button(id),
            CellRole::DPad(DPadButton::Up) => self.gamepad.set_dpad_y_axis(DPAD_LOW),
            CellRole::DPad(DPadButton::Down) => self.gamepad.set_dpad_y_axis(DPAD_HIGH),
            CellRole::DPad(DPadButton::Left) => self.gamepad.set_dpad_x_axis(DPAD_LOW),
            CellRole::DPad(DPadButton::Right) => self.gamepad.set_dpad_x_axis(DPAD_HIGH),
            CellRole::Slider | CellRole::Inert => Ok(()),
        };
        self.absorb(result);
    }

    fn on_release(&mut self, role: CellRole) {
        let center = i32::from(AXIS_CENTER);
        let result = match role {
            CellRole::Button(id) => self.gamepad.release_button(id),
            CellRole::DPad(DPadButton::Up | DPadButton::Down) => {
                self.gamepad.set_dpad_y_axis(center)
            }
            CellRole::DPad(DPadButton::Left | DPadButton::Right) => {
                self.gamepad.set_dpad_x_axis(center)
            }
            CellRole::Slider | CellRole::Inert => Ok(()),
        };
        self.absorb(result);
    }

    /// Recompute the slider from the whole area and push it to the gamepad.
    fn update_slider(&mut self) {
        let Some(bits) = self
            .surface
            .slider()
            .and_then(|id| self.surface.area(id))
            .map(|area| area.presence_bits())
        else {
            return;
        };
        debug!(bits = %format_args!("{bits:08x}"), mode = ?self.slider_mode, "slider update");

        match self.slider_mode {
            SliderMode::Dedicated => {
                let result = self.gamepad.set_all_axes_from_packed(bits);
                self.absorb(result);
            }
            SliderMode::Normal => {
                let sticks = self.hands.update(bits);
                let result = self.gamepad.set_axes(&[
                    (StickAxis::LeftX, i32::from(sticks.left_x)),
                    (StickAxis::RightX, i32::from(sticks.right_x)),
                ]);
                self.absorb(result);
            }
        }
    }

    fn absorb(&mut self, result: GadgetResult<()>) {
        if let Err(e) = result {
            self.failed_writes = self.failed_writes.saturating_add(1);
            warn!(
                error = %e,
                failed_writes = self.failed_writes,
                "gamepad write failed; state kept for resend"
            );
        }
    }
}
