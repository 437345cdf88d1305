//! GPIO button lines.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - LEFT   - cursor left
//!   - RIGHT  - cursor right
//!   - SELECT - submit the highlighted letter
//!
//! This is the pin-change source: `wait_for_change` resolves on any edge
//! of any line, `levels` samples all three for the debounce filter.

use embassy_futures::select::select3;
use embassy_nrf::gpio::{AnyPin, Input, Pull};

use crate::input::ButtonLevels;

pub struct Buttons<'d> {
    left: Input<'d>,
    right: Input<'d>,
    select: Input<'d>,
}

impl<'d> Buttons<'d> {
    pub fn new(left: AnyPin, right: AnyPin, select: AnyPin) -> Self {
        Self {
            left: Input::new(left, Pull::Up),
            right: Input::new(right, Pull::Up),
            select: Input::new(select, Pull::Up),
        }
    }

    /// Current line levels, pressed = low.
    pub fn levels(&self) -> ButtonLevels {
        ButtonLevels {
            left: self.left.is_low(),
            right: self.right.is_low(),
            select: self.select.is_low(),
        }
    }

    /// Wait for an edge on any line.
    pub async fn wait_for_change(&mut self) {
        select3(
            self.left.wait_for_any_edge(),
            self.right.wait_for_any_edge(),
            self.select.wait_for_any_edge(),
        )
        .await;
    }
}
