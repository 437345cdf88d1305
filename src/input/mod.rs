//! Button input - debounce filter and dispatcher.
//!
//! Three physical buttons:
//!   - LEFT   - move the letter cursor left
//!   - RIGHT  - move the letter cursor right
//!   - SELECT - submit the highlighted letter
//!
//! Raw edges go through the [`debounce::Debouncer`], which raises at most
//! one [`debounce::ConfirmedEvents`] flag per press. The main loop hands
//! that flag to [`dispatch::dispatch`], which applies it to the game.

pub mod debounce;
pub mod dispatch;

/// Physical button events (after debouncing).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Left,
    Right,
    Select,
}

/// Snapshot of the three button lines, `true` meaning pressed.
///
/// Electrical polarity is resolved by whoever samples the pins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonLevels {
    pub left: bool,
    pub right: bool,
    pub select: bool,
}

impl ButtonLevels {
    pub const RELEASED: Self = Self {
        left: false,
        right: false,
        select: false,
    };

    /// Levels with only `button` pressed.
    pub fn only(button: Button) -> Self {
        let mut levels = Self::RELEASED;
        levels.set(button, true);
        levels
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        match button {
            Button::Left => self.left,
            Button::Right => self.right,
            Button::Select => self.select,
        }
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        match button {
            Button::Left => self.left = pressed,
            Button::Right => self.right = pressed,
            Button::Select => self.select = pressed,
        }
    }

    /// First pressed line in LEFT, RIGHT, SELECT order.
    pub fn first_pressed(&self) -> Option<Button> {
        [Button::Left, Button::Right, Button::Select]
            .into_iter()
            .find(|&b| self.is_pressed(b))
    }
}
