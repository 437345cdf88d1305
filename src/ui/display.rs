//! Board OLED: SSD1306 128×64 on I²C, drawn through `ui::render`.
//!
//! Every call draws into the frame buffer first and flushes once, so a
//! bus error leaves the game untouched and only costs one repaint.

use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::error::Error;
use crate::game::GameState;
use crate::input::dispatch::Redraw;
use crate::ui::render;

/// Buffered 128×64 panel over any blocking I²C bus.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Bring up the panel in buffered mode and blank it. Any driver or bus
/// failure comes back as `Error::Display`.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

/// Draw a fresh round into the buffer and push it out.
pub fn show_round<I2C>(display: &mut Display<I2C>, state: &GameState) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    render::draw_round(display, state).map_err(|_| Error::Display)?;
    display.flush().map_err(|_| Error::Display)
}

/// Apply a dispatcher redraw request and push it out.
pub fn show_redraw<I2C>(display: &mut Display<I2C>, state: &GameState, redraw: Redraw) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    if redraw.is_empty() {
        return Ok(());
    }
    render::apply(display, state, redraw).map_err(|_| Error::Display)?;
    display.flush().map_err(|_| Error::Display)
}
