//! User interface subsystem - OLED display + physical buttons.
//!
//! ## Components
//!
//! - **Render**: board layout and drawing, hardware-independent
//! - **Display**: SSD1306 128×64 OLED via I²C (embedded only)
//! - **Buttons**: 3 tactile switches, edge wait + level sampling (embedded only)

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
pub mod render;
