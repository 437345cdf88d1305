//! Hangman firmware for nRF52840.
//!
//! Three buttons move a cursor over ten candidate letters and submit the
//! highlighted one. The word, the letter row, the miss count and the
//! gallows are drawn on an SSD1306 OLED; each guess flashes an LED and
//! sounds the buzzer. A finished round restarts itself after two seconds.

#![no_std]
#![no_main]

use core::future::pending;

use defmt::{error, info};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Level, Output, OutputDrive, Pin};
use embassy_nrf::pwm::SimplePwm;
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use {defmt_rtt as _, panic_probe as _};

use hangman::app::game_task;
use hangman::entropy::AdcEntropy;
use hangman::feedback::{feedback_task, Feedback};
use hangman::ui::buttons::Buttons;
use hangman::ui::display;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    TWISPI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Hangman starting...");
    let p = embassy_nrf::init(Default::default());

    // Buttons: P0.11 left, P0.12 right, P0.24 select
    let buttons = Buttons::new(p.P0_11.degrade(), p.P0_12.degrade(), p.P0_24.degrade());

    // Feedback: green P0.13, red P0.14, buzzer P0.15 on PWM0
    let green = Output::new(p.P0_13, Level::Low, OutputDrive::Standard);
    let red = Output::new(p.P0_14, Level::Low, OutputDrive::Standard);
    let buzzer = SimplePwm::new_1ch(p.PWM0, p.P0_15);
    let feedback = Feedback::new(green, red, buzzer);

    // Display: SDA P0.26, SCL P0.27
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let screen = match display::init(i2c) {
        Ok(screen) => screen,
        Err(e) => {
            error!("Display init failed: {}", e);
            pending::<()>().await;
            return;
        }
    };

    // Entropy: floating AIN0 (P0.02)
    let channel = ChannelConfig::single_ended(p.P0_02);
    let saadc = Saadc::new(p.SAADC, Irqs, saadc::Config::default(), [channel]);
    let entropy = AdcEntropy::new(saadc).await;

    spawner.must_spawn(feedback_task(feedback));
    spawner.must_spawn(game_task(buttons, screen, entropy));
    info!("Tasks spawned");
}
