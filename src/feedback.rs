//! LED + buzzer feedback for guesses.
//!
//! The game loop queues a [`Cue`] and moves on; this task lights the
//! matching LED and sounds the buzzer for the cue's duration, so tone
//! timing never stalls input handling.

use defmt::debug;
use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals::PWM0;
use embassy_nrf::pwm::SimplePwm;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, Timer};

use crate::error::Error;
use crate::input::dispatch::Cue;

/// Pending cues. A cue arriving while two are queued is dropped.
pub static CUES: Channel<CriticalSectionRawMutex, Cue, 2> = Channel::new();

/// Queue a cue without waiting.
pub fn request(cue: Cue) -> Result<(), Error> {
    CUES.try_send(cue).map_err(|_| Error::FeedbackBusy)
}

pub struct Feedback<'d> {
    green: Output<'d>,
    red: Output<'d>,
    buzzer: SimplePwm<'d, PWM0>,
}

impl<'d> Feedback<'d> {
    pub fn new(green: Output<'d>, red: Output<'d>, buzzer: SimplePwm<'d, PWM0>) -> Self {
        buzzer.disable();
        Self { green, red, buzzer }
    }

    /// LED on, square wave at the cue pitch, wait, both off.
    pub async fn play(&mut self, cue: Cue) {
        let led = match cue {
            Cue::Success => &mut self.green,
            Cue::Failure => &mut self.red,
        };
        led.set_high();

        self.buzzer.set_period(cue.tone_hz());
        let half = self.buzzer.max_duty() / 2;
        self.buzzer.set_duty(0, half);
        self.buzzer.enable();

        Timer::after(Duration::from_millis(cue.duration_ms())).await;

        self.buzzer.disable();
        self.green.set_low();
        self.red.set_low();
    }
}

#[embassy_executor::task]
pub async fn feedback_task(mut feedback: Feedback<'static>) -> ! {
    loop {
        let cue = CUES.receive().await;
        debug!("Feedback: {}", cue);
        feedback.play(cue).await;
    }
}
