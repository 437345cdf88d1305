//! Firmware game loop.
//!
//! One task owns the [`Game`] context. Each iteration waits for whichever
//! hardware source fires first, runs its handler, then performs one
//! main-loop step (dispatch + render). A source the context reports as
//! disabled is simply not awaited, which is how pin-change, debounce and
//! reset "interrupts" are switched off and on.

use core::future::pending;

use defmt::{debug, info, warn};
use embassy_futures::select::{select3, Either3};
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twim::Twim;
use embassy_time::{Duration, Instant, Ticker, Timer};

use crate::config::DEBOUNCE_TICK_MS;
use crate::context::Game;
use crate::entropy::AdcEntropy;
use crate::feedback;
use crate::input::dispatch::Dispatch;
use crate::ui::buttons::Buttons;
use crate::ui::display::{self, Display};

pub type BoardDisplay = Display<Twim<'static, TWISPI0>>;

#[embassy_executor::task]
pub async fn game_task(
    mut buttons: Buttons<'static>,
    mut screen: BoardDisplay,
    mut entropy: AdcEntropy<'static>,
) -> ! {
    let mut game = Game::new(entropy.seed().await);
    start_round(&mut screen, &game);

    let mut ticker = Ticker::every(Duration::from_millis(DEBOUNCE_TICK_MS));
    let mut reset_at: Option<Instant> = None;

    loop {
        let sources = game.sources();
        let event = select3(
            async {
                if sources.pin_change {
                    buttons.wait_for_change().await
                } else {
                    pending::<()>().await
                }
            },
            async {
                if sources.debounce_tick {
                    ticker.next().await
                } else {
                    pending::<()>().await
                }
            },
            async {
                match reset_at {
                    Some(at) if sources.reset_timer => Timer::at(at).await,
                    _ => pending::<()>().await,
                }
            },
        )
        .await;

        match event {
            Either3::First(()) => {
                if game.on_pin_change(buttons.levels()) {
                    ticker.reset();
                }
            }
            Either3::Second(()) => {
                if let Some(button) = game.on_debounce_tick(buttons.levels()) {
                    debug!("Button: {}", button);
                }
            }
            Either3::Third(()) => {
                reset_at = None;
                let seed = entropy.seed().await;
                if game.on_reset_expired(seed) {
                    start_round(&mut screen, &game);
                }
            }
        }

        if let Some(step) = game.poll() {
            present(&mut screen, &game, &step);
            if step.armed_reset {
                let delay = game.reset_timer().delay_ms();
                info!("Reset: next round in {} ms", delay);
                reset_at = Some(Instant::now() + Duration::from_millis(delay));
            }
        }
    }
}

fn start_round(screen: &mut BoardDisplay, game: &Game) {
    info!(
        "Round: {} letters, {=[u8]:a} offered",
        game.state().hidden_word().len(),
        game.state().letters().as_slice()
    );
    if let Err(e) = display::show_round(screen, game.state()) {
        warn!("Display: {}", e);
    }
}

fn present(screen: &mut BoardDisplay, game: &Game, step: &Dispatch) {
    if let Some(guess) = step.guess {
        info!(
            "Guess {=char}: {}, mistakes {}",
            game.state().selected_letter() as char,
            guess,
            game.state().mistakes()
        );
    }
    if let Some(cue) = step.cue {
        if let Err(e) = feedback::request(cue) {
            warn!("Feedback: {}", e);
        }
    }
    if let Err(e) = display::show_redraw(screen, game.state(), step.redraw) {
        warn!("Display: {}", e);
    }
    if step.finished_round() {
        info!("Round over: {}", step.outcome);
    }
}
