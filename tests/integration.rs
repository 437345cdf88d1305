//! Integration tests for hangman host-testable logic.
//!
//! Every scenario goes through the simulator, so presses pass the debounce
//! filter and rounds end and restart on the virtual clock exactly as the
//! firmware loop would run them.

use hangman::config::{
    CANDIDATE_COUNT, DEBOUNCE_PASSES, DEBOUNCE_TICK_MS, MAX_MISTAKES, PLACEHOLDER,
    ROUND_RESET_DELAY_MS, WORD_LIST,
};
use hangman::game::{GameState, Guess, Round};
use hangman::input::dispatch::Cue;
use hangman::input::ButtonLevels;
use hangman::sim::Simulator;
use hangman::{Button, Game, Outcome};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Time a tap spends after the reset is armed, rounded up.
const TAP_SLACK_MS: u64 = 200;

fn round(word: &str, revealed: usize) -> Simulator {
    let mut rng = SmallRng::seed_from_u64(0xC0DA);
    Simulator::new(Game::with_state(GameState::new(Round::with_word(
        word, revealed, &mut rng,
    ))))
}

fn misses(sim: &Simulator) -> Vec<u8> {
    let state = sim.game().state();
    state
        .letters()
        .as_slice()
        .iter()
        .copied()
        .filter(|l| !state.hidden_word().as_bytes().contains(l))
        .collect()
}

/// Submit wrong letters, repeating them if fewer than four are offered.
fn lose(sim: &mut Simulator) {
    let wrong = misses(sim);
    for &l in wrong.iter().cycle().take(MAX_MISTAKES as usize) {
        sim.choose_letter(l);
    }
}

fn unique_letters(word: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for b in word.bytes() {
        if !out.contains(&b) {
            out.push(b);
        }
    }
    out
}

#[test]
fn codare_hit_then_miss() {
    let mut sim = round("CODARE", 2);
    assert_eq!(sim.game().state().guessed_word().as_str(), "__D___");

    sim.choose_letter(b'C');
    let step = sim.last_dispatch().unwrap();
    assert_eq!(step.guess, Some(Guess::Hit { positions: 1 }));
    assert_eq!(step.cue, Some(Cue::Success));
    assert!(step.redraw.word);
    assert_eq!(sim.game().state().guessed_word().as_str(), "C_D___");

    let wrong = misses(&sim)[0];
    sim.choose_letter(wrong);
    let step = sim.last_dispatch().unwrap();
    assert_eq!(step.guess, Some(Guess::Miss));
    assert_eq!(step.cue, Some(Cue::Failure));
    assert!(step.redraw.mistakes && step.redraw.hangman);
    assert_eq!(sim.game().state().mistakes(), 1);
}

#[test]
fn electron_reveals_every_occurrence() {
    let mut sim = round("ELECTRON", 7);
    assert_eq!(sim.game().state().guessed_word().as_str(), "_______N");
    sim.choose_letter(b'E');
    assert_eq!(sim.game().state().guessed_word().as_str(), "E_E____N");
    assert_eq!(
        sim.last_dispatch().unwrap().guess,
        Some(Guess::Hit { positions: 2 })
    );
}

#[test]
fn pre_reveal_shows_one_position_only() {
    let sim = round("ELECTRON", 0);
    let guessed = sim.game().state().guessed_word().as_bytes();
    assert_eq!(guessed[0], b'E');
    assert_eq!(guessed[2], PLACEHOLDER);
}

#[test]
fn four_misses_lose_and_restart() {
    let mut sim = round("DISPLAY", 0);
    let wrong = misses(&sim);
    assert_eq!(wrong.len(), CANDIDATE_COUNT - 7);

    // a repeated wrong letter is another mistake
    for (n, &l) in wrong.iter().cycle().take(MAX_MISTAKES as usize).enumerate() {
        sim.choose_letter(l);
        assert_eq!(sim.game().state().mistakes(), n as u8 + 1);
    }
    let step = sim.last_dispatch().unwrap();
    assert_eq!(step.outcome, Outcome::Lost);
    assert_eq!(step.redraw.message, Some(Outcome::Lost));
    assert!(step.armed_reset);
    assert_eq!(sim.stats().resets_armed, 1);

    // countdown not yet over
    sim.advance(ROUND_RESET_DELAY_MS - TAP_SLACK_MS);
    assert_eq!(sim.stats().rounds_started, 0);
    assert_eq!(sim.game().state().outcome(), Outcome::Lost);

    sim.advance(TAP_SLACK_MS);
    assert_eq!(sim.stats().rounds_started, 1);
    let state = sim.game().state();
    assert_eq!(state.mistakes(), 0);
    assert_eq!(state.outcome(), Outcome::InProgress);
    assert!(WORD_LIST.contains(&state.hidden_word().as_str()));
}

#[test]
fn every_letter_in_any_order_wins() {
    for word in WORD_LIST {
        let mut letters = unique_letters(word);
        letters.reverse();
        let mut sim = round(word, 0);
        for &l in &letters {
            if sim.game().state().outcome().is_terminal() {
                break;
            }
            assert!(sim.choose_letter(l), "{} not offered for {}", l as char, word);
        }
        assert_eq!(sim.game().state().outcome(), Outcome::Won, "{}", word);
        assert_eq!(sim.game().state().guessed_word(), sim.game().state().hidden_word());
        assert_eq!(sim.game().state().mistakes(), 0);
        assert_eq!(sim.stats().resets_armed, 1);
    }
}

#[test]
fn guesses_after_round_end_change_nothing() {
    let mut sim = round("CODARE", 2);
    for l in *b"CODARE" {
        sim.choose_letter(l);
    }
    let won = sim.game().state().clone();
    let dispatched = sim.stats().dispatched;

    sim.tap(Button::Select);
    sim.tap(Button::Right);
    sim.tap(Button::Select);
    assert_eq!(sim.game().state(), &won);
    assert_eq!(sim.stats().dispatched, dispatched);
    assert_eq!(sim.stats().resets_armed, 1);
}

#[test]
fn cursor_wraps_both_ways() {
    let mut sim = round("CODARE", 2);
    sim.tap(Button::Left);
    assert_eq!(sim.game().state().cursor(), CANDIDATE_COUNT - 1);
    sim.tap(Button::Right);
    assert_eq!(sim.game().state().cursor(), 0);
    let step = sim.last_dispatch().unwrap();
    assert!(step.redraw.letters);
    assert!(step.cue.is_none());
}

#[test]
fn bouncing_select_submits_once() {
    let mut sim = round("CODARE", 2);
    sim.bouncy_press(Button::Select, &[0, 1, 4, 6, 11, 13, 20], 150);
    assert_eq!(sim.stats().confirmed, 1);
    assert_eq!(sim.stats().dispatched, 1);
}

#[test]
fn press_released_before_threshold_is_dropped() {
    let mut sim = round("CODARE", 2);
    let window = DEBOUNCE_TICK_MS * u64::from(DEBOUNCE_PASSES);
    sim.set_line(Button::Right, true);
    sim.advance(window - DEBOUNCE_TICK_MS);
    sim.set_line(Button::Right, false);
    sim.advance(window);
    assert_eq!(sim.stats().confirmed, 0);
    assert_eq!(sim.game().state().cursor(), 0);
}

#[test]
fn first_line_down_is_the_one_filtered() {
    let mut sim = round("CODARE", 2);
    sim.set_line(Button::Select, true);
    sim.advance(5);
    sim.set_line(Button::Left, true);
    sim.advance(200);
    sim.set_line(Button::Select, false);
    sim.set_line(Button::Left, false);
    sim.advance(50);
    assert_eq!(sim.stats().confirmed, 1);
    assert!(sim.last_dispatch().unwrap().guess.is_some());
    assert_eq!(sim.game().state().cursor(), 0);
}

#[test]
fn lines_down_together_favour_left() {
    let mut game = Game::new(7);
    let levels = ButtonLevels {
        left: true,
        right: true,
        select: true,
    };
    assert!(game.on_pin_change(levels));
    for _ in 0..DEBOUNCE_PASSES {
        game.on_debounce_tick(levels);
    }
    let step = game.poll().unwrap();
    assert_eq!(step.button, Button::Left);
    assert_eq!(game.state().cursor(), CANDIDATE_COUNT - 1);
}

#[test]
fn several_rounds_in_a_row() {
    let mut sim = Simulator::new(Game::new(1234));
    for _ in 0..3 {
        lose(&mut sim);
        assert_eq!(sim.game().state().outcome(), Outcome::Lost);
        sim.advance(ROUND_RESET_DELAY_MS);
        assert_eq!(sim.game().state().outcome(), Outcome::InProgress);
    }
    assert_eq!(sim.stats().rounds_started, 3);
    assert_eq!(sim.stats().resets_armed, 3);
}
