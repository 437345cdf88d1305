//! Screen layout and drawing for the 128×64 monochrome display.
//!
//! ```text
//!  0      84 86       127
//!  ┌────────┬──────────┐ 0
//!  │ C_D___ │   ┌──┐   │
//!  │ABCDE.. │   O  │   │ 22
//!  │MISSES 1│  /|\ │   │ 40
//!  │        │  / \ │   │
//!  └────────┴──────────┘ 63
//! ```
//!
//! Every function draws onto any `DrawTarget<Color = BinaryColor>`, so the
//! same code paints the SSD1306 buffer and host-side test framebuffers.
//! Partial redraws clear their own region first.

use core::fmt::Write;

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X15};
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use crate::config::{CANDIDATE_COUNT, MAX_MISTAKES, SCREEN_WIDTH};
use crate::game::{GameState, Outcome};
use crate::input::dispatch::Redraw;

pub const WORD_AREA: Rectangle = Rectangle::new(Point::new(0, 0), Size::new(84, 18));
pub const LETTER_AREA: Rectangle = Rectangle::new(Point::new(0, 22), Size::new(84, 12));
pub const MISTAKE_AREA: Rectangle = Rectangle::new(Point::new(0, 40), Size::new(84, 12));
pub const HANGMAN_AREA: Rectangle = Rectangle::new(Point::new(86, 0), Size::new(42, 64));

/// Horizontal pitch of the candidate letters.
const LETTER_PITCH: i32 = 8;
const LETTER_X0: i32 = 2;

/// Rope end; the figure hangs from here.
const NECK_X: i32 = 102;
const HEAD_TOP_Y: i32 = 8;
const HEAD_DIAMETER: u32 = 10;

const MESSAGE_Y: i32 = 22;

fn text_style(font: &'static MonoFont<'static>, inverted: bool) -> MonoTextStyle<'static, BinaryColor> {
    let (fg, bg) = if inverted {
        (BinaryColor::Off, BinaryColor::On)
    } else {
        (BinaryColor::On, BinaryColor::Off)
    };
    MonoTextStyleBuilder::new()
        .font(font)
        .text_color(fg)
        .background_color(bg)
        .build()
}

fn stroke() -> PrimitiveStyle<BinaryColor> {
    PrimitiveStyle::with_stroke(BinaryColor::On, 1)
}

fn clear_area<D>(target: &mut D, area: Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    area.into_styled(PrimitiveStyle::with_fill(BinaryColor::Off))
        .draw(target)
}

fn line<D>(target: &mut D, from: (i32, i32), to: (i32, i32)) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    Line::new(Point::new(from.0, from.1), Point::new(to.0, to.1))
        .into_styled(stroke())
        .draw(target)
}

/// Left edge of candidate letter `index`.
pub fn letter_x(index: usize) -> i32 {
    LETTER_X0 + index as i32 * LETTER_PITCH
}

/// Revealed letters and placeholders.
pub fn draw_guessed_word<D>(target: &mut D, state: &GameState) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    clear_area(target, WORD_AREA)?;
    Text::with_baseline(
        state.guessed_word().as_str(),
        Point::new(0, 1),
        text_style(&FONT_9X15, false),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

/// Candidate letter row with the cursor letter drawn inverted.
pub fn draw_letter_row<D>(target: &mut D, state: &GameState) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    clear_area(target, LETTER_AREA)?;
    let top = LETTER_AREA.top_left.y;

    for index in 0..CANDIDATE_COUNT {
        let selected = index == state.cursor();
        let x = letter_x(index);
        if selected {
            Rectangle::new(Point::new(x - 1, top), Size::new(LETTER_PITCH as u32, 12))
                .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
                .draw(target)?;
        }
        let letter = [state.letters().get(index)];
        let text = core::str::from_utf8(&letter).unwrap_or("?");
        Text::with_baseline(
            text,
            Point::new(x, top + 1),
            text_style(&FONT_6X10, selected),
            Baseline::Top,
        )
        .draw(target)?;
    }
    Ok(())
}

/// `MISSES n/4` counter.
pub fn draw_mistake_count<D>(target: &mut D, state: &GameState) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    clear_area(target, MISTAKE_AREA)?;
    let mut line: heapless::String<16> = heapless::String::new();
    let _ = write!(line, "MISSES {}/{}", state.mistakes(), MAX_MISTAKES);
    Text::with_baseline(
        line.as_str(),
        MISTAKE_AREA.top_left + Point::new(0, 1),
        text_style(&FONT_6X10, false),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

/// Gallows plus one body stage per mistake: head, body, arms, legs.
pub fn draw_hangman<D>(target: &mut D, state: &GameState) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    clear_area(target, HANGMAN_AREA)?;

    // base, post, beam, rope
    line(target, (90, 62), (126, 62))?;
    line(target, (120, 62), (120, 2))?;
    line(target, (120, 2), (NECK_X, 2))?;
    line(target, (NECK_X, 2), (NECK_X, HEAD_TOP_Y))?;

    let mistakes = state.mistakes();
    let neck_y = HEAD_TOP_Y + HEAD_DIAMETER as i32;
    let hip_y = neck_y + 20;

    if mistakes > 0 {
        Circle::with_center(
            Point::new(NECK_X, HEAD_TOP_Y + HEAD_DIAMETER as i32 / 2),
            HEAD_DIAMETER,
        )
        .into_styled(stroke())
        .draw(target)?;
    }
    if mistakes > 1 {
        line(target, (NECK_X, neck_y), (NECK_X, hip_y))?;
    }
    if mistakes > 2 {
        line(target, (NECK_X, neck_y + 6), (NECK_X - 8, neck_y + 12))?;
        line(target, (NECK_X, neck_y + 6), (NECK_X + 8, neck_y + 12))?;
    }
    if mistakes > 3 {
        line(target, (NECK_X, hip_y), (NECK_X - 8, hip_y + 12))?;
        line(target, (NECK_X, hip_y), (NECK_X + 8, hip_y + 12))?;
    }
    Ok(())
}

/// Full-screen end-of-round message. No-op while the round is running.
pub fn draw_message<D>(target: &mut D, outcome: Outcome) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let text = match outcome {
        Outcome::Won => "YOU WIN!",
        Outcome::Lost => "GAME OVER!",
        Outcome::InProgress => return Ok(()),
    };
    target.clear(BinaryColor::Off)?;

    let width = text.len() as i32 * FONT_10X20.character_size.width as i32;
    let x = (SCREEN_WIDTH as i32 - width) / 2;
    Text::with_baseline(
        text,
        Point::new(x, MESSAGE_Y),
        text_style(&FONT_10X20, false),
        Baseline::Top,
    )
    .draw(target)?;
    Ok(())
}

/// Repaint everything for the current round.
pub fn draw_round<D>(target: &mut D, state: &GameState) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    target.clear(BinaryColor::Off)?;
    apply(target, state, Redraw::ALL)
}

/// Perform a redraw request from the dispatcher.
pub fn apply<D>(target: &mut D, state: &GameState, redraw: Redraw) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    if let Some(outcome) = redraw.message {
        return draw_message(target, outcome);
    }
    if redraw.word {
        draw_guessed_word(target, state)?;
    }
    if redraw.letters {
        draw_letter_row(target, state)?;
    }
    if redraw.mistakes {
        draw_mistake_count(target, state)?;
    }
    if redraw.hangman {
        draw_hangman(target, state)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SCREEN_HEIGHT;
    use crate::game::Round;
    use core::convert::Infallible;
    use embedded_graphics::primitives::PointsIter;
    use embedded_graphics::Pixel;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const W: usize = SCREEN_WIDTH as usize;
    const H: usize = SCREEN_HEIGHT as usize;

    struct FrameBuffer {
        px: [[bool; W]; H],
    }

    impl FrameBuffer {
        fn new() -> Self {
            Self { px: [[false; W]; H] }
        }

        fn lit_in(&self, area: Rectangle) -> usize {
            let mut n = 0;
            for p in area.points() {
                if self.px[p.y as usize][p.x as usize] {
                    n += 1;
                }
            }
            n
        }
    }

    impl OriginDimensions for FrameBuffer {
        fn size(&self) -> Size {
            Size::new(SCREEN_WIDTH, SCREEN_HEIGHT)
        }
    }

    impl DrawTarget for FrameBuffer {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            for Pixel(p, color) in pixels {
                if p.x >= 0 && p.y >= 0 && (p.x as usize) < W && (p.y as usize) < H {
                    self.px[p.y as usize][p.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    fn codare() -> GameState {
        let mut rng = SmallRng::seed_from_u64(21);
        GameState::new(Round::with_word("CODARE", 2, &mut rng))
    }

    fn letter_cell(index: usize) -> Rectangle {
        Rectangle::new(
            Point::new(letter_x(index) - 1, LETTER_AREA.top_left.y),
            Size::new(LETTER_PITCH as u32, 12),
        )
    }

    fn misses(state: &GameState) -> impl Iterator<Item = u8> + '_ {
        state
            .letters()
            .as_slice()
            .iter()
            .copied()
            .filter(|l| !state.hidden_word().as_bytes().contains(l))
    }

    #[test]
    fn full_round_paints_every_region() {
        let mut fb = FrameBuffer::new();
        draw_round(&mut fb, &codare()).unwrap();
        assert!(fb.lit_in(WORD_AREA) > 0);
        assert!(fb.lit_in(LETTER_AREA) > 0);
        assert!(fb.lit_in(MISTAKE_AREA) > 0);
        assert!(fb.lit_in(HANGMAN_AREA) > 0);
    }

    #[test]
    fn selected_letter_is_inverted() {
        let mut fb = FrameBuffer::new();
        let mut state = codare();
        state.cursor_right();
        state.cursor_right();
        draw_letter_row(&mut fb, &state).unwrap();
        let selected = fb.lit_in(letter_cell(2));
        let other = fb.lit_in(letter_cell(5));
        assert!(selected > other);
    }

    #[test]
    fn hangman_grows_with_each_mistake() {
        let mut state = codare();
        let wrong: heapless::Vec<u8, 10> = misses(&state).collect();
        let mut previous = {
            let mut fb = FrameBuffer::new();
            draw_hangman(&mut fb, &state).unwrap();
            fb.lit_in(HANGMAN_AREA)
        };
        for &letter in wrong.iter().take(MAX_MISTAKES as usize) {
            state.submit(letter);
            let mut fb = FrameBuffer::new();
            draw_hangman(&mut fb, &state).unwrap();
            let lit = fb.lit_in(HANGMAN_AREA);
            assert!(lit > previous, "mistake {} drew nothing", state.mistakes());
            previous = lit;
        }
    }

    #[test]
    fn partial_redraw_touches_only_its_region() {
        let mut fb = FrameBuffer::new();
        let state = codare();
        let redraw = Redraw {
            letters: true,
            ..Redraw::NONE
        };
        apply(&mut fb, &state, redraw).unwrap();
        assert!(fb.lit_in(LETTER_AREA) > 0);
        assert_eq!(fb.lit_in(WORD_AREA), 0);
        assert_eq!(fb.lit_in(HANGMAN_AREA), 0);
    }

    #[test]
    fn message_replaces_board() {
        let mut fb = FrameBuffer::new();
        let state = codare();
        draw_round(&mut fb, &state).unwrap();
        let redraw = Redraw {
            message: Some(Outcome::Lost),
            ..Redraw::NONE
        };
        apply(&mut fb, &state, redraw).unwrap();
        assert_eq!(fb.lit_in(LETTER_AREA.translate(Point::new(0, -22))), 0);
        let band = Rectangle::new(Point::new(0, MESSAGE_Y), Size::new(SCREEN_WIDTH, 20));
        assert!(fb.lit_in(band) > 0);
    }

    #[test]
    fn in_progress_message_draws_nothing() {
        let mut fb = FrameBuffer::new();
        draw_message(&mut fb, Outcome::InProgress).unwrap();
        let screen = Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        assert_eq!(fb.lit_in(screen), 0);
    }
}
