//! One automaton playthrough, tick by tick
//!
//! The session controller owns the pace of everything that is not the
//! scanner: button polling at a 5:1 subdivision, the generation interval,
//! and the fade ramp. The firmware drives `tick` every 10 ms and sleeps in
//! between; nothing here blocks, so the whole session runs against a fake
//! clock in the tests.

use crate::buttons::{ButtonEvent, ButtonPoller, BUTTON_LEFT, BUTTON_RIGHT};
use crate::fade::{Dimmer, FadeTick, Fader};
use crate::frame::{FrameBuffer, VISIBLE_COLS};
use crate::life::{next_generation, Activity, Board};

/// Session tick quantum in milliseconds (the firmware's sleep)
pub const TICK_MS: u64 = 10;

/// Button poll happens every this many ticks
pub const BUTTON_POLL_DIVIDER: u8 = 5;

/// Ticks between generations at session start
pub const INITIAL_SPEED: u8 = 8;

/// Generations before a pattern counts as boring and gets faded out
pub const GENERATION_CAP: u16 = 35;

/// Whether the playthrough is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionStatus {
    Running,
    /// Fade-out completed (or the user aborted); frame is cleared
    Finished,
}

/// State for one automaton session
#[derive(Debug)]
pub struct LifeSession {
    fader: Fader,
    /// Ticks between generations; 0 pauses the simulation
    speed: u8,
    gen_timer: u8,
    poll_timer: u8,
    generations: u16,
}

impl LifeSession {
    /// Seed the board and start fading in
    ///
    /// Clears both buffer halves, writes the seed to the back half and
    /// flips it visible before the fade-in engages.
    pub fn start(seed: &Board, frame: &FrameBuffer, dimmer: &mut impl Dimmer) -> Self {
        frame.clear_all();
        frame.set_base(0);
        for col in 0..VISIBLE_COLS {
            frame.set_back_column(col, seed.column(col));
        }
        frame.flip();

        let mut fader = Fader::new();
        fader.begin_fade_in(dimmer);

        Self {
            fader,
            speed: INITIAL_SPEED,
            gen_timer: 0,
            poll_timer: 0,
            generations: 0,
        }
    }

    /// Current generation interval in ticks
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Generations computed so far
    pub fn generations(&self) -> u16 {
        self.generations
    }

    /// Advance the session by one 10 ms tick
    ///
    /// `down` is the sampled logical button pattern for this tick. The
    /// button poller is borrowed because its debounce state outlives any
    /// single session.
    pub fn tick(
        &mut self,
        down: u8,
        frame: &FrameBuffer,
        buttons: &mut ButtonPoller,
        dimmer: &mut impl Dimmer,
    ) -> SessionStatus {
        // Sub-sampled button poll
        self.poll_timer += 1;
        if self.poll_timer == BUTTON_POLL_DIVIDER {
            self.poll_timer = 0;
            match buttons.poll(down) {
                Some(ButtonEvent::Held(bits)) if bits & BUTTON_LEFT != 0 => {
                    // Abort the playthrough outright
                    return self.finish(frame, dimmer);
                }
                Some(ButtonEvent::Pressed(bits)) if bits & BUTTON_LEFT != 0 => {
                    // Cycle the simulation speed; 0 pauses
                    self.gen_timer = 0;
                    self.speed = (self.speed + 4) & 0x0F;
                }
                Some(ButtonEvent::Pressed(bits)) if bits & BUTTON_RIGHT != 0 => {
                    self.fader.begin_fade_out(dimmer, false);
                }
                _ => {}
            }
        }

        // Advance the simulation when the interval elapses
        if self.speed > 0 {
            self.gen_timer += 1;
            if self.gen_timer == self.speed {
                self.gen_timer = 0;
                self.step_generation(frame, dimmer);
            }
        }

        // Advance any fade in progress
        match self.fader.tick(dimmer) {
            FadeTick::FadedOut => self.finish(frame, dimmer),
            _ => SessionStatus::Running,
        }
    }

    /// Compute the next generation into the back half and flip
    fn step_generation(&mut self, frame: &FrameBuffer, dimmer: &mut impl Dimmer) {
        let mut cols = [0u16; VISIBLE_COLS as usize];
        for (i, col) in cols.iter_mut().enumerate() {
            *col = frame.visible_column(i as u8);
        }
        let src = Board::from_columns(cols);
        let (next, activity) = next_generation(&src);
        for col in 0..VISIBLE_COLS {
            frame.set_back_column(col, next.column(col));
        }

        self.generations += 1;
        if activity != Activity::Active || self.generations > GENERATION_CAP {
            // Not worth watching (or watched long enough): fade out. A dead
            // board skips the ramp entirely.
            self.fader
                .begin_fade_out(dimmer, activity == Activity::Dead);
        }

        frame.flip();
    }

    fn finish(&mut self, frame: &FrameBuffer, dimmer: &mut impl Dimmer) -> SessionStatus {
        frame.clear_all();
        dimmer.disable();
        SessionStatus::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fade::tests::FakeDimmer;
    use crate::frame::SLOT_COUNT;
    use crate::life::Cell;

    fn block() -> Board {
        let mut b = Board::new();
        for (col, row) in [(2, 2), (2, 3), (3, 2), (3, 3)] {
            b.set(col, row, Cell::Mature);
        }
        b
    }

    fn glider() -> Board {
        let mut b = Board::new();
        for (col, row) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
            b.set(col, row, Cell::Mature);
        }
        b
    }

    fn run_until_finished(
        session: &mut LifeSession,
        frame: &FrameBuffer,
        buttons: &mut ButtonPoller,
        dimmer: &mut FakeDimmer,
        down: impl Fn(u32) -> u8,
        max_ticks: u32,
    ) -> u32 {
        for tick in 0..max_ticks {
            if session.tick(down(tick), frame, buttons, dimmer) == SessionStatus::Finished {
                return tick + 1;
            }
        }
        panic!("session did not finish within {max_ticks} ticks");
    }

    #[test]
    fn start_makes_the_seed_visible_and_fades_in() {
        let frame = FrameBuffer::new();
        let mut dimmer = FakeDimmer::default();
        let seed = block();

        let session = LifeSession::start(&seed, &frame, &mut dimmer);

        assert_eq!(session.speed(), INITIAL_SPEED);
        assert!(dimmer.enabled);
        for col in 0..VISIBLE_COLS {
            assert_eq!(frame.visible_column(col), seed.column(col));
        }
    }

    #[test]
    fn steady_board_fades_out_and_clears_the_frame() {
        let frame = FrameBuffer::new();
        let mut dimmer = FakeDimmer::default();
        let mut buttons = ButtonPoller::new();
        let mut session = LifeSession::start(&block(), &frame, &mut dimmer);

        let ticks = run_until_finished(
            &mut session,
            &frame,
            &mut buttons,
            &mut dimmer,
            |_| 0,
            1_000,
        );

        // One generation (8 ticks) plus a bounded fade-out
        assert!(ticks > INITIAL_SPEED as u32);
        assert_eq!(session.generations(), 1);
        assert!(!dimmer.enabled);
        for slot in 0..SLOT_COUNT as u8 {
            assert_eq!(frame.column(slot), 0);
        }
    }

    #[test]
    fn empty_seed_finishes_without_a_long_ramp() {
        let frame = FrameBuffer::new();
        let mut dimmer = FakeDimmer::default();
        let mut buttons = ButtonPoller::new();
        let mut session = LifeSession::start(&Board::new(), &frame, &mut dimmer);

        let ticks = run_until_finished(
            &mut session,
            &frame,
            &mut buttons,
            &mut dimmer,
            |_| 0,
            1_000,
        );

        // Dead board: fade-out starts from wherever the brief fade-in got
        // to, far below full brightness
        assert!(ticks < 40);
    }

    #[test]
    fn glider_runs_into_the_generation_cap() {
        let frame = FrameBuffer::new();
        let mut dimmer = FakeDimmer::default();
        let mut buttons = ButtonPoller::new();
        let mut session = LifeSession::start(&glider(), &frame, &mut dimmer);

        run_until_finished(
            &mut session,
            &frame,
            &mut buttons,
            &mut dimmer,
            |_| 0,
            10_000,
        );

        // A glider on the torus never settles; only the cap stops it
        assert!(session.generations() > GENERATION_CAP);
    }

    #[test]
    fn left_press_cycles_speed_and_eventually_pauses() {
        let frame = FrameBuffer::new();
        let mut dimmer = FakeDimmer::default();
        let mut buttons = ButtonPoller::new();
        let mut session = LifeSession::start(&glider(), &frame, &mut dimmer);

        // One press: down across exactly one poll tick, then released
        fn press(
            session: &mut LifeSession,
            frame: &FrameBuffer,
            buttons: &mut ButtonPoller,
            dimmer: &mut FakeDimmer,
        ) {
            for tick in 0..(2 * BUTTON_POLL_DIVIDER as u32) {
                let down = if tick < BUTTON_POLL_DIVIDER as u32 {
                    BUTTON_LEFT
                } else {
                    0
                };
                session.tick(down, frame, buttons, dimmer);
            }
        }

        press(&mut session, &frame, &mut buttons, &mut dimmer);
        assert_eq!(session.speed(), 12);
        press(&mut session, &frame, &mut buttons, &mut dimmer);
        assert_eq!(session.speed(), 0); // paused

        let gens = session.generations();
        for _ in 0..100 {
            session.tick(0, &frame, &mut buttons, &mut dimmer);
        }
        assert_eq!(session.generations(), gens);

        press(&mut session, &frame, &mut buttons, &mut dimmer);
        assert_eq!(session.speed(), 4);
    }

    #[test]
    fn right_press_fades_the_session_out() {
        let frame = FrameBuffer::new();
        let mut dimmer = FakeDimmer::default();
        let mut buttons = ButtonPoller::new();
        let mut session = LifeSession::start(&glider(), &frame, &mut dimmer);

        let ticks = run_until_finished(
            &mut session,
            &frame,
            &mut buttons,
            &mut dimmer,
            |tick| if tick < BUTTON_POLL_DIVIDER as u32 { BUTTON_RIGHT } else { 0 },
            1_000,
        );

        // Interrupts the fade-in almost immediately
        assert!(ticks < 30);
        assert!(session.generations() <= 1);
    }

    #[test]
    fn left_hold_aborts_the_session() {
        let frame = FrameBuffer::new();
        let mut dimmer = FakeDimmer::default();
        let mut buttons = ButtonPoller::new();
        let mut session = LifeSession::start(&glider(), &frame, &mut dimmer);

        let ticks = run_until_finished(
            &mut session,
            &frame,
            &mut buttons,
            &mut dimmer,
            |_| BUTTON_LEFT,
            1_000,
        );

        // Held fires on the 21st poll, i.e. around tick 105
        assert!(ticks <= 110);
        assert!(!dimmer.enabled);
        for slot in 0..SLOT_COUNT as u8 {
            assert_eq!(frame.column(slot), 0);
        }
    }
}
