//! Brightness fade state machine
//!
//! Brightness is duty-cycle control: an early-blank threshold inside each
//! column's scan window. The scanner owns the blanking; this module owns the
//! level and the in/out ramp, stepped once per session tick. The `Dimmer`
//! trait is the seam to the hardware side, so the ramp is testable with a
//! recording fake.

/// Scanner divisor: a 125 kHz timebase reaches this count at 796 Hz,
/// just under 100 Hz per column
pub const REFRESH: u8 = 157;

/// Early-blank threshold for a fully dark display
pub const FADE_DARK: u8 = 1;

/// Early-blank threshold for a fully bright display
pub const FADE_BRIGHT: u8 = REFRESH - 1;

/// Level change per session tick while a fade is active
pub const FADE_STEP: u8 = 2;

/// Hardware seam for the early-blank threshold
///
/// Levels passed to `set_level` are always within
/// `[FADE_DARK, FADE_BRIGHT]`; an implementation may `debug_assert!` that.
pub trait Dimmer {
    /// Move the early-blank threshold (higher = brighter)
    fn set_level(&mut self, level: u8);

    /// Engage early blanking
    fn enable(&mut self);

    /// Disengage early blanking (display at full duty)
    fn disable(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Direction {
    Idle,
    In,
    Out,
}

/// What a fade tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeTick {
    /// No fade in progress
    Idle,
    /// Level moved one step
    Stepped,
    /// Reached the bright bound; blanking disengaged
    FadedIn,
    /// Reached the dark bound; the session is over
    FadedOut,
}

/// Fade level and ramp direction
///
/// The level persists across sessions but is reset to a boundary value
/// whenever a new fade starts from idle.
#[derive(Debug)]
pub struct Fader {
    level: u8,
    direction: Direction,
}

impl Fader {
    pub const fn new() -> Self {
        Self {
            level: FADE_DARK,
            direction: Direction::Idle,
        }
    }

    pub fn is_fading(&self) -> bool {
        self.direction != Direction::Idle
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Start ramping up from dark
    ///
    /// If a fade is already running only the direction flips, keeping the
    /// current level so the ramp stays continuous.
    pub fn begin_fade_in(&mut self, dimmer: &mut impl Dimmer) {
        if self.direction == Direction::Idle {
            self.level = FADE_DARK;
            dimmer.set_level(self.level);
            dimmer.enable();
        }
        self.direction = Direction::In;
    }

    /// Start ramping down
    ///
    /// `from_dark` starts the ramp at the dark bound (used when the board is
    /// already dead, so the fade ends immediately instead of flashing the
    /// empty frame at full brightness).
    pub fn begin_fade_out(&mut self, dimmer: &mut impl Dimmer, from_dark: bool) {
        if self.direction == Direction::Idle {
            self.level = if from_dark { FADE_DARK } else { FADE_BRIGHT };
            dimmer.set_level(self.level);
            dimmer.enable();
        }
        self.direction = Direction::Out;
    }

    /// Advance the ramp by one step
    pub fn tick(&mut self, dimmer: &mut impl Dimmer) -> FadeTick {
        match self.direction {
            Direction::Idle => FadeTick::Idle,
            Direction::In => {
                if self.level < FADE_BRIGHT {
                    self.level = (self.level + FADE_STEP).min(FADE_BRIGHT);
                    dimmer.set_level(self.level);
                    FadeTick::Stepped
                } else {
                    self.direction = Direction::Idle;
                    dimmer.disable();
                    FadeTick::FadedIn
                }
            }
            Direction::Out => {
                if self.level > FADE_DARK + FADE_STEP - 1 {
                    self.level = self.level.saturating_sub(FADE_STEP).max(FADE_DARK);
                    dimmer.set_level(self.level);
                    FadeTick::Stepped
                } else {
                    self.level = FADE_DARK;
                    dimmer.set_level(self.level);
                    self.direction = Direction::Idle;
                    FadeTick::FadedOut
                }
            }
        }
    }
}

impl Default for Fader {
    fn default() -> Self {
        Self::new()
    }
}
