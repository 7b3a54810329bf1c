//! Press/hold state machine for the two front buttons
//!
//! Input is a 2-bit *logical down* pattern (bit set = button down, 0 =
//! nothing down); the firmware folds the active-low pull-up wiring into
//! this before polling. Polling must happen at a fixed cadence for the
//! hold threshold to mean a real-world duration - the session controller
//! drives it, not the scanner.

/// Left button bit in the down pattern
pub const BUTTON_LEFT: u8 = 0x01;

/// Right button bit in the down pattern
pub const BUTTON_RIGHT: u8 = 0x02;

/// Consecutive identical polls before a press latches into a hold
pub const HOLD_THRESHOLD: u8 = 20;

/// A button transition worth acting on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Bits that just transitioned into down
    Pressed(u8),
    /// The down pattern has persisted past the hold threshold.
    /// Emitted once; everything else is suppressed until full release.
    Held(u8),
}

/// Debounce state, one instance for the whole runtime
#[derive(Debug, Default)]
pub struct ButtonPoller {
    prev: u8,
    repeat: u8,
}

impl ButtonPoller {
    pub const fn new() -> Self {
        Self { prev: 0, repeat: 0 }
    }

    /// Feed one sampled down pattern, get at most one event
    pub fn poll(&mut self, down: u8) -> Option<ButtonEvent> {
        let down = down & (BUTTON_LEFT | BUTTON_RIGHT);

        // A registered hold eats everything until all buttons are up
        if self.repeat >= HOLD_THRESHOLD {
            self.prev = down;
            if down == 0 {
                self.repeat = 0;
            }
            return None;
        }

        if down != self.prev {
            let pressed = !self.prev & down;
            self.prev = down;
            self.repeat = 0;
            // A pure release has no newly-down bits and emits nothing
            return (pressed != 0).then_some(ButtonEvent::Pressed(pressed));
        }

        if down != 0 {
            self.repeat += 1;
            if self.repeat == HOLD_THRESHOLD {
                return Some(ButtonEvent::Held(down));
            }
        }

        None
    }
}
