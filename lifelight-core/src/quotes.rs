//! No-repeat quote index picker
//!
//! The message session picks a pseudo-random index into the quote table,
//! but nothing repeats until the whole set has been shown once. A 64-bit
//! mask tracks what is still available and refills itself when exhausted.

/// Number of quotes the mask covers
pub const QUOTE_COUNT: u8 = 64;

/// Persistent pick state, one instance for the whole runtime
#[derive(Debug, Default)]
pub struct QuotePicker {
    remaining: u64,
}

impl QuotePicker {
    pub const fn new() -> Self {
        Self { remaining: 0 }
    }

    /// Turn a noise byte into an unused quote index
    ///
    /// Starts at `r mod 64` and scans upward (wrapping) for the first index
    /// not yet shown this cycle.
    pub fn pick(&mut self, r: u8) -> u8 {
        if self.remaining == 0 {
            self.remaining = u64::MAX;
        }
        let mut index = r & (QUOTE_COUNT - 1);
        while self.remaining & (1u64 << index) == 0 {
            index = (index + 1) & (QUOTE_COUNT - 1);
        }
        self.remaining &= !(1u64 << index);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_four_picks_cover_every_index_once() {
        let mut picker = QuotePicker::new();
        let mut seen = [false; QUOTE_COUNT as usize];

        // Adversarial input: always ask for index 0
        for _ in 0..QUOTE_COUNT {
            let index = picker.pick(0);
            assert!(!seen[index as usize], "index {index} repeated");
            seen[index as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn exhausted_mask_refills() {
        let mut picker = QuotePicker::new();
        for _ in 0..QUOTE_COUNT {
            picker.pick(17);
        }
        // next cycle starts fresh at the requested index
        assert_eq!(picker.pick(17), 17);
    }

    #[test]
    fn pick_scans_upward_with_wraparound() {
        let mut picker = QuotePicker::new();
        assert_eq!(picker.pick(63), 63);
        // 63 is used now; the scan wraps to 0
        assert_eq!(picker.pick(63), 0);
    }

    #[test]
    fn raw_byte_is_masked_into_range() {
        let mut picker = QuotePicker::new();
        let index = picker.pick(0xFF);
        assert!(index < QUOTE_COUNT);
    }
}
