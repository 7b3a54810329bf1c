//! Noise bits from a floating ADC pin
//!
//! The seeding randomness comes from the least significant bit of an ADC
//! conversion on an unconnected input, with a settle delay between samples
//! to decorrelate them. Weak by design - it only has to make each
//! playthrough look different.

use embassy_rp::adc::{Adc, Async, Channel, Error};
use embassy_time::Timer;

use lifelight_core::entropy::{board_from_noise, BitAccumulator};
use lifelight_core::life::Board;

use crate::config::NOISE_SETTLE_MS;

pub struct NoiseSource {
    adc: Adc<'static, Async>,
    channel: Channel<'static>,
}

impl NoiseSource {
    pub fn new(adc: Adc<'static, Async>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }

    /// One noise bit, with the settle delay included
    pub async fn bit(&mut self) -> bool {
        let sample: Result<u16, Error> = self.adc.read(&mut self.channel).await;
        Timer::after_millis(NOISE_SETTLE_MS).await;
        // A failed conversion degrades to a zero bit; seeding quality is
        // best-effort anyway
        sample.map(|s| s & 1 == 1).unwrap_or(false)
    }

    /// Eight sequential bits, MSB-first
    pub async fn byte(&mut self) -> u8 {
        let mut acc = BitAccumulator::new();
        loop {
            let bit = self.bit().await;
            if let Some(byte) = acc.push(bit) {
                return byte;
            }
        }
    }

    /// 64 sequential bits arranged into a seed board of mature cells
    pub async fn board(&mut self) -> Board {
        let mut bytes = [0u8; 8];
        for byte in bytes.iter_mut() {
            *byte = self.byte().await;
        }
        board_from_noise(bytes)
    }
}
