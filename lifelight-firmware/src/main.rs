//! Lifelight - 8x8 bicolor LED matrix firmware
//!
//! Main firmware binary for RP2040-based boards. The matrix is column-
//! multiplexed through two cascaded 74HC595 shift registers (16 row bits:
//! red and green per row) with 8 one-hot column driver lines. A background
//! task scans columns at 796 Hz while the main task alternates between
//! Game-of-Life playthroughs and scrolled quotes.
//!
//! Pin assignments:
//! - GPIO2  shift register serial data (active low)
//! - GPIO3  shift register clock
//! - GPIO4  shift register latch
//! - GPIO6..13  column drivers (GPIO13 = leftmost column)
//! - GPIO14/15  buttons (active low, pulled up)
//! - GPIO26 floating ADC input for noise seeding

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel as AdcChannel, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_time::Timer;
use {defmt_rtt as _, panic_probe as _};

use lifelight_core::buttons::ButtonPoller;
use lifelight_core::quotes::QuotePicker;

mod channels;
mod config;
mod entropy;
mod quotes;
mod sessions;
mod tasks;
mod text;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lifelight firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Shift register bus; data idles high (active low = all LEDs off)
    let data = Output::new(p.PIN_2, Level::High);
    let clock = Output::new(p.PIN_3, Level::Low);
    let latch = Output::new(p.PIN_4, Level::Low);

    // Column drivers, all off until the scanner takes over
    let drivers = [
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
        Output::new(p.PIN_8, Level::Low),
        Output::new(p.PIN_9, Level::Low),
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    ];

    let left = Input::new(p.PIN_14, Pull::Up);
    let right = Input::new(p.PIN_15, Pull::Up);

    // ADC on a floating pin for the noise source
    let adc = Adc::new(p.ADC, Irqs, embassy_rp::adc::Config::default());
    let noise_pin = AdcChannel::new_pin(p.PIN_26, Pull::None);
    let mut noise = entropy::NoiseSource::new(adc, noise_pin);

    spawner
        .spawn(tasks::scanner::scanner_task(data, clock, latch, drivers))
        .unwrap();
    info!("Scanner running, display live");

    // Debounce and pick state persist across sessions
    let mut buttons = ButtonPoller::new();
    let mut picker = QuotePicker::new();

    loop {
        sessions::run_life(&mut noise, &mut buttons, &left, &right).await;
        Timer::after_millis(config::SESSION_PAUSE_MS).await;
        sessions::run_message(&mut noise, &mut picker).await;
    }
}
