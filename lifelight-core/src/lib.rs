//! Board-agnostic core logic for the Lifelight LED matrix firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Double-buffered frame store shared with the column scanner
//! - Game-of-Life engine with the two-color aging rule
//! - Button press/hold state machine
//! - Brightness fade state machine and the `Dimmer` seam
//! - Noise-bit assembly for board seeding
//! - No-repeat quote index picker
//! - Tick-driven session controller

#![no_std]
#![deny(unsafe_code)]

pub mod buttons;
pub mod entropy;
pub mod fade;
pub mod frame;
pub mod life;
pub mod quotes;
pub mod session;
