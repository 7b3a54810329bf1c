//! Spawned background tasks

pub mod scanner;
