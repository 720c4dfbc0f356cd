//! # fibdrv-device
//!
//! A character-device style front end to the Fibonacci evaluators.
//!
//! A [`FibDevice`] admits one open [`FibSession`] at a time. The session's
//! file position selects the index: `seek` moves it, `read` renders F(pos)
//! into the caller's buffer, and `write` reports how long the last read spent
//! computing.

pub mod device;
pub mod error;

pub use device::{FibDevice, FibSession, DEVICE_PATH, MAX_LENGTH};
pub use error::DeviceError;
