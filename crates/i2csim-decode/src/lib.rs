//! Decoding of recorded bus traces into I2C frames and register accesses.

pub mod i2c;

pub use i2c::{decode_frames, decode_register_accesses, I2cFrame, RegisterAccess};
