//! Device address encoding.
//!
//! An address byte on the wire is the 7-bit device id shifted left by one,
//! with the read/write bit in bit 0.

use crate::error::{Error, Result};

pub const WRITE_BIT: u8 = 0;
pub const READ_BIT: u8 = 1;

/// Largest device id that fits in 7 bits.
pub const MAX_DEVICE_ADDRESS: u8 = 0x7F;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RwBit {
    Write = WRITE_BIT as isize,
    Read = READ_BIT as isize,
}

impl RwBit {
    /// Direction carried in bit 0 of an encoded address byte.
    pub fn of(address_byte: u8) -> Self {
        if address_byte & READ_BIT != 0 {
            RwBit::Read
        } else {
            RwBit::Write
        }
    }

    pub fn bit(self) -> u8 {
        self as u8
    }
}

/// Shifts `device_address` left and ORs in the R/W bit.
///
/// No range check is done: bit 7 of an address >= 128 falls off the shift,
/// so `0x80` and `0x00` encode identically. Use [`try_encode_address`] when
/// the input is not already known to be a 7-bit id.
pub fn encode_address(device_address: u8, rw: RwBit) -> u8 {
    (device_address << 1) | rw.bit()
}

pub fn try_encode_address(device_address: u8, rw: RwBit) -> Result<u8> {
    if device_address > MAX_DEVICE_ADDRESS {
        return Err(Error::AddressBitMismatch {
            address: device_address,
        });
    }
    Ok(encode_address(device_address, rw))
}

/// Splits an encoded address byte into the 7-bit id and the direction.
pub fn decode_address(address_byte: u8) -> (u8, RwBit) {
    (address_byte >> 1, RwBit::of(address_byte))
}
