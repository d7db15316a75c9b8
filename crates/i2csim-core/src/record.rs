use std::fmt;

use serde::{Deserialize, Serialize};

/// Bus state of a single simulated transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Encoded address byte: 7-bit device id with the R/W bit in bit 0.
    pub device_address: u8,
    pub register_address: u8,
    /// Value the device will report on a read, or the value committed by a write.
    pub data: u8,
}

impl TransactionRecord {
    pub fn new(device_address: u8, register_address: u8, data: u8) -> Self {
        Self {
            device_address,
            register_address,
            data,
        }
    }

    /// A blank record whose device will report `data` when read.
    pub fn seeded(data: u8) -> Self {
        Self {
            data,
            ..Default::default()
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Device Address: 0x{:02X}", self.device_address)?;
        writeln!(f, "Register Address: 0x{:02X}", self.register_address)?;
        write!(f, "Data: 0x{:02X}", self.data)
    }
}
