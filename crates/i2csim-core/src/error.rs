use std::fmt;

use thiserror::Error;

/// Field of a transaction record, in comparison order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    DeviceAddress,
    RegisterAddress,
    Data,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::DeviceAddress => "Device address",
            Field::RegisterAddress => "Register address",
            Field::Data => "Data",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WriteFault {
    #[error("buffer of {len} byte(s) is too short for a register write")]
    ShortBuffer { len: usize },
    #[error("register address or data was not latched correctly")]
    LatchMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReadFault {
    #[error("device address does not have the read bit set")]
    ReadBitClear,
    #[error("expected a 1 byte read buffer, got {len}")]
    BadLength { len: usize },
    #[error("data was not read correctly")]
    LatchMismatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("device address 0x{address:02X} does not fit in 7 bits")]
    AddressBitMismatch { address: u8 },
    #[error("bus write failed: {0}")]
    BusWriteFailed(#[source] WriteFault),
    #[error("bus read failed: {0}")]
    BusReadFailed(#[source] ReadFault),
    #[error("{field} was not set correctly")]
    PayloadMismatch { field: Field },
}

/// Failure to load a scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid scenario in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
