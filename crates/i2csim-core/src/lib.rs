//! Core functionalities: transaction record, mock bus, register transactions, checks, settings.

pub mod address;
pub mod bus;
pub mod checks;
pub mod error;
pub mod record;
pub mod scenario;
pub mod trace;
mod transaction;

pub use address::{
    decode_address, encode_address, try_encode_address, RwBit, MAX_DEVICE_ADDRESS, READ_BIT, WRITE_BIT,
};
pub use bus::{BusOp, MockBus};
pub use checks::{check_payloads, first_mismatch, payloads_match};
pub use error::{ConfigError, Error, Field, ReadFault, Result, WriteFault};
pub use record::TransactionRecord;
pub use scenario::{ReadStep, Scenario, WriteStep};
pub use trace::{BusTrace, Direction, TraceEntry};
