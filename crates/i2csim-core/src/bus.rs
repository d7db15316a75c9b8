//! Simulated bus transceiver.
//!
//! There is no transmission: a bus phase latches bytes into the owned
//! [`TransactionRecord`] and reads them back. The read-back checks cannot
//! fail with plain field assignment; they stay as consistency assertions.

use log::{debug, error};

use crate::address::RwBit;
use crate::error::{Error, ReadFault, Result, WriteFault};
use crate::record::TransactionRecord;
use crate::trace::{BusTrace, Direction};

/// What a controller write means to the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    /// Register pointer write ahead of a read.
    SelectRegister(u8),
    /// Register pointer followed by the byte to commit.
    WriteRegisterData(u8, u8),
}

impl BusOp {
    /// Works out the intent of a raw write buffer from its length and the
    /// R/W bit of the current address byte.
    ///
    /// With the read bit set, a single byte selects a register. Anything
    /// else needs at least a register and a data byte; bytes past the second
    /// are ignored.
    pub fn infer(address_byte: u8, buffer: &[u8]) -> Result<Self> {
        if RwBit::of(address_byte) == RwBit::Read && buffer.len() == 1 {
            return Ok(BusOp::SelectRegister(buffer[0]));
        }
        match buffer {
            [register, data, rest @ ..] => {
                if !rest.is_empty() {
                    debug!("ignoring {} trailing byte(s) in register write", rest.len());
                }
                Ok(BusOp::WriteRegisterData(*register, *data))
            }
            _ => Err(Error::BusWriteFailed(WriteFault::ShortBuffer {
                len: buffer.len(),
            })),
        }
    }

    pub fn bytes(&self) -> Vec<u8> {
        match *self {
            BusOp::SelectRegister(register) => vec![register],
            BusOp::WriteRegisterData(register, data) => vec![register, data],
        }
    }
}

/// A single simulated device on a single simulated bus.
#[derive(Debug)]
pub struct MockBus {
    pub(crate) record: TransactionRecord,
    trace: BusTrace,
}

impl MockBus {
    pub fn new(record: TransactionRecord) -> Self {
        Self {
            record,
            trace: BusTrace::default(),
        }
    }

    /// Bus whose device will report `data` on the next read.
    pub fn seeded(data: u8) -> Self {
        Self::new(TransactionRecord::seeded(data))
    }

    /// Snapshot of the current bus state.
    pub fn record(&self) -> TransactionRecord {
        self.record
    }

    pub fn into_record(self) -> TransactionRecord {
        self.record
    }

    pub fn trace(&self) -> &BusTrace {
        &self.trace
    }

    pub fn trace_mut(&mut self) -> &mut BusTrace {
        &mut self.trace
    }

    /// Clears the record between transactions. The trace is kept.
    pub fn reset(&mut self) {
        self.record = TransactionRecord::default();
    }

    /// Latches `op` into the record.
    pub fn transfer(&mut self, op: BusOp) -> Result<()> {
        let latched = match op {
            BusOp::SelectRegister(register) => {
                self.record.register_address = register;
                self.record.register_address == register
            }
            BusOp::WriteRegisterData(register, data) => {
                self.record.register_address = register;
                self.record.data = data;
                self.record.register_address == register && self.record.data == data
            }
        };

        let address = self.record.device_address;
        self.trace.push(Direction::Tx, address, op.bytes(), latched);

        if !latched {
            error!("register address or data was not set correctly for {op:?}");
            return Err(Error::BusWriteFailed(WriteFault::LatchMismatch));
        }
        debug!("bus write 0x{address:02X}: {op:?}");
        Ok(())
    }

    /// Buffer-based write; see [`BusOp::infer`] for how intent is derived.
    pub fn mock_write(&mut self, buffer: &[u8]) -> Result<()> {
        match BusOp::infer(self.record.device_address, buffer) {
            Ok(op) => self.transfer(op),
            Err(e) => {
                self.trace
                    .push(Direction::Tx, self.record.device_address, buffer.to_vec(), false);
                error!("bus write rejected: {e}");
                Err(e)
            }
        }
    }

    /// Reads the device's data byte into a one-byte `buffer`.
    pub fn mock_read(&mut self, buffer: &mut [u8]) -> Result<()> {
        let address = self.record.device_address;

        if RwBit::of(address) != RwBit::Read {
            self.trace.push(Direction::Rx, address, Vec::new(), false);
            error!("bus read on 0x{address:02X} without the read bit set");
            return Err(Error::BusReadFailed(ReadFault::ReadBitClear));
        }

        let len = buffer.len();
        let [slot] = buffer else {
            self.trace.push(Direction::Rx, address, Vec::new(), false);
            error!("bus read of {len} byte(s), only single byte reads are supported");
            return Err(Error::BusReadFailed(ReadFault::BadLength { len }));
        };

        *slot = self.record.data;
        let latched = *slot == self.record.data;
        self.trace.push(Direction::Rx, address, vec![*slot], latched);

        if !latched {
            error!("data was not read correctly from 0x{address:02X}");
            return Err(Error::BusReadFailed(ReadFault::LatchMismatch));
        }
        debug!("bus read 0x{address:02X}: 0x{:02X}", *slot);
        Ok(())
    }
}

impl Default for MockBus {
    fn default() -> Self {
        Self::new(TransactionRecord::default())
    }
}
