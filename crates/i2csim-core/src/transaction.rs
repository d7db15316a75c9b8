//! Register-level transactions on the mock bus.

use log::debug;

use crate::address::{try_encode_address, RwBit};
use crate::bus::{BusOp, MockBus};
use crate::error::Result;

impl MockBus {
    /// Reads one register: address phase with the read bit, register select,
    /// then a single byte read.
    ///
    /// Fails with `AddressBitMismatch` for a device id above 0x7F, before any
    /// bus activity. Bus failures propagate as-is and abort the read.
    pub fn register_read(&mut self, device_address: u8, register_address: u8) -> Result<u8> {
        let address = try_encode_address(device_address, RwBit::Read)?;

        self.record.device_address = address;
        // Data is left alone: it is what the device will report.
        self.record.register_address = 0;

        self.transfer(BusOp::SelectRegister(register_address))?;

        let mut buf = [0u8; 1];
        self.mock_read(&mut buf)?;

        debug!(
            "register read dev=0x{device_address:02X} reg=0x{register_address:02X} -> 0x{:02X}",
            buf[0]
        );
        Ok(buf[0])
    }

    /// Writes `data` to one register in a single two-byte write.
    pub fn register_write(
        &mut self,
        device_address: u8,
        register_address: u8,
        data: u8,
    ) -> Result<()> {
        let address = try_encode_address(device_address, RwBit::Write)?;

        self.record.device_address = address;
        self.record.register_address = 0;
        self.record.data = 0;

        self.transfer(BusOp::WriteRegisterData(register_address, data))?;

        debug!(
            "register write dev=0x{device_address:02X} reg=0x{register_address:02X} <- 0x{data:02X}"
        );
        Ok(())
    }
}
