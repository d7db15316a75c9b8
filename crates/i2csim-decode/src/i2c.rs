use i2csim_core::{decode_address, Direction, TraceEntry};
use serde::Serialize;

/// One addressed transfer on the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct I2cFrame {
    /// 7-bit device id.
    pub address: u8,
    pub rw: bool,
    pub data: Vec<u8>,
    pub acked: bool,
}

impl From<&TraceEntry> for I2cFrame {
    fn from(entry: &TraceEntry) -> Self {
        // Direction, not bit 0: register select runs under a read-configured address.
        let (address, _) = decode_address(entry.address);
        Self {
            address,
            rw: entry.direction == Direction::Rx,
            data: entry.data.clone(),
            acked: entry.acked,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegisterAccess {
    Read { device: u8, register: u8, value: u8 },
    Write { device: u8, register: u8, value: u8 },
}

pub fn decode_frames<'a, I>(entries: I) -> Vec<I2cFrame>
where
    I: IntoIterator<Item = &'a TraceEntry>,
{
    entries.into_iter().map(I2cFrame::from).collect()
}

/// Pairs frames into register accesses.
///
/// A one-byte write followed by a one-byte read of the same device is a
/// register read; a write of two or more bytes is a register write. NACKed
/// frames and anything else are skipped.
pub fn decode_register_accesses(frames: &[I2cFrame]) -> Vec<RegisterAccess> {
    let mut accesses = Vec::new();
    let mut i = 0;
    while i < frames.len() {
        let frame = &frames[i];
        if !frame.acked || frame.rw {
            i += 1;
            continue;
        }

        match frame.data.as_slice() {
            [register] => {
                let value = frames
                    .get(i + 1)
                    .filter(|next| next.acked && next.rw && next.address == frame.address)
                    .and_then(|next| match next.data.as_slice() {
                        [value] => Some(*value),
                        _ => None,
                    });
                if let Some(value) = value {
                    accesses.push(RegisterAccess::Read {
                        device: frame.address,
                        register: *register,
                        value,
                    });
                    i += 2;
                    continue;
                }
            }
            [register, value, ..] => accesses.push(RegisterAccess::Write {
                device: frame.address,
                register: *register,
                value: *value,
            }),
            [] => {}
        }
        i += 1;
    }
    accesses
}
