use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Clone, PartialEq)]
pub struct TraceEntry {
    pub timestamp: u64,
    pub direction: Direction,
    /// Encoded address byte the phase ran under.
    pub address: u8,
    pub data: Vec<u8>,
    pub acked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Rx,
    Tx,
}

/// Bounded log of bus phases, oldest first.
#[derive(Debug)]
pub struct BusTrace {
    entries: VecDeque<TraceEntry>,
    max_entries: usize,
    filter_rx: bool,
    filter_tx: bool,
}

impl BusTrace {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries,
            filter_rx: true,
            filter_tx: true,
        }
    }

    pub fn set_filter(&mut self, show_rx: bool, show_tx: bool) {
        self.filter_rx = show_rx;
        self.filter_tx = show_tx;
    }

    pub fn push(&mut self, direction: Direction, address: u8, data: Vec<u8>, acked: bool) {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        self.entries.push_back(TraceEntry {
            timestamp,
            direction,
            address,
            data,
            acked,
        });

        while self.entries.len() > self.max_entries {
            self.entries.pop_front();
        }
    }

    pub fn entries(&self) -> &VecDeque<TraceEntry> {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Renders visible entries as `TX 0xA0: 20 55` lines, NACKed phases suffixed.
    ///
    /// Timestamps are the UTC time of day, marked with a trailing `Z`.
    pub fn to_text(&self, show_timestamp: bool) -> String {
        let mut result = String::new();
        for entry in &self.entries {
            if (entry.direction == Direction::Rx && !self.filter_rx)
                || (entry.direction == Direction::Tx && !self.filter_tx)
            {
                continue;
            }

            if show_timestamp {
                let millis = entry.timestamp % 1000;
                let total_secs = entry.timestamp / 1000;
                let hours = (total_secs / 3600) % 24;
                let minutes = (total_secs / 60) % 60;
                let seconds = total_secs % 60;
                result.push_str(&format!("[{hours:02}:{minutes:02}:{seconds:02}.{millis:03}Z] "));
            }

            let prefix = match entry.direction {
                Direction::Rx => "RX",
                Direction::Tx => "TX",
            };
            result.push_str(&format!("{prefix} 0x{:02X}:", entry.address));
            for byte in &entry.data {
                result.push_str(&format!(" {byte:02X}"));
            }
            if !entry.acked {
                result.push_str(" NACK");
            }
            result.push('\n');
        }
        result
    }
}

impl Default for BusTrace {
    fn default() -> Self {
        Self::new(256)
    }
}
