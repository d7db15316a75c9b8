//! Scenario settings: which read and which write the CLI drives.
//!
//! Loaded from JSON; any missing field falls back to the built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::address::{encode_address, RwBit};
use crate::error::ConfigError;
use crate::record::TransactionRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadStep {
    pub device_address: u8,
    pub register_address: u8,
    /// Byte the simulated device reports.
    pub seed: u8,
}

impl Default for ReadStep {
    fn default() -> Self {
        Self {
            device_address: 0x50,
            register_address: 0x20,
            seed: 0x30,
        }
    }
}

impl ReadStep {
    pub fn expected(&self) -> TransactionRecord {
        TransactionRecord::new(
            encode_address(self.device_address, RwBit::Read),
            self.register_address,
            self.seed,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriteStep {
    pub device_address: u8,
    pub register_address: u8,
    pub data: u8,
}

impl Default for WriteStep {
    fn default() -> Self {
        Self {
            device_address: 0x45,
            register_address: 0x10,
            data: 0x55,
        }
    }
}

impl WriteStep {
    pub fn expected(&self) -> TransactionRecord {
        TransactionRecord::new(
            encode_address(self.device_address, RwBit::Write),
            self.register_address,
            self.data,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub read: ReadStep,
    pub write: WriteStep,
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    /// `<config dir>/i2csim/scenario.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("i2csim").join("scenario.json"))
    }

    /// Loads `explicit` if given, else the default path if that file exists,
    /// else the built-in scenario.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            info!("loading scenario from {}", path.display());
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                info!("loading scenario from {}", path.display());
                Self::load(&path)
            }
            _ => {
                info!("using built-in scenario");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("i2csim-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let scenario = Scenario::default();
        assert_eq!(scenario.read.expected(), TransactionRecord::new(0xA1, 0x20, 0x30));
        assert_eq!(scenario.write.expected(), TransactionRecord::new(0x8A, 0x10, 0x55));
    }

    #[test]
    fn test_parse_partial_json() {
        let scenario: Scenario =
            serde_json::from_str(r#"{ "write": { "data": 170 } }"#).unwrap();

        assert_eq!(scenario.read, ReadStep::default());
        assert_eq!(scenario.write.device_address, 0x45);
        assert_eq!(scenario.write.data, 0xAA);
    }

    #[test]
    fn test_load_file() {
        let path = temp_file(
            "load.json",
            r#"{ "read": { "device_address": 104, "register_address": 117, "seed": 113 } }"#,
        );
        let scenario = Scenario::load(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(scenario.read.device_address, 0x68);
        assert_eq!(scenario.read.expected(), TransactionRecord::new(0xD1, 0x75, 0x71));
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir().join("i2csim-does-not-exist.json");
        let result = Scenario::load(&path);
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_file("invalid.json", r#"{ "read": { "seed": 300 } }"#);
        let result = Scenario::load(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_explicit_path_must_load() {
        let path = std::env::temp_dir().join("i2csim-explicit-missing.json");
        assert!(Scenario::load_or_default(Some(&path)).is_err());
    }
}
