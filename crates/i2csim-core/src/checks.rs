//! Comparison of a simulated record against an expected one.

use log::error;

use crate::error::{Error, Field, Result};
use crate::record::TransactionRecord;

/// First field, in record order, where the two records differ.
pub fn first_mismatch(simulated: &TransactionRecord, expected: &TransactionRecord) -> Option<Field> {
    if simulated.device_address != expected.device_address {
        Some(Field::DeviceAddress)
    } else if simulated.register_address != expected.register_address {
        Some(Field::RegisterAddress)
    } else if simulated.data != expected.data {
        Some(Field::Data)
    } else {
        None
    }
}

pub fn check_payloads(simulated: &TransactionRecord, expected: &TransactionRecord) -> Result<()> {
    match first_mismatch(simulated, expected) {
        Some(field) => Err(Error::PayloadMismatch { field }),
        None => Ok(()),
    }
}

/// Like [`check_payloads`], but logs the diverging field and returns a flag.
pub fn payloads_match(simulated: &TransactionRecord, expected: &TransactionRecord) -> bool {
    match check_payloads(simulated, expected) {
        Ok(()) => true,
        Err(e) => {
            error!("{e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected() -> TransactionRecord {
        TransactionRecord::new(0xA1, 0x20, 0x30)
    }

    #[test]
    fn test_identical_records_match() {
        assert_eq!(first_mismatch(&expected(), &expected()), None);
        assert!(payloads_match(&expected(), &expected()));
        assert_eq!(check_payloads(&expected(), &expected()), Ok(()));
    }

    #[test]
    fn test_device_address_mismatch() {
        let simulated = TransactionRecord {
            device_address: 0xA0,
            ..expected()
        };
        assert_eq!(first_mismatch(&simulated, &expected()), Some(Field::DeviceAddress));
        assert!(!payloads_match(&simulated, &expected()));
    }

    #[test]
    fn test_register_address_mismatch() {
        let simulated = TransactionRecord {
            register_address: 0x21,
            ..expected()
        };
        assert_eq!(
            check_payloads(&simulated, &expected()),
            Err(Error::PayloadMismatch {
                field: Field::RegisterAddress
            })
        );
    }

    #[test]
    fn test_data_mismatch() {
        let simulated = TransactionRecord {
            data: 0x31,
            ..expected()
        };
        assert_eq!(first_mismatch(&simulated, &expected()), Some(Field::Data));
    }

    #[test]
    fn test_reports_first_field_only() {
        let simulated = TransactionRecord::new(0x00, 0x00, 0x00);
        assert_eq!(first_mismatch(&simulated, &expected()), Some(Field::DeviceAddress));

        let simulated = TransactionRecord::new(0xA1, 0x00, 0x00);
        assert_eq!(first_mismatch(&simulated, &expected()), Some(Field::RegisterAddress));
    }

    #[test]
    fn test_mismatch_message_names_field() {
        let err = Error::PayloadMismatch {
            field: Field::RegisterAddress,
        };
        assert_eq!(err.to_string(), "Register address was not set correctly");
    }
}
