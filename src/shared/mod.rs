//! Shared utilities used across all domain modules: amount conversion,
//! serde helpers and the input validation applied before any request.

pub mod amount;
pub mod serde_util;

pub use amount::{AmountConverter, AmountError};

use crate::error::{Error, Result};

/// Length of a hex-encoded block or transaction hash.
pub const HASH_HEX_LEN: usize = 64;

/// Fail with `Must supply <field>` when `value` is empty or whitespace.
pub fn require_non_empty(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::Validation(format!("Must supply {}", field)));
    }
    Ok(())
}

/// Fail when a required list is empty.
pub fn require_non_empty_list<T>(values: &[T], field: &str) -> Result<()> {
    if values.is_empty() {
        return Err(Error::Validation(format!("Must supply an array of {}", field)));
    }
    Ok(())
}

/// Validate that a hash is 64 hex characters (32 bytes).
pub fn validate_hash(value: &str, field: &str) -> Result<()> {
    require_non_empty(value, field)?;
    if value.len() != HASH_HEX_LEN {
        return Err(Error::Validation(format!(
            "{} must be {} hex characters, got {}",
            field,
            HASH_HEX_LEN,
            value.len()
        )));
    }
    hex::decode(value)
        .map_err(|_| Error::Validation(format!("{} must contain only hex characters", field)))?;
    Ok(())
}

/// Validate every hash in a non-empty list.
pub fn validate_hashes<S: AsRef<str>>(values: &[S], field: &str) -> Result<()> {
    require_non_empty_list(values, field)?;
    for value in values {
        validate_hash(value.as_ref(), field)?;
    }
    Ok(())
}

/// Validate a hex-encoded blob (raw block or transaction).
pub fn validate_hex_blob(value: &str, field: &str) -> Result<()> {
    require_non_empty(value, field)?;
    hex::decode(value)
        .map_err(|_| Error::Validation(format!("{} must be hex encoded", field)))?;
    Ok(())
}

/// Percent-encode a caller-supplied value used as a path segment.
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: &str = "7fb97df81221dd1366051b2d0bc7f49c66c22ac4431d879c895b06d66ef66f4c";

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("abc", "address").is_ok());
        let err = require_non_empty("  ", "address").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: Must supply address");
    }

    #[test]
    fn test_validate_hash() {
        assert!(validate_hash(HASH, "hash").is_ok());
        assert!(validate_hash(&HASH[..63], "hash").is_err());
        assert!(validate_hash(&HASH.replace('f', "g"), "hash").is_err());
        assert!(validate_hash("", "hash").is_err());
    }

    #[test]
    fn test_validate_hashes_requires_entries() {
        let empty: [&str; 0] = [];
        assert!(validate_hashes(&empty, "transaction hashes").is_err());
        assert!(validate_hashes(&[HASH], "transaction hashes").is_ok());
        assert!(validate_hashes(&[HASH, "nope"], "transaction hashes").is_err());
    }

    #[test]
    fn test_validate_hex_blob() {
        assert!(validate_hex_blob("0400850d", "block blob").is_ok());
        assert!(validate_hex_blob("04008", "block blob").is_err());
        assert!(validate_hex_blob("", "block blob").is_err());
    }

    #[test]
    fn test_path_segment_encodes_reserved_characters() {
        assert_eq!(path_segment("abc"), "abc");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }
}
