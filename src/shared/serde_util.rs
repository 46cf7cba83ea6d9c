//! Custom serde helpers for daemon wire formats.

/// Deserializes a binary blob that the daemon emits either as a JSON array
/// of byte values or as an already hex-encoded string.
pub mod byte_buffer {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Bytes(Vec<u8>),
        Hex(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Bytes(bytes) => Ok(bytes),
            Raw::Hex(s) => {
                hex::decode(&s).map_err(|e| D::Error::custom(format!("Invalid hex buffer: {}", e)))
            }
        }
    }
}
