//! CAPSULE Protocol - Payload Codec
//!
//! CBOR encoding of the payload record carried inside an envelope.
//!
//! Wire format: an RFC 8949 CBOR map with three text keys:
//! ```text
//! { "message": text, "timestamp": int, "sender": text }
//! ```
//! Text keys keep the format self-describing, so peers can add fields
//! later without breaking existing decoders (unknown keys are ignored,
//! missing or mistyped required keys are rejected).

use serde::{Deserialize, Serialize};

use crate::core::DecodeError;

/// The structured application message carried inside an envelope.
///
/// Lives only for a single request/response cycle; one record is decoded
/// from the request and one is built for the reply. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadRecord {
    /// Message text.
    pub message: String,
    /// Seconds since the Unix epoch.
    pub timestamp: i64,
    /// Sender identifier.
    pub sender: String,
}

impl PayloadRecord {
    /// Create a new payload record.
    pub fn new(message: impl Into<String>, timestamp: i64, sender: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timestamp,
            sender: sender.into(),
        }
    }

    /// Encode to CBOR.
    ///
    /// Total for in-memory records: strings and an integer written into a
    /// `Vec` cannot fail to serialize.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        ciborium::ser::into_writer(self, &mut buf)
            .expect("CBOR encoding of a record into a Vec cannot fail");
        buf
    }

    /// Decode from CBOR.
    ///
    /// The input is untrusted even though the caller has already verified
    /// the AEAD tag: a peer holding the shared key can still send garbage.
    /// Any structural mismatch (truncation, wrong types, missing fields,
    /// not a map at all) is rejected; nothing is defaulted.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        ciborium::de::from_reader(data).map_err(|e| DecodeError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let record = PayloadRecord::new("hello", 1_700_000_000, "client-1");

        let encoded = record.encode();
        let decoded = PayloadRecord::decode(&encoded).unwrap();
        assert_eq!(decoded, record);
    }

    #[test]
    fn test_wire_format_interop() {
        // CBOR encoding of {"message": "hi", "timestamp": 1700000000,
        // "sender": "client-1"} as produced by the Go and Node peers.
        let fixture = hex::decode(
            "a3676d6573736167656268696974696d657374616d701a6553f100\
             6673656e64657268636c69656e742d31",
        )
        .unwrap();

        let decoded = PayloadRecord::decode(&fixture).unwrap();
        assert_eq!(decoded.message, "hi");
        assert_eq!(decoded.timestamp, 1_700_000_000);
        assert_eq!(decoded.sender, "client-1");

        // Our own encoding matches byte for byte (same keys, same order).
        let record = PayloadRecord::new("hi", 1_700_000_000, "client-1");
        assert_eq!(record.encode(), fixture);
    }

    #[test]
    fn test_decode_truncated() {
        let record = PayloadRecord::new("hello", 42, "a");
        let mut encoded = record.encode();
        encoded.truncate(encoded.len() - 3);

        let result = PayloadRecord::decode(&encoded);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_not_cbor() {
        let result = PayloadRecord::decode(b"definitely not cbor");
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_empty() {
        let result = PayloadRecord::decode(&[]);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_missing_field() {
        // {"message": "hi"} - well-formed CBOR, wrong schema.
        let data = hex::decode("a1676d657373616765626869").unwrap();
        let result = PayloadRecord::decode(&data);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_wrong_field_type() {
        // {"message": 7, "timestamp": 1, "sender": "x"}
        let data =
            hex::decode("a3676d657373616765076974696d657374616d70016673656e6465726178").unwrap();
        let result = PayloadRecord::decode(&data);
        assert!(matches!(result, Err(DecodeError::Malformed(_))));
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        // The canonical three fields plus {"extra": "x"} appended as a
        // fourth map entry - forward compatibility.
        let data = hex::decode(
            "a4676d6573736167656268696974696d657374616d701a6553f100\
             6673656e64657268636c69656e742d316565787472616178",
        )
        .unwrap();

        let decoded = PayloadRecord::decode(&data).unwrap();
        assert_eq!(decoded.message, "hi");
        assert_eq!(decoded.sender, "client-1");
    }

    #[test]
    fn test_negative_timestamp() {
        let record = PayloadRecord::new("old", -1, "client");
        let decoded = PayloadRecord::decode(&record.encode()).unwrap();
        assert_eq!(decoded.timestamp, -1);
    }
}
