//! Offline license keys.
//!
//! A key is a 32-bit rolling hash of the normalized system ID plus a salt,
//! rendered as `KEY-XXXX-XXXX`. The admin and the user derive the same key
//! independently, so pairing needs no network round trip.
//!
//! The hash runs over UTF-16 code units with two's-complement wraparound and
//! must stay bit-for-bit stable: every key already issued depends on it.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Salt shared by key generation and validation. Changing it revokes every issued key.
pub const DEFAULT_SALT: &str = "FICUS-SENTINEL-2.1";

pub const REQUEST_TOKEN_PREFIX: &str = "REQ-";
pub const REQUEST_TOKEN_LEN: usize = 24;

/// Normalized (trimmed, uppercased) system identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemId(String);

impl SystemId {
    /// Returns `None` when the input is blank.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            None
        } else {
            Some(SystemId(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

fn rolling_hash(input: &str) -> i32 {
    input
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Renders a hash as `KEY-XXXX-XXXX`.
///
/// `i32::MIN` has no positive counterpart in `i32`; its magnitude is taken
/// as the unsigned value `0x80000000`, so it renders as `KEY-8000-0000`.
fn render_key(hash: i32) -> String {
    let hex = format!("{:08X}", hash.unsigned_abs());
    let hex = &hex[..8];
    format!("KEY-{}-{}", &hex[..4], &hex[4..])
}

/// Derives the license key for a system ID. Blank IDs yield an empty string.
pub fn derive_key(system_id: &str, salt: &str) -> String {
    let normalized = normalize(system_id);
    if normalized.is_empty() {
        return String::new();
    }
    let combined = format!("{normalized}{salt}");
    render_key(rolling_hash(&combined))
}

/// Checks a user-supplied key against the one derived with [`DEFAULT_SALT`].
pub fn validate(system_id: &str, provided_key: &str) -> bool {
    let expected = derive_key(system_id, DEFAULT_SALT);
    if expected.is_empty() {
        return false;
    }
    normalize(provided_key) == expected
}

#[derive(Serialize)]
struct RequestPayload<'a> {
    sid: &'a str,
    ts: i64,
}

/// Packs the system ID into a short shareable token.
///
/// The token is cut to [`REQUEST_TOKEN_LEN`] characters and is meant for humans;
/// it is not decodable.
pub fn encode_request_token(system_id: &str) -> String {
    encode_request_token_at(system_id, Utc::now().timestamp_millis())
}

pub fn encode_request_token_at(system_id: &str, ts_millis: i64) -> String {
    let normalized = normalize(system_id);
    let payload = RequestPayload {
        sid: &normalized,
        ts: ts_millis,
    };
    // Serializing a two-field struct cannot fail.
    let json = serde_json::to_string(&payload).unwrap_or_default();
    let mut token = format!("{REQUEST_TOKEN_PREFIX}{}", BASE64.encode(json));
    token.truncate(REQUEST_TOKEN_LEN);
    token
}

/// Passthrough: request tokens are truncated and carry no recoverable ID.
/// Anything that is not a token is treated as a typed system ID.
pub fn decode_request_token(token: &str) -> String {
    if token.starts_with(REQUEST_TOKEN_PREFIX) {
        token.to_string()
    } else {
        token.to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_key_shape(key: &str) -> bool {
        let bytes = key.as_bytes();
        key.len() == 13
            && key.starts_with("KEY-")
            && bytes[8] == b'-'
            && key[4..8]
                .chars()
                .chain(key[9..].chars())
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }

    #[test]
    fn test_pinned_vector() {
        assert_eq!(derive_key("ABC123", DEFAULT_SALT), "KEY-5A40-EE15");
        assert_eq!(derive_key("TRADER-01", DEFAULT_SALT), "KEY-4C54-2025");
    }

    #[test]
    fn test_hash_without_salt() {
        // "ABC" hashes to 64578 = 0xFC42
        assert_eq!(derive_key("abc", ""), "KEY-0000-FC42");
        // negative accumulator, rendered by magnitude
        assert_eq!(rolling_hash("TRADER-01"), -754_602_848);
        assert_eq!(derive_key("TRADER-01", ""), "KEY-2CFA-5360");
    }

    #[test]
    fn test_min_value_edge_case() {
        assert_eq!(render_key(i32::MIN), "KEY-8000-0000");
        assert_eq!(render_key(i32::MAX), "KEY-7FFF-FFFF");
        assert_eq!(render_key(-1), "KEY-0000-0001");
    }

    #[test]
    fn test_hash_uses_utf16_units() {
        assert_eq!(derive_key("école-7", ""), "KEY-0069-F2A8");
    }

    #[test]
    fn test_deterministic_and_shaped() {
        for sid in ["ABC123", "x9", "  trader-01 ", "ÉCOLE-7", "ABCDEFGHIJKLMNOP"] {
            let a = derive_key(sid, DEFAULT_SALT);
            let b = derive_key(sid, DEFAULT_SALT);
            assert_eq!(a, b);
            assert!(has_key_shape(&a), "bad shape: {a}");
        }
    }

    #[test]
    fn test_case_and_whitespace_invariance() {
        let k = derive_key("ABC", DEFAULT_SALT);
        assert_eq!(derive_key(" abc ", DEFAULT_SALT), k);
        assert_eq!(derive_key("abc", DEFAULT_SALT), k);
    }

    #[test]
    fn test_empty_system_id() {
        assert_eq!(derive_key("", DEFAULT_SALT), "");
        assert_eq!(derive_key("   ", DEFAULT_SALT), "");
        assert!(!validate("", "KEY-0000-0000"));
        assert!(!validate("  ", ""));
        assert!(SystemId::parse("  ").is_none());
    }

    #[test]
    fn test_validate() {
        let key = derive_key("abc123", DEFAULT_SALT);
        assert!(validate("abc123", &key));
        assert!(validate(" ABC123", &format!("  {} ", key.to_lowercase())));
        assert!(!validate("abc123", &format!("{key}X")));
        assert!(!validate("abc124", &key));
    }

    #[test]
    fn test_request_token() {
        let token = encode_request_token_at(" abc123 ", 1_700_000_000_000);
        assert_eq!(token.len(), REQUEST_TOKEN_LEN);
        assert!(token.starts_with(REQUEST_TOKEN_PREFIX));
        // base64 of `{"sid":"ABC123` ...
        assert_eq!(token, "REQ-eyJzaWQiOiJBQkMxMjMi");
        assert_eq!(encode_request_token("abc123").len(), REQUEST_TOKEN_LEN);
    }

    #[test]
    fn test_decode_is_passthrough() {
        assert_eq!(decode_request_token("REQ-eyJzaWQi"), "REQ-eyJzaWQi");
        assert_eq!(decode_request_token("abc123"), "ABC123");
    }

    #[test]
    fn test_system_id_normalizes() {
        let sid = SystemId::parse("  pc-01 ").unwrap();
        assert_eq!(sid.as_str(), "PC-01");
        assert_eq!(sid.len(), 5);
    }
}
