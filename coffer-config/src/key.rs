//! Binary content keys and their hex text encoding.

use crate::error::Error;
use crate::scan::is_value_separator;
use crate::Result;
use std::fmt;
use std::str::FromStr;

/// Maximum content key length in bytes (the MD5 digest size).
pub const MAX_KEY_LENGTH: usize = 16;

/// An owned binary content key of 1 to [`MAX_KEY_LENGTH`] bytes.
///
/// Keys identify content and metadata throughout the storage; they are
/// parsed from hex text and compared against MD5 digests byte-for-byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentKey {
    data: [u8; MAX_KEY_LENGTH],
    len: u8,
}

impl ContentKey {
    /// Decode a key from hex text.
    ///
    /// This is the single choke point for binary key parsing: the input
    /// must be non-empty, of even length, all ASCII hex digits (either
    /// case), and decode to at most [`MAX_KEY_LENGTH`] bytes.
    pub fn from_hex(text: &str) -> Result<Self> {
        if text.len() > MAX_KEY_LENGTH * 2 {
            return Err(Error::KeyTooLong(text.len() / 2));
        }
        if text.is_empty() || text.len() % 2 != 0 {
            return Err(Error::MalformedKey {
                value: text.to_string(),
            });
        }

        let len = text.len() / 2;
        let mut data = [0u8; MAX_KEY_LENGTH];
        hex::decode_to_slice(text, &mut data[..len]).map_err(|_| Error::MalformedKey {
            value: text.to_string(),
        })?;

        Ok(Self {
            data,
            len: len as u8,
        })
    }

    /// Build a key from raw bytes. `None` when the slice is empty or
    /// longer than [`MAX_KEY_LENGTH`].
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() > MAX_KEY_LENGTH {
            return None;
        }
        let mut data = [0u8; MAX_KEY_LENGTH];
        data[..bytes.len()].copy_from_slice(bytes);
        Some(Self {
            data,
            len: bytes.len() as u8,
        })
    }

    /// The key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len as usize]
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`: a key holds at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentKey({self})")
    }
}

impl FromStr for ContentKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Parse a list of hex keys separated by runs of value separators
/// (spaces or pipes). Any entry failing to decode fails the whole list.
pub fn parse_key_list(text: &str) -> Result<Vec<ContentKey>> {
    let mut keys = Vec::new();
    for run in text
        .split(|c: char| c.is_ascii() && is_value_separator(c as u8))
        .filter(|run| !run.is_empty())
    {
        keys.push(ContentKey::from_hex(run)?);
    }
    Ok(keys)
}

/// Parse a single hex key from a line segment: the first
/// separator-delimited run decodes, anything after it is ignored.
pub fn parse_single_key(text: &str) -> Result<ContentKey> {
    let run = text
        .split(|c: char| c.is_ascii() && is_value_separator(c as u8))
        .find(|run| !run.is_empty())
        .ok_or_else(|| Error::MalformedKey {
            value: text.to_string(),
        })?;
    ContentKey::from_hex(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_case_normalized() {
        let key = ContentKey::from_hex("DeadBeef00112233445566778899AABB").unwrap();
        assert_eq!(key.to_string(), "deadbeef00112233445566778899aabb");
        assert_eq!(key.len(), 16);

        let again = ContentKey::from_hex(&key.to_string()).unwrap();
        assert_eq!(key, again);
    }

    #[test]
    fn short_keys_are_valid() {
        let key = ContentKey::from_hex("aa").unwrap();
        assert_eq!(key.as_bytes(), &[0xaa]);
        assert_eq!(key.len(), 1);
    }

    #[test]
    fn rejects_odd_length() {
        assert!(matches!(
            ContentKey::from_hex("abc"),
            Err(Error::MalformedKey { .. })
        ));
    }

    #[test]
    fn rejects_non_hex_digits() {
        assert!(matches!(
            ContentKey::from_hex("zz"),
            Err(Error::MalformedKey { .. })
        ));
        assert!(matches!(
            ContentKey::from_hex("a bb"),
            Err(Error::MalformedKey { .. })
        ));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(ContentKey::from_hex("").is_err());
    }

    #[test]
    fn rejects_oversized_keys() {
        // 17 bytes, one over the maximum.
        let long = "00".repeat(MAX_KEY_LENGTH + 1);
        assert!(matches!(
            ContentKey::from_hex(&long),
            Err(Error::KeyTooLong(17))
        ));
    }

    #[test]
    fn key_list_splits_on_spaces_and_pipes() {
        let keys = parse_key_list("AA BB|CC").unwrap();
        assert_eq!(keys.len(), 3);
        assert_eq!(keys[0].as_bytes(), &[0xaa]);
        assert_eq!(keys[1].as_bytes(), &[0xbb]);
        assert_eq!(keys[2].as_bytes(), &[0xcc]);
    }

    #[test]
    fn key_list_collapses_separator_runs() {
        let keys = parse_key_list("  aa   bb || cc ").unwrap();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn key_list_empty_input_yields_no_keys() {
        assert_eq!(parse_key_list("").unwrap().len(), 0);
        assert_eq!(parse_key_list("   ").unwrap().len(), 0);
    }

    #[test]
    fn key_list_fails_as_a_whole() {
        assert!(parse_key_list("aa xx bb").is_err());
    }

    #[test]
    fn single_key_ignores_trailing_runs() {
        let key = parse_single_key("aabb cc").unwrap();
        assert_eq!(key.as_bytes(), &[0xaa, 0xbb]);
    }

    #[test]
    fn single_key_requires_a_run() {
        assert!(parse_single_key("   ").is_err());
    }
}
