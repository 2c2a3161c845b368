//! PSV field type definitions and parsing

use crate::error::{Error, Result};
use std::fmt;

/// A PSV field type with its declared length.
///
/// The length is advisory metadata from the header (`HEX:16` declares a
/// 16-byte key, `STRING:0` an unbounded string); values are not truncated
/// against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PsvFieldType {
    /// Decimal number with storage size in bytes (e.g., 4 = uint32)
    Dec(u32),
    /// Hexadecimal blob with byte count (N bytes = N*2 hex characters)
    Hex(u32),
    /// String with maximum length (0 = unlimited)
    String(u32),
}

impl PsvFieldType {
    /// Parse a type specification like `DEC:1`, `HEX:16`, `STRING:0`.
    ///
    /// The type name is matched case-insensitively but strictly: it must
    /// be exactly `DEC`, `HEX`, or `STRING`, immediately followed by the
    /// colon. Longer spellings (`DECIMAL:1`) do not parse.
    pub fn parse(type_spec: &str) -> Result<Self> {
        let Some((name, length)) = type_spec.split_once(':') else {
            return Err(Error::InvalidFieldType {
                field_type: type_spec.to_string(),
            });
        };

        let length: u32 = length.parse().map_err(|_| Error::InvalidFieldType {
            field_type: type_spec.to_string(),
        })?;

        if name.eq_ignore_ascii_case("DEC") {
            Ok(Self::Dec(length))
        } else if name.eq_ignore_ascii_case("HEX") {
            Ok(Self::Hex(length))
        } else if name.eq_ignore_ascii_case("STRING") {
            Ok(Self::String(length))
        } else {
            Err(Error::InvalidFieldType {
                field_type: type_spec.to_string(),
            })
        }
    }

    /// Type name as it appears in headers (uppercase).
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Dec(_) => "DEC",
            Self::Hex(_) => "HEX",
            Self::String(_) => "STRING",
        }
    }

    /// Declared length from the header.
    pub fn length(&self) -> u32 {
        match self {
            Self::Dec(len) | Self::Hex(len) | Self::String(len) => *len,
        }
    }

    /// `true` when both values are the same type variant, regardless of
    /// declared length.
    pub fn same_kind(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::Dec(_), Self::Dec(_))
                | (Self::Hex(_), Self::Hex(_))
                | (Self::String(_), Self::String(_))
        )
    }
}

impl fmt::Display for PsvFieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_name(), self.length())
    }
}
