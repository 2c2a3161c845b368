//! Parsers for the vendor configuration files that describe a Coffer
//! storage build: the CDN config file (archive set) and the CDN build
//! file (content keys), plus the text primitives they share.
//!
//! The file syntax is INI-like `name = value` lines over unschema'd
//! text; several historical format generations exist, so matching is
//! deliberately lenient about separators and silently skips lines it
//! does not recognize.

pub mod config;
mod error;
mod key;
mod product;
pub mod scan;

pub use config::{BuildConfig, CdnConfig};
pub use error::Error;
pub use key::{ContentKey, MAX_KEY_LENGTH, parse_key_list, parse_single_key};
pub use product::Product;

pub type Result<T> = std::result::Result<T, Error>;
