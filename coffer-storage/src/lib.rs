//! Build configuration resolution for local Coffer asset storages.
//!
//! Given an installation directory, this crate determines which binary
//! content keys identify the storage's metadata tables and which CDN
//! archive set backs it, by parsing the vendor manifest files at the
//! storage root and the hash-addressed config files under the data
//! directory. Opening never succeeds on unverified or incomplete
//! metadata: every stage either completes fully or fails the open.
//!
//! ```rust,ignore
//! let descriptor = coffer_storage::open("/games/hero")?;
//! println!("build {} from {}", descriptor.build_number, descriptor.cdn_url);
//! ```
//!
//! The underlying archive/index engine that consumes the resolved keys
//! lives elsewhere; this crate stops at the populated
//! [`BuildDescriptor`].

mod agent;
mod descriptor;
mod fetch;
mod locale;
mod manifest;
mod storage;

pub use agent::{data_dir_value, discover_install};
pub use descriptor::BuildDescriptor;
pub use fetch::{config_file_path, fetch_config_file};
pub use locale::LocaleFlags;
pub use manifest::ManifestFields;
pub use storage::open;

// Re-export the key and product types the descriptor exposes.
pub use coffer_config::{ContentKey, Product};

use thiserror::Error;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving a build configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage manifest did not parse.
    #[error("Manifest error: {0}")]
    Manifest(#[from] coffer_psv::Error),

    /// A config file field did not parse or validate.
    #[error("Config error: {0}")]
    Config(#[from] coffer_config::Error),

    /// Malformed data outside the config field parsers.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// An expected file or directory is absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Hash verification failed, or no manifest format resolved.
    #[error("Data corruption detected: {0}")]
    Corruption(String),
}

/// The error-code set surfaced to storage callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Operation completed.
    Success,
    /// Any parse or validation failure.
    BadFormat,
    /// Expected file or directory absent.
    NotFound,
    /// Allocation failure reported by the platform.
    NotEnoughMemory,
    /// Hash mismatch, or no manifest resolved at all.
    FileCorrupt,
}

impl Error {
    /// Collapse the error into the surfaced code set.
    ///
    /// I/O errors fold by kind: `NotFound` and `OutOfMemory` keep their
    /// identity, everything else surfaces as bad format. (Allocation
    /// failure inside this process aborts per Rust semantics and never
    /// reaches here.)
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io(e) => match e.kind() {
                std::io::ErrorKind::NotFound => ErrorCode::NotFound,
                std::io::ErrorKind::OutOfMemory => ErrorCode::NotEnoughMemory,
                _ => ErrorCode::BadFormat,
            },
            Self::Manifest(_) | Self::Config(_) | Self::InvalidFormat(_) => ErrorCode::BadFormat,
            Self::NotFound(_) => ErrorCode::NotFound,
            Self::Corruption(_) => ErrorCode::FileCorrupt,
        }
    }
}

/// Modern manifest filename at the storage root.
pub const BUILD_INFO_FILE: &str = ".build.info";

/// Legacy manifest filename at the storage root.
pub const BUILD_DB_FILE: &str = ".build.db";

/// Agent database filename used to discover the data directory.
pub const AGENT_DB_FILE: &str = ".agent.db";

/// Subdirectory of the data directory holding hash-addressed config
/// files.
pub const CONFIG_DIR: &str = "config";

/// Index subdirectory used by current builds.
pub const INDEX_DIR: &str = "data";

/// Index subdirectory used by early alpha builds.
pub const INDEX_DIR_LEGACY: &str = "darch";
