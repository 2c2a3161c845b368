//! Hash-addressed config file fetch and verification.

use crate::{CONFIG_DIR, Error, Result};
use coffer_config::ContentKey;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::*;

/// Upper bound on the size of any file loaded here. Bounds memory use
/// against corrupt or hostile inputs.
pub const MAX_CONFIG_FILE_SIZE: usize = 0x0010_0000;

/// Cache path of a hash-addressed config file under the data root:
/// `config/<first byte hex>/<second byte hex>/<full key hex>`.
pub fn config_file_path(data_root: &Path, key: &ContentKey) -> PathBuf {
    let hex = key.to_string();
    data_root
        .join(CONFIG_DIR)
        .join(&hex[0..2])
        .join(&hex[2..4])
        .join(&hex)
}

/// Load a whole text file, rejecting empty and oversized ones.
pub(crate) fn load_text_file(path: &Path) -> Result<Vec<u8>> {
    let data = fs::read(path)?;

    if data.is_empty() || data.len() >= MAX_CONFIG_FILE_SIZE {
        return Err(Error::InvalidFormat(format!(
            "file size {} out of range: {}",
            data.len(),
            path.display()
        )));
    }

    Ok(data)
}

/// Fetch the config file a content key addresses and verify it.
///
/// The loaded content's MD5 digest must equal the key; a mismatch is a
/// corruption error, distinct from the file being absent or malformed.
pub fn fetch_config_file(data_root: &Path, key: &ContentKey) -> Result<Vec<u8>> {
    if key.len() < 2 {
        return Err(Error::InvalidFormat(format!(
            "key {key} is too short to address a config file"
        )));
    }

    let path = config_file_path(data_root, key);
    debug!("Fetching config file {}", path.display());
    let data = load_text_file(&path)?;

    let digest = md5::compute(&data);
    if digest.0 != key.as_bytes() {
        return Err(Error::Corruption(format!(
            "config file {key} failed hash verification"
        )));
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_uses_two_prefix_levels() {
        let key: ContentKey = "deadbeef1234567890abcdef12345678".parse().unwrap();
        let path = config_file_path(Path::new("Data"), &key);
        assert_eq!(
            path,
            Path::new("Data/config/de/ad/deadbeef1234567890abcdef12345678")
        );
    }
}
