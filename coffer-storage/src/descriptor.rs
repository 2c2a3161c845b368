//! The resolved build descriptor.

use crate::locale::LocaleFlags;
use coffer_config::{ContentKey, Product};
use std::path::PathBuf;

/// Everything a storage engine needs to open a build: the manifest
/// selection, the CDN archive set, the metadata content keys, and the
/// resolved filesystem paths.
///
/// A descriptor only ever exists fully populated; [`crate::open`]
/// either returns one with every resolution stage completed and
/// verified, or an error and nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildDescriptor {
    /// Product the build belongs to, when the build file named one.
    pub product: Option<Product>,

    /// Build number; 0 when the build file carried no build name.
    pub build_number: u32,

    /// Default locale mask from the manifest's tag string. May be zero.
    pub default_locale: LocaleFlags,

    /// Key addressing the CDN build file.
    pub cdn_build_key: ContentKey,

    /// Key addressing the CDN config file.
    pub cdn_config_key: ContentKey,

    /// CDN URL: host concatenated with path.
    pub cdn_url: String,

    /// Key of the archive grouping index.
    pub archive_group: ContentKey,

    /// Keys of all archives backing the storage. Never empty.
    pub archives: Vec<ContentKey>,

    /// Key of the patch-archive grouping index, when present.
    pub patch_archive_group: Option<ContentKey>,

    /// Keys of patch archives. Empty when the storage has none.
    pub patch_archives: Vec<ContentKey>,

    /// Content key of the root manifest.
    pub root_key: Option<ContentKey>,

    /// Content key of the patch manifest.
    pub patch_key: Option<ContentKey>,

    /// Content key of the download manifest.
    pub download_key: Option<ContentKey>,

    /// Content key of the install manifest.
    pub install_key: Option<ContentKey>,

    /// Content key of the encoding table.
    pub encoding_key: ContentKey,

    /// Encoded key of the encoding table.
    pub encoding_ekey: ContentKey,

    /// Installation root (the directory holding the manifest files).
    pub install_root: PathBuf,

    /// Data directory named by the agent database.
    pub data_root: PathBuf,

    /// Index subdirectory the storage engine should open.
    pub index_path: PathBuf,
}
