//! Storage-open orchestration.
//!
//! Resolution runs as an explicit state machine. Each stage either
//! completes fully and hands its output to the next stage, or fails
//! and aborts the whole open; the only designed alternative is the
//! modern-then-legacy manifest fallback. No partially resolved
//! descriptor ever escapes.

use crate::agent::discover_install;
use crate::descriptor::BuildDescriptor;
use crate::fetch::fetch_config_file;
use crate::manifest::ManifestFields;
use crate::{BUILD_DB_FILE, BUILD_INFO_FILE, Error, INDEX_DIR, INDEX_DIR_LEGACY, Result};
use coffer_config::{BuildConfig, CdnConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::*;

/// Pipeline stages, each carrying the fully resolved output of the
/// stages before it.
enum OpenStage {
    TryModernManifest,
    TryLegacyManifest,
    FetchConfigFile(ManifestFields),
    ParseConfigFile(ManifestFields, Vec<u8>),
    FetchBuildFile(ManifestFields, CdnConfig),
    ParseBuildFile(ManifestFields, CdnConfig, Vec<u8>),
    ResolveIndexDirectory(ManifestFields, CdnConfig, BuildConfig),
}

/// Resolve the build configuration of the storage holding `path`.
///
/// `path` may be the installation root or anything under it; the root
/// is found through the agent database. The returned descriptor is
/// complete and verified, ready for the storage engine to open the
/// index files under [`BuildDescriptor::index_path`].
pub fn open(path: impl AsRef<Path>) -> Result<BuildDescriptor> {
    open_install(path.as_ref())
}

fn open_install(path: &Path) -> Result<BuildDescriptor> {
    let (install_root, data_root) = discover_install(path)?;
    info!("Resolving build configuration for {}", install_root.display());

    let mut stage = OpenStage::TryModernManifest;

    loop {
        stage = match stage {
            OpenStage::TryModernManifest => {
                match read_manifest(&install_root, BUILD_INFO_FILE)
                    .and_then(|text| ManifestFields::from_build_info(&text))
                {
                    Ok(fields) => OpenStage::FetchConfigFile(fields),
                    Err(e) => {
                        debug!("Modern manifest did not resolve: {e}");
                        OpenStage::TryLegacyManifest
                    }
                }
            }

            OpenStage::TryLegacyManifest => {
                match read_manifest(&install_root, BUILD_DB_FILE)
                    .and_then(|text| ManifestFields::from_build_db(&text))
                {
                    Ok(fields) => OpenStage::FetchConfigFile(fields),
                    Err(e) => {
                        debug!("Legacy manifest did not resolve: {e}");
                        return Err(Error::Corruption(
                            "no usable build manifest at the storage root".to_string(),
                        ));
                    }
                }
            }

            OpenStage::FetchConfigFile(manifest) => {
                let data = fetch_config_file(&data_root, &manifest.cdn_config_key)?;
                OpenStage::ParseConfigFile(manifest, data)
            }

            OpenStage::ParseConfigFile(manifest, data) => {
                let text = decode_text(data)?;
                OpenStage::FetchBuildFile(manifest, CdnConfig::parse(&text)?)
            }

            OpenStage::FetchBuildFile(manifest, cdn_config) => {
                let data = fetch_config_file(&data_root, &manifest.cdn_build_key)?;
                OpenStage::ParseBuildFile(manifest, cdn_config, data)
            }

            OpenStage::ParseBuildFile(manifest, cdn_config, data) => {
                let text = decode_text(data)?;
                OpenStage::ResolveIndexDirectory(manifest, cdn_config, BuildConfig::parse(&text)?)
            }

            OpenStage::ResolveIndexDirectory(manifest, cdn_config, build_config) => {
                let index_path = resolve_index_directory(&data_root)?;

                return Ok(BuildDescriptor {
                    product: build_config.product,
                    build_number: build_config.build_number,
                    default_locale: manifest.default_locale,
                    cdn_build_key: manifest.cdn_build_key,
                    cdn_config_key: manifest.cdn_config_key,
                    cdn_url: manifest.cdn_url,
                    archive_group: cdn_config.archive_group,
                    archives: cdn_config.archives,
                    patch_archive_group: cdn_config.patch_archive_group,
                    patch_archives: cdn_config.patch_archives,
                    root_key: build_config.root,
                    patch_key: build_config.patch,
                    download_key: build_config.download,
                    install_key: build_config.install,
                    encoding_key: build_config.encoding.0,
                    encoding_ekey: build_config.encoding.1,
                    install_root,
                    data_root,
                    index_path,
                });
            }
        };
    }
}

fn read_manifest(install_root: &Path, name: &str) -> Result<String> {
    Ok(fs::read_to_string(install_root.join(name))?)
}

fn decode_text(data: Vec<u8>) -> Result<String> {
    String::from_utf8(data)
        .map_err(|_| Error::InvalidFormat("config file is not valid UTF-8 text".to_string()))
}

/// Probe for the index subdirectory: the current-generation name
/// first, then the alternate used by early alpha builds.
fn resolve_index_directory(data_root: &Path) -> Result<PathBuf> {
    for name in [INDEX_DIR, INDEX_DIR_LEGACY] {
        let candidate = data_root.join(name);
        if candidate.is_dir() {
            debug!("Using index directory {}", candidate.display());
            return Ok(candidate);
        }
    }

    Err(Error::NotFound(format!(
        "no index directory under {}",
        data_root.display()
    )))
}
