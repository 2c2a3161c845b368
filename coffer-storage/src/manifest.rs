//! Storage manifest resolvers.
//!
//! Two manifest generations name the active CDN build/config keys:
//! the modern `.build.info` PSV table with per-record `Active` flags,
//! and the legacy single-line `.build.db` agent format. Both resolve
//! into the same [`ManifestFields`]; each either fully succeeds or
//! fully fails, so trying them in order never leaves partial state.

use crate::locale::LocaleFlags;
use crate::{Error, Result};
use coffer_config::scan::lines;
use coffer_config::ContentKey;
use coffer_psv::PsvFieldType;
use tracing::*;

/// The descriptor fields a manifest resolves: which CDN build/config
/// files are active, where the CDN lives, and the default locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestFields {
    /// Key addressing the CDN build file.
    pub cdn_build_key: ContentKey,

    /// Key addressing the CDN config file.
    pub cdn_config_key: ContentKey,

    /// CDN URL: host concatenated with path.
    pub cdn_url: String,

    /// Locale mask accumulated from the record's tag string; zero when
    /// the manifest carries no tags.
    pub default_locale: LocaleFlags,
}

impl ManifestFields {
    /// Resolve the modern `.build.info` manifest.
    ///
    /// Records are scanned in file order; the first whose `Active`
    /// value begins with `'1'` wins and must carry `Build Key` (HEX),
    /// `CDN Key` (HEX), `CDN Hosts` and `CDN Path` (STRING). Earlier
    /// inactive records are discarded. No active record means the file
    /// resolves nothing, even when other records are well-formed.
    pub fn from_build_info(text: &str) -> Result<Self> {
        let doc = coffer_psv::parse(text)?;
        let schema = doc.schema();

        for (index, row) in doc.rows().iter().enumerate() {
            let active = row
                .get_typed("Active", PsvFieldType::Dec(0), schema)
                .is_some_and(|value| value.starts_with('1'));
            if !active {
                debug!("Skipping inactive manifest record {index}");
                continue;
            }

            let build_key = row
                .get_typed("Build Key", PsvFieldType::Hex(0), schema)
                .ok_or_else(|| missing("Build Key"))?;
            let cdn_key = row
                .get_typed("CDN Key", PsvFieldType::Hex(0), schema)
                .ok_or_else(|| missing("CDN Key"))?;
            let cdn_hosts = row
                .get_typed("CDN Hosts", PsvFieldType::String(0), schema)
                .ok_or_else(|| missing("CDN Hosts"))?;
            let cdn_path = row
                .get_typed("CDN Path", PsvFieldType::String(0), schema)
                .ok_or_else(|| missing("CDN Path"))?;

            let default_locale = row
                .get_typed("Tags", PsvFieldType::String(0), schema)
                .map_or_else(LocaleFlags::new, LocaleFlags::from_tags);

            return Ok(Self {
                cdn_build_key: ContentKey::from_hex(build_key)?,
                cdn_config_key: ContentKey::from_hex(cdn_key)?,
                cdn_url: format!("{cdn_hosts}{cdn_path}"),
                default_locale,
            });
        }

        Err(Error::InvalidFormat(
            "no active record in the build manifest".to_string(),
        ))
    }

    /// Resolve the legacy `.build.db` agent manifest.
    ///
    /// A single line of four pipe-delimited positional fields: CDN
    /// build key (hex), CDN config key (hex), an opaque locale/OS field
    /// that is skipped, and the CDN URL taken verbatim to the end of
    /// the line (it may itself contain pipes).
    pub fn from_build_db(text: &str) -> Result<Self> {
        let line = lines(text)
            .next()
            .ok_or_else(|| Error::InvalidFormat("legacy manifest is empty".to_string()))?;

        let mut fields = line.splitn(4, '|');
        let build_key = fields
            .next()
            .ok_or_else(|| truncated_legacy_line(line))?;
        let cdn_key = fields
            .next()
            .ok_or_else(|| truncated_legacy_line(line))?;
        // Locale/OS/code field: parsed over, never interpreted.
        let _skipped = fields
            .next()
            .ok_or_else(|| truncated_legacy_line(line))?;
        let url = fields
            .next()
            .filter(|url| !url.is_empty())
            .ok_or_else(|| truncated_legacy_line(line))?;

        Ok(Self {
            cdn_build_key: ContentKey::from_hex(build_key)?,
            cdn_config_key: ContentKey::from_hex(cdn_key)?,
            cdn_url: url.to_string(),
            default_locale: LocaleFlags::new(),
        })
    }
}

fn missing(field: &str) -> Error {
    Error::InvalidFormat(format!("active manifest record is missing {field:?}"))
}

fn truncated_legacy_line(line: &str) -> Error {
    Error::InvalidFormat(format!("legacy manifest line is truncated: {line:?}"))
}
