use crate::error::Error;
use crate::key::{ContentKey, parse_key_list, parse_single_key};
use crate::scan::{lines, match_field};
use crate::Result;
use tracing::*;

/// CDN configuration parser.
///
/// The CDN config file lists the archive set backing a storage:
///
/// ```text
/// archives = 0017a402f556fbece46c38dc431a2c9b 003b147730a109e3a480d32a54280955
/// archive-group = 6b3a24b732346de5c09122c452fe6b31
/// patch-archives = 06118ed7d0b997d4910aa3d69cfa51e6
/// patch-archive-group = 77146880b8f6968142071db06c734044
/// ```
///
/// A valid config carries a non-empty `archive-group` key and a
/// non-empty `archives` list; the patch fields are optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CdnConfig {
    /// Key of the archive grouping/bucketing index.
    pub archive_group: ContentKey,

    /// Keys of all archives, in file order. Never empty.
    pub archives: Vec<ContentKey>,

    /// Key of the patch-archive grouping index, when present.
    pub patch_archive_group: Option<ContentKey>,

    /// Keys of patch archives. Empty when the storage has none.
    pub patch_archives: Vec<ContentKey>,
}

impl CdnConfig {
    /// Parse a CDN config file.
    ///
    /// Lines that bind none of the known fields are skipped; field
    /// checks run in a fixed order so that prefix-overlapping names
    /// resolve deterministically.
    pub fn parse(text: &str) -> Result<Self> {
        let mut archive_group = None;
        let mut archives = Vec::new();
        let mut patch_archive_group = None;
        let mut patch_archives = Vec::new();

        for line in lines(text) {
            if let Some(value) = match_field(line, "archive-group") {
                archive_group = Some(parse_single_key(value)?);
            } else if let Some(value) = match_field(line, "archives") {
                archives = parse_key_list(value)?;
                if archives.is_empty() {
                    return Err(Error::EmptyKeyList { field: "archives" });
                }
            } else if let Some(value) = match_field(line, "patch-archive-group") {
                patch_archive_group = Some(parse_single_key(value)?);
            } else if let Some(value) = match_field(line, "patch-archives") {
                patch_archives = parse_key_list(value)?;
            } else if !line.is_empty() {
                debug!("Skipping unrecognized CDN config line: {line:?}");
            }
        }

        let Some(archive_group) = archive_group else {
            return Err(Error::MissingField("archive-group"));
        };
        if archives.is_empty() {
            return Err(Error::MissingField("archives"));
        }

        Ok(Self {
            archive_group,
            archives,
            patch_archive_group,
            patch_archives,
        })
    }
}
