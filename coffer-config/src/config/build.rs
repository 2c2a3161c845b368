use crate::error::Error;
use crate::key::{ContentKey, parse_key_list, parse_single_key};
use crate::product::Product;
use crate::scan::{lines, match_field};
use crate::Result;
use tracing::*;

/// CDN build file parser.
///
/// The build file names the content keys of the storage's metadata
/// tables:
///
/// ```text
/// build-product = Hero
/// build-name = 30414patch2.0.0
/// root = 43a856a828702f20020abc0f7b0dbd34
/// install = 5a9b2f5e6bbe7692a55fb2c0b2b3bd35
/// download = 9a1d9e2b08e126fda9a08458b2691f2f
/// encoding = 867ba40b1bbed3b5a3c24e79e4a9e7b2 e2a3bb96408244386a7d27e6fa37ae53
/// ```
///
/// `encoding` must hold exactly two keys: the content key of the
/// encoding table followed by its encoded key. Everything else is
/// optional, but a present `build-product` must name a known product
/// and a present `build-name` must contain a build number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Product the build belongs to, when the file names one.
    pub product: Option<Product>,

    /// Build number extracted from `build-name`; 0 when unresolved.
    pub build_number: u32,

    /// Content key of the root manifest.
    pub root: Option<ContentKey>,

    /// Content key of the patch manifest.
    pub patch: Option<ContentKey>,

    /// Content key of the download manifest.
    pub download: Option<ContentKey>,

    /// Content key of the install manifest.
    pub install: Option<ContentKey>,

    /// Encoding table keys: (content key, encoded key).
    pub encoding: (ContentKey, ContentKey),
}

impl BuildConfig {
    /// Parse a CDN build file.
    pub fn parse(text: &str) -> Result<Self> {
        let mut product = None;
        let mut build_number = 0;
        let mut root = None;
        let mut patch = None;
        let mut download = None;
        let mut install = None;
        let mut encoding = None;

        for line in lines(text) {
            if let Some(value) = match_field(line, "build-product") {
                product = Some(
                    Product::from_identifier(value)
                        .ok_or_else(|| Error::UnknownProduct(value.to_string()))?,
                );
            } else if let Some(value) = match_field(line, "build-name") {
                build_number = extract_build_number(value)
                    .ok_or_else(|| Error::NoBuildNumber(value.to_string()))?;
            } else if let Some(value) = match_field(line, "root") {
                root = Some(parse_single_key(value)?);
            } else if let Some(value) = match_field(line, "patch") {
                patch = Some(parse_single_key(value)?);
            } else if let Some(value) = match_field(line, "download") {
                download = Some(parse_single_key(value)?);
            } else if let Some(value) = match_field(line, "install") {
                install = Some(parse_single_key(value)?);
            } else if let Some(value) = match_field(line, "encoding") {
                let keys = parse_key_list(value)?;
                if keys.len() != 2 {
                    return Err(Error::WrongKeyCount {
                        field: "encoding",
                        expected: 2,
                        actual: keys.len(),
                    });
                }
                encoding = Some((keys[0], keys[1]));
            } else if !line.is_empty() {
                debug!("Skipping unrecognized build config line: {line:?}");
            }
        }

        let Some(encoding) = encoding else {
            return Err(Error::MissingField("encoding"));
        };

        Ok(Self {
            product,
            build_number,
            root,
            patch,
            download,
            install,
            encoding,
        })
    }
}

/// Extract a build number from a build-name string.
///
/// Scans for the first run of at least three consecutive decimal digits
/// and consumes the whole run as a base-10 number. Build names with
/// fewer than three consecutive digits anywhere yield `None`; so does a
/// run that reads as zero.
///
/// ```
/// use coffer_config::config::extract_build_number;
///
/// assert_eq!(extract_build_number("prometheus-0_8_0_0-24919"), Some(24919));
/// assert_eq!(extract_build_number("WOW-18125patch6.0.1"), Some(18125));
/// assert_eq!(extract_build_number("B29"), None);
/// ```
pub fn extract_build_number(name: &str) -> Option<u32> {
    let bytes = name.as_bytes();

    for start in 0..bytes.len() {
        // At least three digits in a row (build 99 anyone?)
        if start + 2 < bytes.len()
            && bytes[start].is_ascii_digit()
            && bytes[start + 1].is_ascii_digit()
            && bytes[start + 2].is_ascii_digit()
        {
            let end = bytes[start..]
                .iter()
                .position(|b| !b.is_ascii_digit())
                .map_or(bytes.len(), |offset| start + offset);

            return name[start..end].parse::<u32>().ok().filter(|&n| n != 0);
        }
    }

    None
}
