//! Agent database lookup: discovering the data directory.
//!
//! The `.agent.db` file at the installation root is a JSON-like blob;
//! the only thing build resolution needs from it is the quoted
//! `data_dir` string. It gets a lightweight scan rather than a full
//! parser, matching what the format actually guarantees.

use crate::fetch::load_text_file;
use crate::{AGENT_DB_FILE, Error, Result};
use std::path::{Path, PathBuf};
use tracing::*;

/// Extract the `data_dir` string value from agent database text.
///
/// Finds the first `"data_dir"` occurrence, skips spaces and the `:`,
/// and takes the following quoted string. `None` when the field is
/// absent, unquoted, or empty.
pub fn data_dir_value(text: &str) -> Option<&str> {
    const QUOTED_NAME: &str = "\"data_dir\"";

    let start = text.find(QUOTED_NAME)? + QUOTED_NAME.len();
    let rest = text[start..].trim_start_matches([' ', ':']);
    let rest = rest.strip_prefix('"')?;
    let end = rest.find('"')?;

    (end > 0).then(|| &rest[..end])
}

/// Find the installation holding `path`.
///
/// Walks `path` and its ancestors for the first directory containing
/// an agent database, then resolves the data directory it names.
/// Returns `(install_root, data_root)`.
pub fn discover_install(path: &Path) -> Result<(PathBuf, PathBuf)> {
    for dir in path.ancestors() {
        let agent_path = dir.join(AGENT_DB_FILE);
        if !agent_path.is_file() {
            continue;
        }

        debug!("Found agent database at {}", agent_path.display());
        let data = load_text_file(&agent_path)?;
        let text = String::from_utf8(data).map_err(|_| {
            Error::InvalidFormat("agent database is not valid UTF-8 text".to_string())
        })?;

        let data_dir = data_dir_value(&text).ok_or_else(|| {
            Error::InvalidFormat("agent database names no data_dir".to_string())
        })?;

        return Ok((dir.to_path_buf(), dir.join(data_dir)));
    }

    Err(Error::NotFound(format!(
        "no {AGENT_DB_FILE} at or above {}",
        path.display()
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_quoted_data_dir() {
        let text = r#"{"first_run": false, "data_dir": "Heroes of the Storm/Data", "last_run": 0}"#;
        assert_eq!(data_dir_value(text), Some("Heroes of the Storm/Data"));
    }

    #[test]
    fn tolerates_spacing_around_the_colon() {
        assert_eq!(data_dir_value(r#""data_dir"  :  "Data""#), Some("Data"));
        assert_eq!(data_dir_value(r#""data_dir":"Data""#), Some("Data"));
    }

    #[test]
    fn rejects_absent_or_malformed_values() {
        assert_eq!(data_dir_value("{}"), None);
        assert_eq!(data_dir_value(r#""data_dir": 42"#), None);
        assert_eq!(data_dir_value(r#""data_dir": """#), None);
        assert_eq!(data_dir_value(r#""data_dir": "unterminated"#), None);
    }
}
