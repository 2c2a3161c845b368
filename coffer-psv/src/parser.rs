//! PSV document parser

use crate::document::PsvDocument;
use crate::error::{Error, Result};
use crate::schema::PsvSchema;

/// Parse a complete PSV document.
///
/// The first non-empty line is the header; the rest are data rows.
/// Blank lines and `#` comment lines are skipped. Rows are stored as-is:
/// a row shorter than the header simply has its trailing columns absent.
///
/// # Examples
///
/// ```
/// let content = "Region!STRING:0|BuildId!DEC:4\nus|1234\neu|5678";
///
/// let doc = coffer_psv::parse(content)?;
/// assert_eq!(doc.row_count(), 2);
/// assert_eq!(doc.rows()[0].get_raw(0), Some("us"));
/// # Ok::<(), coffer_psv::Error>(())
/// ```
pub fn parse(content: &str) -> Result<PsvDocument<'_>> {
    if content.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let mut lines = content.lines();

    let header_line = lines.next().ok_or(Error::EmptyDocument)?;
    if !header_line.contains('!') {
        return Err(Error::InvalidHeader {
            reason: "header line must contain field type specifications with '!'".to_string(),
        });
    }

    let schema = PsvSchema::parse_header(header_line)?;
    let mut doc = PsvDocument::new(schema);

    for line in lines {
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        doc.push_row(trimmed.split('|').collect());
    }

    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field_type::PsvFieldType;

    #[test]
    fn parses_complete_document() {
        let content = "Region!STRING:0|BuildConfig!HEX:16|BuildId!DEC:4\n\
                       us|abcd1234abcd1234abcd1234abcd1234|1234\n\
                       eu|1234abcd1234abcd1234abcd1234abcd|5678";

        let doc = parse(content).unwrap();

        assert_eq!(doc.row_count(), 2);
        assert_eq!(doc.schema().field_count(), 3);

        let row = doc.get_row(0).unwrap();
        assert_eq!(row.get_raw(0), Some("us"));
        assert_eq!(row.get_raw(1), Some("abcd1234abcd1234abcd1234abcd1234"));
        assert_eq!(row.get_raw(2), Some("1234"));
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let content = "Region!STRING:0|BuildId!DEC:4\n\nus|1234\n# comment\n\neu|5678\n";

        let doc = parse(content).unwrap();
        assert_eq!(doc.row_count(), 2);
    }

    #[test]
    fn keeps_empty_fields() {
        let content = "A!STRING:0|B!STRING:0|C!STRING:0\na||c\n|b|";

        let doc = parse(content).unwrap();

        assert_eq!(doc.rows()[0].values(), &["a", "", "c"]);
        assert_eq!(doc.rows()[1].values(), &["", "b", ""]);
    }

    #[test]
    fn accepts_short_and_long_rows() {
        let content = "A!STRING:0|B!STRING:0\nonly\none|two|three";

        let doc = parse(content).unwrap();

        let short = doc.get_row(0).unwrap();
        assert_eq!(short.get_raw_by_name("A", doc.schema()), Some("only"));
        assert_eq!(short.get_raw_by_name("B", doc.schema()), None);

        // Extra values past the header are never consumed.
        let long = doc.get_row(1).unwrap();
        assert_eq!(long.get_raw_by_name("B", doc.schema()), Some("two"));
    }

    #[test]
    fn rejects_empty_document() {
        assert!(matches!(parse(""), Err(Error::EmptyDocument)));
    }

    #[test]
    fn rejects_missing_header() {
        assert!(matches!(
            parse("us|1234"),
            Err(Error::InvalidHeader { .. })
        ));
    }

    #[test]
    fn typed_lookup_through_document() {
        let content = "Active!DEC:1|Build Key!HEX:16\n1|abcd1234abcd1234abcd1234abcd1234";

        let doc = parse(content).unwrap();
        let row = doc.get_row(0).unwrap();

        assert_eq!(
            row.get_typed("Active", PsvFieldType::Dec(0), doc.schema()),
            Some("1")
        );
        assert_eq!(
            row.get_typed("Build Key", PsvFieldType::Hex(0), doc.schema()),
            Some("abcd1234abcd1234abcd1234abcd1234")
        );
    }
}
