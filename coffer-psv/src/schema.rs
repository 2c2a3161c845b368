//! PSV schema definitions

use crate::error::{Error, Result};
use crate::field_type::PsvFieldType;

/// A single named, typed column in a PSV header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsvField {
    /// Field name as spelled in the header
    pub name: String,
    /// Declared field type
    pub field_type: PsvFieldType,
    /// Zero-based column index
    pub index: usize,
}

/// The column structure of a PSV document, parsed from its header line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PsvSchema {
    fields: Vec<PsvField>,
}

impl PsvSchema {
    /// Parse a schema from a header line like
    /// `Active!DEC:1|Build Key!HEX:16|CDN Hosts!STRING:0`.
    pub fn parse_header(header_line: &str) -> Result<Self> {
        let mut schema = Self::default();

        for field_spec in header_line.split('|') {
            let Some((name, type_spec)) = field_spec.split_once('!') else {
                return Err(Error::InvalidHeader {
                    reason: format!("field specification without a type: {field_spec:?}"),
                });
            };

            let field_type = PsvFieldType::parse(type_spec)?;
            schema.add_field(name, field_type)?;
        }

        if schema.fields.is_empty() {
            return Err(Error::InvalidHeader {
                reason: "no fields found in header".to_string(),
            });
        }

        Ok(schema)
    }

    /// Append a field to the schema.
    pub fn add_field(&mut self, name: &str, field_type: PsvFieldType) -> Result<()> {
        if self.field(name).is_some() {
            return Err(Error::DuplicateField {
                field: name.to_string(),
            });
        }

        let index = self.fields.len();
        self.fields.push(PsvField {
            name: name.to_string(),
            field_type,
            index,
        });
        Ok(())
    }

    /// Look up a field by name, ASCII case-insensitively.
    pub fn field(&self, name: &str) -> Option<&PsvField> {
        self.fields
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(name))
    }

    /// `true` if the schema declares a field with this name.
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// All fields in column order.
    pub fn fields(&self) -> &[PsvField] {
        &self.fields
    }

    /// Number of declared columns.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header() {
        let schema =
            PsvSchema::parse_header("Active!DEC:1|Build Key!HEX:16|CDN Hosts!STRING:0").unwrap();

        assert_eq!(schema.field_count(), 3);
        assert!(schema.has_field("Active"));
        assert!(schema.has_field("Build Key"));
        assert_eq!(
            schema.field("CDN Hosts").unwrap().field_type,
            PsvFieldType::String(0)
        );
    }

    #[test]
    fn field_lookup_ignores_case() {
        let schema = PsvSchema::parse_header("Build Key!HEX:16").unwrap();
        assert!(schema.has_field("build key"));
        assert!(schema.has_field("BUILD KEY"));
        assert!(!schema.has_field("build"));
    }

    #[test]
    fn rejects_untyped_field() {
        assert!(PsvSchema::parse_header("Active|Build Key!HEX:16").is_err());
    }

    #[test]
    fn rejects_duplicate_fields() {
        let result = PsvSchema::parse_header("Active!DEC:1|Active!DEC:1");
        assert!(matches!(result, Err(Error::DuplicateField { .. })));
    }

    #[test]
    fn rejects_empty_header() {
        assert!(PsvSchema::parse_header("").is_err());
    }
}
