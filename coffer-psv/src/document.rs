//! PSV document representation

use crate::field_type::PsvFieldType;
use crate::schema::PsvSchema;

/// A single data row, holding zero-copy views into the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsvRow<'a> {
    values: Vec<&'a str>,
}

impl<'a> PsvRow<'a> {
    pub(crate) fn new(values: Vec<&'a str>) -> Self {
        Self { values }
    }

    /// Number of values present on this row. May be fewer or more than
    /// the schema's column count; columns past the end are absent.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the row carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw value at a column index, or `None` when the row ran out of
    /// values before that column.
    pub fn get_raw(&self, index: usize) -> Option<&'a str> {
        self.values.get(index).copied()
    }

    /// Raw value for a named column.
    pub fn get_raw_by_name(&self, name: &str, schema: &PsvSchema) -> Option<&'a str> {
        schema.field(name).and_then(|f| self.get_raw(f.index))
    }

    /// Value for a named column, only when the schema declares that name
    /// with the expected type. A column declared under a different type
    /// does not match.
    pub fn get_typed(
        &self,
        name: &str,
        expected: PsvFieldType,
        schema: &PsvSchema,
    ) -> Option<&'a str> {
        let field = schema.field(name)?;
        if !field.field_type.same_kind(&expected) {
            return None;
        }
        self.get_raw(field.index)
    }

    /// All raw values in column order.
    pub fn values(&self) -> &[&'a str] {
        &self.values
    }
}

/// A parsed PSV document: schema plus data rows, borrowing the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PsvDocument<'a> {
    schema: PsvSchema,
    rows: Vec<PsvRow<'a>>,
}

impl<'a> PsvDocument<'a> {
    pub(crate) fn new(schema: PsvSchema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, values: Vec<&'a str>) {
        self.rows.push(PsvRow::new(values));
    }

    /// The column structure from the header line.
    pub fn schema(&self) -> &PsvSchema {
        &self.schema
    }

    /// All data rows in file order.
    pub fn rows(&self) -> &[PsvRow<'a>] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// `true` when the document has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row by index.
    pub fn get_row(&self, index: usize) -> Option<&PsvRow<'a>> {
        self.rows.get(index)
    }

    /// `true` if the header declares a column with this name.
    pub fn has_field(&self, name: &str) -> bool {
        self.schema.has_field(name)
    }
}
