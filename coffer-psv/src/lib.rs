//! Parser for the typed pipe-separated value (PSV) manifest format.
//!
//! PSV files carry a header line declaring named, typed columns, followed
//! by data rows with positional values:
//!
//! ```text
//! Active!DEC:1|Build Key!HEX:16|CDN Hosts!STRING:0
//! 1|8c9403cc38f3a26eebb153e3bba0e148|cdn.example.com
//! ```
//!
//! Header field *i* and row value *i* pair positionally. A row may carry
//! fewer values than the header declares (the missing trailing pairs are
//! simply absent) or more (the extras are never consumed).

mod document;
mod error;
mod field_type;
mod parser;
mod schema;

pub use document::{PsvDocument, PsvRow};
pub use error::{Error, Result};
pub use field_type::PsvFieldType;
pub use parser::parse;
pub use schema::{PsvField, PsvSchema};
