use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed hex key: {value:?}")]
    MalformedKey { value: String },

    #[error("Key of {0} bytes exceeds the maximum key length")]
    KeyTooLong(usize),

    #[error("Required field {0:?} is missing")]
    MissingField(&'static str),

    #[error("Field {field:?} holds no keys")]
    EmptyKeyList { field: &'static str },

    #[error("Field {field:?} must hold exactly {expected} keys, got {actual}")]
    WrongKeyCount {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown product identifier: {0:?}")]
    UnknownProduct(String),

    #[error("No build number found in build name: {0:?}")]
    NoBuildNumber(String),
}
