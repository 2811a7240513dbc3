use crate::catalog::validation::ValidationError;

/// Errors that can occur while loading an emoji catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// Wrapper for [std::io::Error]
    Io(std::io::Error),
    /// Wrapper for [serde_json::Error]
    Json(serde_json::Error),
    /// Indicates that a record's `code` array is empty or contains an element
    /// that is not a 1-8 digit hexadecimal scalar.
    MalformedSequence {
        /// The `number` of the offending record
        number: String,
        /// The element that failed to parse (empty if the array was empty)
        code: String,
    },
    /// Indicates that the parsed records violate one or more of the catalog's
    /// shape invariants. All violations are collected, not just the first.
    Validation(Vec<ValidationError>),
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Json(err)
    }
}

impl From<Vec<ValidationError>> for CatalogError {
    fn from(errors: Vec<ValidationError>) -> Self {
        CatalogError::Validation(errors)
    }
}
