use thiserror::Error;

/// Error returned when a composite key cannot be taken apart again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The key did not split into the number of fields the caller needs back.
    #[error("value cannot be split into {expected} fields (got {actual}): {value}")]
    FieldCount {
        /// Number of fields the decoder requires.
        expected: usize,
        /// Number of tokens the split actually produced.
        actual: usize,
        /// The offending key string.
        value: String,
    },
}

/// Error returned when indexer configuration cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No key formatter is known under this name.
    #[error("unknown key formatter: {0}")]
    UnknownKeyFormatter(String),
    /// No scalar type is known under this identifier.
    #[error("unknown scalar type: {0}")]
    UnknownScalarType(String),
    /// A column refers to a mapper the registry does not hold.
    #[error("column {column} refers to unknown mapper {mapper}")]
    UnknownMapper {
        /// Column in `family:qualifier` display form.
        column: String,
        /// The unresolved mapper identifier.
        mapper: String,
    },
    /// The same column is bound more than once.
    #[error("column {0} is mapped more than once")]
    DuplicateColumn(String),
}
