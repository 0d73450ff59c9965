//! Unique-key formatting for rows, column families and cells.
//!
//! A formatter turns the binary identity of a record into the string the
//! search index stores as document id, and takes such strings apart again.
//! Field encoding goes through [`crate::escape::Escaper`]; the formatters
//! only decide how encoded fields are combined.
mod escaping;
mod table;

use std::{fmt, str::FromStr};

pub use escaping::EscapingKeyFormatter;
pub use table::{TableKeyFormatter, TABLE_DELIMITER};

use crate::error::{ConfigError, FormatError};

/// The identifying part of a stored cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Row key.
    pub row: Vec<u8>,
    /// Column family.
    pub family: Vec<u8>,
    /// Column qualifier.
    pub qualifier: Vec<u8>,
}

impl Cell {
    /// Build a cell identity from its three fields.
    pub fn new(
        row: impl Into<Vec<u8>>,
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            row: row.into(),
            family: family.into(),
            qualifier: qualifier.into(),
        }
    }
}

/// Formats record identities into unique index keys and back.
///
/// The `*_in_table` variants receive the source table name; formatters that
/// do not qualify keys by table fall back to the plain forms.
pub trait UniqueKeyFormatter: Send + Sync + fmt::Debug {
    /// Format a row key.
    fn format_row(&self, row: &[u8]) -> String;

    /// Format a column family.
    fn format_family(&self, family: &[u8]) -> String;

    /// Format the row, family and qualifier of a cell.
    fn format_cell(&self, cell: &Cell) -> String;

    /// Format a row key that belongs to `table`.
    fn format_row_in_table(&self, row: &[u8], _table: &[u8]) -> String {
        self.format_row(row)
    }

    /// Format a column family that belongs to `table`.
    fn format_family_in_table(&self, family: &[u8], _table: &[u8]) -> String {
        self.format_family(family)
    }

    /// Format a cell that belongs to `table`.
    fn format_cell_in_table(&self, cell: &Cell, _table: &[u8]) -> String {
        self.format_cell(cell)
    }

    /// Reverse [`UniqueKeyFormatter::format_row`].
    fn unformat_row(&self, value: &str) -> Vec<u8>;

    /// Reverse [`UniqueKeyFormatter::format_family`].
    fn unformat_family(&self, value: &str) -> Vec<u8>;

    /// Reverse [`UniqueKeyFormatter::format_cell`].
    ///
    /// Fails when `value` does not hold exactly a row, a family and a
    /// qualifier.
    fn unformat_cell(&self, value: &str) -> Result<Cell, FormatError>;

    /// Reverse [`UniqueKeyFormatter::format_row_in_table`], returning the row.
    fn unformat_row_in_table(&self, value: &str) -> Vec<u8> {
        self.unformat_row(value)
    }
}

/// Selects which formatter builds the index keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyFormatterKind {
    /// [`TableKeyFormatter`]: rows are qualified by their table.
    #[default]
    Table,
    /// [`EscapingKeyFormatter`]: table names are not part of the key.
    Escaping,
}

impl KeyFormatterKind {
    /// Instantiate the selected formatter.
    pub fn build(self) -> Box<dyn UniqueKeyFormatter> {
        match self {
            KeyFormatterKind::Table => Box::new(TableKeyFormatter),
            KeyFormatterKind::Escaping => Box::new(EscapingKeyFormatter),
        }
    }

    /// Configuration name of the formatter.
    pub fn name(self) -> &'static str {
        match self {
            KeyFormatterKind::Table => "table",
            KeyFormatterKind::Escaping => "escaping",
        }
    }
}

impl fmt::Display for KeyFormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyFormatterKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(KeyFormatterKind::Table),
            "escaping" | "hyphen-escaping" => Ok(KeyFormatterKind::Escaping),
            _ => Err(ConfigError::UnknownKeyFormatter(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_config_names() {
        assert_eq!("table".parse::<KeyFormatterKind>().unwrap(), KeyFormatterKind::Table);
        assert_eq!(
            " Hyphen-Escaping ".parse::<KeyFormatterKind>().unwrap(),
            KeyFormatterKind::Escaping
        );
        assert!(matches!(
            "hex".parse::<KeyFormatterKind>(),
            Err(ConfigError::UnknownKeyFormatter(name)) if name == "hex"
        ));
        assert_eq!(KeyFormatterKind::default().to_string(), "table");
    }

    #[test]
    fn built_formatters_differ_only_in_table_handling() {
        let cell = Cell::new("r-1", "cf", "q");
        let table = KeyFormatterKind::Table.build();
        let escaping = KeyFormatterKind::Escaping.build();

        assert_eq!(table.format_cell(&cell), escaping.format_cell(&cell));
        assert_eq!(table.format_row_in_table(b"r-1", b"t"), "t@r\\-1");
        assert_eq!(escaping.format_row_in_table(b"r-1", b"t"), "r\\-1");
    }
}
