use super::{Cell, EscapingKeyFormatter, UniqueKeyFormatter};
use crate::{error::FormatError, escape::HYPHEN_ESCAPER};

/// Separates the table name from the row in a table-qualified row key.
///
/// Table names never contain it, so it is not escaped.
pub const TABLE_DELIMITER: char = '@';

/// Formatter producing `"<table>@<row>"` row keys and hyphen-escaped cell keys.
///
/// Keys of rows from different tables stay unique inside one shared index.
/// Families and cells are not qualified by table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableKeyFormatter;

impl TableKeyFormatter {
    /// Extract the table name from a [`UniqueKeyFormatter::format_row_in_table`]
    /// key.
    ///
    /// Splits on the first `@`; a value without one is decoded whole.
    pub fn unformat_table(&self, value: &str) -> Vec<u8> {
        let table = value
            .split_once(TABLE_DELIMITER)
            .map_or(value, |(table, _)| table);
        HYPHEN_ESCAPER.decode(table)
    }
}

impl UniqueKeyFormatter for TableKeyFormatter {
    fn format_row(&self, row: &[u8]) -> String {
        EscapingKeyFormatter.format_row(row)
    }

    fn format_family(&self, family: &[u8]) -> String {
        EscapingKeyFormatter.format_family(family)
    }

    fn format_cell(&self, cell: &Cell) -> String {
        EscapingKeyFormatter.format_cell(cell)
    }

    fn format_row_in_table(&self, row: &[u8], table: &[u8]) -> String {
        let mut key = HYPHEN_ESCAPER.encode(table);
        key.push(TABLE_DELIMITER);
        key.push_str(&HYPHEN_ESCAPER.encode(row));
        key
    }

    fn unformat_row(&self, value: &str) -> Vec<u8> {
        EscapingKeyFormatter.unformat_row(value)
    }

    fn unformat_family(&self, value: &str) -> Vec<u8> {
        EscapingKeyFormatter.unformat_family(value)
    }

    fn unformat_cell(&self, value: &str) -> Result<Cell, FormatError> {
        EscapingKeyFormatter.unformat_cell(value)
    }

    fn unformat_row_in_table(&self, value: &str) -> Vec<u8> {
        let row = value
            .split_once(TABLE_DELIMITER)
            .map_or(value, |(_, row)| row);
        HYPHEN_ESCAPER.decode(row)
    }
}
