use super::{Cell, UniqueKeyFormatter};
use crate::{error::FormatError, escape::HYPHEN_ESCAPER};

/// Hyphen-escaping formatter that ignores the source table.
///
/// Every field is escaped with [`HYPHEN_ESCAPER`], so single-field and
/// cell keys share one textual domain.
#[derive(Debug, Clone, Copy, Default)]
pub struct EscapingKeyFormatter;

impl UniqueKeyFormatter for EscapingKeyFormatter {
    fn format_row(&self, row: &[u8]) -> String {
        HYPHEN_ESCAPER.encode(row)
    }

    fn format_family(&self, family: &[u8]) -> String {
        HYPHEN_ESCAPER.encode(family)
    }

    fn format_cell(&self, cell: &Cell) -> String {
        HYPHEN_ESCAPER.join(&[
            cell.row.as_slice(),
            cell.family.as_slice(),
            cell.qualifier.as_slice(),
        ])
    }

    fn unformat_row(&self, value: &str) -> Vec<u8> {
        HYPHEN_ESCAPER.decode(value)
    }

    fn unformat_family(&self, value: &str) -> Vec<u8> {
        HYPHEN_ESCAPER.decode(value)
    }

    fn unformat_cell(&self, value: &str) -> Result<Cell, FormatError> {
        let [row, family, qualifier] = HYPHEN_ESCAPER.decode_exact::<3>(value)?;
        Ok(Cell {
            row,
            family,
            qualifier,
        })
    }
}
