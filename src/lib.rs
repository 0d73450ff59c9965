#![deny(missing_docs)]
//! Adapters between column-family cells and a search index.
//!
//! Two independent families of pure functions:
//!
//! - [`key`]: reversible unique keys for rows, families and cells, built
//!   from raw binary fields with the escaping primitive in [`escape`].
//! - [`mapper`]: best-effort conversion of binary values into typed
//!   scalars; failures are reported, never raised.
//!
//! [`CellAdapter`] wires both to the host configuration in
//! [`IndexerOptions`].

/// Per-cell glue over the configured formatter and mappers.
pub mod adapter;

/// Error types.
pub mod error;

/// Delimiter escaping primitive.
pub mod escape;

/// Unique-key formatters.
pub mod key;

/// Typed value mappers.
pub mod mapper;

/// Host configuration.
pub mod option;

/// Byte/text conversion.
pub mod text;

mod observability;

pub use crate::{
    adapter::CellAdapter,
    error::{ConfigError, FormatError},
    escape::{Escaper, HYPHEN_ESCAPER},
    key::{Cell, KeyFormatterKind, TableKeyFormatter, UniqueKeyFormatter},
    mapper::{MapperRegistry, Scalar, ScalarType, ValueMapper},
    option::{ColumnMapping, IndexerOptions},
};
