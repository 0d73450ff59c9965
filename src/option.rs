use std::collections::HashSet;

use crate::{
    error::ConfigError,
    key::KeyFormatterKind,
    mapper::MapperRegistry,
    text::BinaryDisplay,
};

/// Binds one column to the mapper that turns its values into scalars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Column family.
    pub family: Vec<u8>,
    /// Column qualifier.
    pub qualifier: Vec<u8>,
    /// Mapper type identifier, looked up in a [`MapperRegistry`].
    pub mapper: String,
    /// Disabled columns are never mapped.
    pub enabled: bool,
}

impl ColumnMapping {
    /// An enabled mapping of `family:qualifier` to `mapper`.
    pub fn new(
        family: impl Into<Vec<u8>>,
        qualifier: impl Into<Vec<u8>>,
        mapper: impl Into<String>,
    ) -> Self {
        ColumnMapping {
            family: family.into(),
            qualifier: qualifier.into(),
            mapper: mapper.into(),
            enabled: true,
        }
    }

    /// Enable or disable the mapping.
    pub fn enabled(self, enabled: bool) -> Self {
        ColumnMapping { enabled, ..self }
    }

    pub(crate) fn column_name(&self) -> String {
        format!(
            "{}:{}",
            BinaryDisplay(&self.family),
            BinaryDisplay(&self.qualifier)
        )
    }
}

/// Host configuration: which key formatter is active and how columns map.
#[derive(Debug, Clone, Default)]
pub struct IndexerOptions {
    pub(crate) key_formatter: KeyFormatterKind,
    pub(crate) columns: Vec<ColumnMapping>,
}

impl IndexerOptions {
    /// Select the key formatter; defaults to [`KeyFormatterKind::Table`].
    pub fn key_formatter(self, key_formatter: KeyFormatterKind) -> Self {
        IndexerOptions {
            key_formatter,
            ..self
        }
    }

    /// Add a column binding.
    pub fn column(mut self, mapping: ColumnMapping) -> Self {
        self.columns.push(mapping);
        self
    }

    /// Column bindings in insertion order.
    pub fn columns(&self) -> &[ColumnMapping] {
        &self.columns
    }

    /// Check every column against `registry`.
    ///
    /// Disabled columns must still name a known mapper; a column may be
    /// bound only once.
    pub fn validate(&self, registry: &MapperRegistry) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for mapping in &self.columns {
            if !seen.insert((&mapping.family, &mapping.qualifier)) {
                return Err(ConfigError::DuplicateColumn(mapping.column_name()));
            }
            if !registry.contains(&mapping.mapper) {
                return Err(ConfigError::UnknownMapper {
                    column: mapping.column_name(),
                    mapper: mapping.mapper.clone(),
                });
            }
        }
        Ok(())
    }
}
