use std::{collections::HashMap, sync::Arc};

use crate::{
    error::ConfigError,
    key::{Cell, UniqueKeyFormatter},
    mapper::{DiagnosticSink, MapperRegistry, Scalar, TracingSink, ValueMapper},
    observability::log_debug,
    option::IndexerOptions,
};

/// family -> qualifier -> mapper
type ColumnMappers = HashMap<Vec<u8>, HashMap<Vec<u8>, Arc<dyn ValueMapper>>>;

/// Per-cell entry point for the host indexing pipeline.
///
/// Built once from [`IndexerOptions`]; afterwards every call is read-only,
/// so one adapter can be shared by all indexing workers.
pub struct CellAdapter {
    formatter: Box<dyn UniqueKeyFormatter>,
    columns: ColumnMappers,
    sink: Arc<dyn DiagnosticSink>,
}

impl CellAdapter {
    /// Resolve `options` against `registry`.
    ///
    /// Failures are reported through [`TracingSink`] until replaced with
    /// [`CellAdapter::with_sink`].
    pub fn new(options: &IndexerOptions, registry: &MapperRegistry) -> Result<Self, ConfigError> {
        options.validate(registry)?;

        let mut columns = ColumnMappers::new();
        let mut mapped = 0;
        for mapping in options.columns() {
            if !mapping.enabled {
                log_debug!(
                    component = "adapter",
                    event = "column_disabled",
                    column = %mapping.column_name(),
                    mapper = %mapping.mapper,
                );
                continue;
            }
            let mapper = registry
                .get(&mapping.mapper)
                .ok_or_else(|| ConfigError::UnknownMapper {
                    column: mapping.column_name(),
                    mapper: mapping.mapper.clone(),
                })?;
            columns
                .entry(mapping.family.clone())
                .or_default()
                .insert(mapping.qualifier.clone(), Arc::clone(mapper));
            mapped += 1;
        }
        log_debug!(
            component = "adapter",
            event = "adapter_ready",
            key_formatter = %options.key_formatter,
            mapped_columns = mapped,
        );

        Ok(Self {
            formatter: options.key_formatter.build(),
            columns,
            sink: Arc::new(TracingSink),
        })
    }

    /// Report mapping failures to `sink` instead.
    pub fn with_sink(self, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink, ..self }
    }

    /// The active key formatter.
    pub fn formatter(&self) -> &dyn UniqueKeyFormatter {
        self.formatter.as_ref()
    }

    /// Document id of a whole row of `table`.
    pub fn row_id(&self, table: &[u8], row: &[u8]) -> String {
        self.formatter.format_row_in_table(row, table)
    }

    /// Document id of a single cell of `table`.
    pub fn document_id(&self, table: &[u8], cell: &Cell) -> String {
        self.formatter.format_cell_in_table(cell, table)
    }

    /// Map the value of `cell` with the mapper bound to its column.
    ///
    /// Unbound and disabled columns produce nothing.
    pub fn map_value(&self, cell: &Cell, value: &[u8]) -> Vec<Scalar> {
        match self
            .columns
            .get(cell.family.as_slice())
            .and_then(|qualifiers| qualifiers.get(cell.qualifier.as_slice()))
        {
            Some(mapper) => mapper.map(value, self.sink.as_ref()),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::{
        key::KeyFormatterKind,
        mapper::MapFailure,
        option::ColumnMapping,
    };

    #[derive(Default)]
    struct Recorder(Mutex<Vec<MapFailure>>);

    impl DiagnosticSink for Recorder {
        fn report(&self, failure: &MapFailure) {
            self.0.lock().unwrap().push(failure.clone());
        }
    }

    fn options() -> IndexerOptions {
        IndexerOptions::default()
            .column(ColumnMapping::new("cf", "active", "boolean"))
            .column(ColumnMapping::new("cf", "age", "short"))
            .column(ColumnMapping::new("cf", "score", "double").enabled(false))
    }

    #[test]
    fn maps_bound_columns_only() {
        let recorder = Arc::new(Recorder::default());
        let adapter = CellAdapter::new(&options(), MapperRegistry::builtin())
            .unwrap()
            .with_sink(recorder.clone());

        let active = Cell::new("r1", "cf", "active");
        let age = Cell::new("r1", "cf", "age");
        let score = Cell::new("r1", "cf", "score");
        let other = Cell::new("r1", "cf", "name");

        assert_eq!(adapter.map_value(&active, b"True"), vec![Scalar::Boolean(true)]);
        assert_eq!(adapter.map_value(&age, b"41"), vec![Scalar::Short(41)]);
        assert!(adapter.map_value(&score, b"1.5").is_empty());
        assert!(adapter.map_value(&other, b"x").is_empty());
        assert!(recorder.0.lock().unwrap().is_empty());

        assert!(adapter.map_value(&age, b"old").is_empty());
        let failures = recorder.0.lock().unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].input, b"old".to_vec());
    }

    #[test]
    fn ids_follow_selected_formatter() {
        let cell = Cell::new("r-1", "cf", "q");

        let table = CellAdapter::new(&options(), MapperRegistry::builtin()).unwrap();
        assert_eq!(table.row_id(b"t", b"r-1"), "t@r\\-1");
        assert_eq!(table.document_id(b"t", &cell), "r\\-1-cf-q");
        assert_eq!(table.formatter().unformat_cell("r\\-1-cf-q").unwrap(), cell);

        let escaping = CellAdapter::new(
            &options().key_formatter(KeyFormatterKind::Escaping),
            MapperRegistry::builtin(),
        )
        .unwrap();
        assert_eq!(escaping.row_id(b"t", b"r-1"), "r\\-1");
    }

    #[test]
    fn invalid_options_are_rejected() {
        let options = options().column(ColumnMapping::new("cf", "when", "date"));
        assert!(matches!(
            CellAdapter::new(&options, MapperRegistry::builtin()),
            Err(ConfigError::UnknownMapper { .. })
        ));
    }
}
