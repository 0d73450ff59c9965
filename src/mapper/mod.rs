//! Typed value mappers: binary cell values to indexable scalars.
//!
//! A mapper turns one value into zero or one [`Scalar`]. Dirty source data is
//! expected, so a failed parse never aborts the surrounding record: it comes
//! back as a [`MapFailure`] from [`ValueMapper::try_map`], or is handed to a
//! [`DiagnosticSink`] by [`ValueMapper::map`] while no value is produced.
mod registry;
mod scalar;
mod sink;

use thiserror::Error;

pub use registry::MapperRegistry;
pub use scalar::{ParseFailure, Scalar, ScalarType};
pub use sink::{DiagnosticSink, TracingSink};

use crate::text::BinaryDisplay;

/// A value that could not be mapped.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("error mapping byte value {} to {}", BinaryDisplay(.input), .target)]
pub struct MapFailure {
    /// The raw value bytes.
    pub input: Vec<u8>,
    /// The type the value was mapped to.
    pub target: ScalarType,
    /// Why parsing failed.
    #[source]
    pub reason: ParseFailure,
}

/// Converts a binary value into one typed scalar.
pub trait ValueMapper: Send + Sync {
    /// The type produced on success.
    fn target(&self) -> ScalarType;

    /// Map `input`, returning the failure as a value.
    fn try_map(&self, input: &[u8]) -> Result<Scalar, MapFailure>;

    /// Map `input` into a collection holding zero or one value.
    ///
    /// Failures are reported to `sink` and produce an empty collection.
    fn map(&self, input: &[u8], sink: &dyn DiagnosticSink) -> Vec<Scalar> {
        match self.try_map(input) {
            Ok(value) => vec![value],
            Err(failure) => {
                sink.report(&failure);
                Vec::new()
            }
        }
    }
}

/// Mapper for one builtin [`ScalarType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarMapper {
    target: ScalarType,
}

impl ScalarMapper {
    /// Mapper producing `target` values.
    pub const fn new(target: ScalarType) -> Self {
        Self { target }
    }
}

impl ValueMapper for ScalarMapper {
    fn target(&self) -> ScalarType {
        self.target
    }

    fn try_map(&self, input: &[u8]) -> Result<Scalar, MapFailure> {
        self.target.parse(input).map_err(|reason| MapFailure {
            input: input.to_vec(),
            target: self.target,
            reason,
        })
    }
}
