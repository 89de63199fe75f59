//! Error types for reading, reconciling and writing vertex tables.

use plyconform_core::{Format, HeaderError};

/// Errors produced by the body reader, the writer and [`Converter`](crate::Converter).
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// I/O error while opening, mapping or writing a file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The header of one of the inputs could not be parsed.
    #[error("failed to parse PLY header of {path}: {source}")]
    Header {
        path: String,
        #[source]
        source: HeaderError,
    },

    /// The body is not one of the binary variants.
    #[error("unsupported body format '{format}': only binary PLY bodies can be read")]
    UnsupportedBodyFormat { format: Format },

    /// The body ended inside record `record`.
    #[error("unexpected EOF while reading vertex data at {record}/{vertex_count}")]
    UnexpectedEof { record: usize, vertex_count: usize },

    /// A schema property has no column to write from.
    #[error("missing column for output property '{name}'")]
    MissingColumn { name: String },

    /// A column's length differs from the vertex count being written.
    #[error("column '{name}' has {actual} rows, expected {expected}")]
    RowCountMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// The finished output could not be moved to its destination.
    #[error("failed to move output into place at {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
