//! Error types for the header layer.

/// Error returned by [`parse_header`](crate::parse_header) and
/// [`ScalarType::from_name`](crate::ScalarType::from_name).
#[derive(Debug, thiserror::Error)]
pub enum HeaderError {
    /// I/O error while opening or reading the file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The first non-blank line is not exactly the `ply` magic token.
    #[error("not a PLY file: expected 'ply', found '{line}'")]
    NotAPlyFile { line: String },

    /// The `format` line is missing, has the wrong token count, or names an
    /// unknown body format.
    #[error("malformed format line: '{line}'")]
    MalformedFormatLine { line: String },

    /// A type name outside the fixed scalar enumeration.
    #[error("unsupported scalar type '{type_name}'")]
    UnsupportedScalarType { type_name: String },

    /// A `property list ...` declaration inside the `vertex` element.
    #[error("list properties are not supported on the vertex element: '{line}'")]
    ListPropertyUnsupported { line: String },

    /// A `property` line with an unexpected token count.
    #[error("malformed property line: '{line}'")]
    MalformedPropertyLine { line: String },

    /// An `element` line with an unexpected token count or a bad count value.
    #[error("malformed element line: '{line}'")]
    MalformedElementLine { line: String },

    /// Two `vertex` properties share the same name.
    #[error("duplicate vertex property '{name}'")]
    DuplicateProperty { name: String },

    /// The header never declares a `vertex` element.
    #[error("no vertex element found in header")]
    NoVertexElement,

    /// The input ended before `end_header`.
    #[error("unexpected EOF while reading PLY header")]
    UnexpectedEof,

    /// A header line runs past the length limit without a newline.
    #[error("header line {line_no} is too long")]
    LineTooLong { line_no: usize },

    /// A header line contains non-ASCII bytes.
    #[error("header line {line_no} is not ASCII")]
    NonAsciiHeader { line_no: usize },
}
