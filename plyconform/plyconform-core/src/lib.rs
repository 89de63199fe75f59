//! I/O-light core types for `plyconform`.
//!
//! This crate owns everything that can be derived from a PLY header alone:
//! the body [`Format`], the closed [`ScalarType`] registry shared by the
//! reader and the writer, [`PropertyDef`] / [`Schema`], and the header
//! parser itself ([`parse_header`]).

mod error;
mod format;
mod header;
mod parser;
mod scalar;
mod schema;

pub use error::HeaderError;
pub use format::{Endianness, Format};
pub use header::{Header, HeaderSummary, PropertyDef};
pub use parser::{END_HEADER, MAGIC, VERTEX_ELEMENT, parse_header, parse_header_from_reader};
pub use scalar::ScalarType;
pub use schema::{Schema, format_schema};
