//! Re-emit binary PLY vertex data under the schema of a reference file.
//!
//! ```text
//! source.ply ──parse_header──┐
//!                            ├─ read_vertex_table ─┐
//! reference.ply ─parse_header─ schema_from_reference ─ reconcile ─ write_vertex_table ─ output.ply
//! ```
//!
//! [`Converter`] composes the stages; each stage is also usable on its own.

mod converter;
mod error;
mod reader;
mod reconcile;
mod schema;
mod table;
mod writer;

pub use converter::{ConversionReport, Converter, ConverterBuilder, convert, default_destination};
pub use error::ConvertError;
pub use plyconform_core as core;
pub use plyconform_core::{Format, Header, PropertyDef, ScalarType, Schema, parse_header};
pub use reader::{decode_vertex_table, read_vertex_table};
pub use reconcile::{Reconciliation, reconcile};
pub use schema::schema_from_reference;
pub use table::{Columns, VertexTable};
pub use writer::{OUTPUT_VERSION, encode_vertex_table, header_text, write_vertex_table};
