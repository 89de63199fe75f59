//! Binary little-endian `vertex` writer.
//!
//! The header is regenerated from the schema; nothing is copied from the
//! input files. Columns are validated against the schema before the first
//! byte is produced, and [`write_vertex_table`] goes through a temporary
//! file in the destination directory that is renamed into place only after
//! every record has been written.

use std::{
    fmt::{self, Write as _},
    io::{self, BufWriter, Write},
    path::Path,
};

use bytes::BytesMut;
use plyconform_core::{END_HEADER, Endianness, Format, MAGIC, Schema, VERTEX_ELEMENT};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{error::ConvertError, table::Columns};

/// Version written on the `format` line of every output file.
pub const OUTPUT_VERSION: &str = "1.0";

const OUTPUT_FORMAT: Format = Format::BinaryLittleEndian;
const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Header text for `vertex_count` records of `schema`, ending with a newline.
pub fn header_text(vertex_count: usize, schema: &Schema) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "{MAGIC}")?;
    writeln!(out, "format {OUTPUT_FORMAT} {OUTPUT_VERSION}")?;
    writeln!(out, "element {VERTEX_ELEMENT} {vertex_count}")?;
    for property in schema.iter() {
        writeln!(out, "{property}")?;
    }
    writeln!(out, "{END_HEADER}")?;
    Ok(out)
}

/// Write `columns` as a binary little-endian PLY file at `path`.
pub fn write_vertex_table(
    path: impl AsRef<Path>,
    vertex_count: usize,
    schema: &Schema,
    columns: &Columns,
) -> Result<(), ConvertError> {
    write_vertex_table_chunked(
        path.as_ref(),
        vertex_count,
        schema,
        columns,
        DEFAULT_CHUNK_SIZE,
        &mut |_: u64| {},
    )
}

#[tracing::instrument(skip_all, fields(path = %path.display(), vertex_count = vertex_count))]
pub(crate) fn write_vertex_table_chunked(
    path: &Path,
    vertex_count: usize,
    schema: &Schema,
    columns: &Columns,
    chunk_size: usize,
    progress: &mut dyn FnMut(u64),
) -> Result<(), ConvertError> {
    let ordered = ordered_columns(vertex_count, schema, columns)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = temp_file_in(dir)?;
    {
        let mut out = BufWriter::new(&mut tmp);
        encode_ordered(&mut out, vertex_count, schema, &ordered, chunk_size, progress)?;
        out.flush()?;
    }
    tmp.persist(path).map_err(|e| ConvertError::Persist {
        path: path.display().to_string(),
        source: e.error,
    })?;

    debug!(stride = schema.stride(), "wrote vertex table");
    Ok(())
}

/// Sibling temp file for `persist`. On Unix it is created with the mode a
/// plain `File::create` would get (0666 minus the umask), not 0600.
fn temp_file_in(dir: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();
    builder.prefix(".plyconform");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Encode header and records into `out` without touching the filesystem.
pub fn encode_vertex_table(
    out: &mut impl Write,
    vertex_count: usize,
    schema: &Schema,
    columns: &Columns,
) -> Result<(), ConvertError> {
    let ordered = ordered_columns(vertex_count, schema, columns)?;
    encode_ordered(out, vertex_count, schema, &ordered, DEFAULT_CHUNK_SIZE, &mut |_: u64| {})
}

/// Look up every schema column and check its length.
fn ordered_columns<'a>(
    vertex_count: usize,
    schema: &Schema,
    columns: &'a Columns,
) -> Result<Vec<&'a [f32]>, ConvertError> {
    schema
        .iter()
        .map(|property| {
            let column = columns
                .get(&property.name)
                .ok_or_else(|| ConvertError::MissingColumn {
                    name: property.name.clone(),
                })?;
            if column.len() != vertex_count {
                return Err(ConvertError::RowCountMismatch {
                    name: property.name.clone(),
                    expected: vertex_count,
                    actual: column.len(),
                });
            }
            Ok(column.as_slice())
        })
        .collect()
}

fn encode_ordered(
    out: &mut impl Write,
    vertex_count: usize,
    schema: &Schema,
    ordered: &[&[f32]],
    chunk_size: usize,
    progress: &mut dyn FnMut(u64),
) -> Result<(), ConvertError> {
    let header = header_text(vertex_count, schema).map_err(io::Error::other)?;
    out.write_all(header.as_bytes())?;

    let chunk_size = chunk_size.max(1);
    let mut buf = BytesMut::with_capacity(schema.stride() * chunk_size.min(vertex_count));
    let mut start = 0;
    while start < vertex_count {
        let end = (start + chunk_size).min(vertex_count);
        for row in start..end {
            for (property, column) in schema.iter().zip(ordered) {
                property.scalar.encode(column[row], &mut buf, Endianness::Little);
            }
        }
        out.write_all(&buf)?;
        buf.clear();
        progress((end - start) as u64);
        start = end;
    }
    Ok(())
}
