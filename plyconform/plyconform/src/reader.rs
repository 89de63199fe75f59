//! Binary `vertex` body reader.

use std::{fs, path::Path};

use bytes::Buf;
use memmap2::Mmap;
use plyconform_core::Header;
use tracing::{debug, warn};

use crate::{error::ConvertError, table::VertexTable};

/// Read the `vertex` records of the file at `path` as described by `header`.
///
/// `header` must have been parsed from the same file; only binary bodies are
/// accepted.
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_vertex_table(path: impl AsRef<Path>, header: &Header) -> Result<VertexTable, ConvertError> {
    if !header.format.is_binary() {
        return Err(ConvertError::UnsupportedBodyFormat {
            format: header.format,
        });
    }

    let file = fs::File::open(path.as_ref())?;
    let mmap = unsafe { Mmap::map(&file) }?;
    let table = decode_vertex_table(&mmap, header);
    if let Err(e) = &table {
        warn!("failed to read vertex body: {e}");
    }
    table
}

/// Decode `vertex` records from the complete file contents in `data`.
pub fn decode_vertex_table(data: &[u8], header: &Header) -> Result<VertexTable, ConvertError> {
    let endianness = header
        .format
        .endianness()
        .ok_or(ConvertError::UnsupportedBodyFormat {
            format: header.format,
        })?;

    let start = usize::try_from(header.data_start_offset).unwrap_or(usize::MAX);
    let mut body = data.get(start..).unwrap_or_default();

    let n = header.vertex_count;
    let stride = header.stride();
    let properties = &header.vertex_properties;
    let capacity = match stride {
        0 => n,
        _ => n.min(body.len() / stride),
    };
    let mut columns: Vec<Vec<f32>> = properties
        .iter()
        .map(|_| Vec::with_capacity(capacity))
        .collect();

    for record in 0..n {
        if body.remaining() < stride {
            return Err(ConvertError::UnexpectedEof {
                record,
                vertex_count: n,
            });
        }
        for (property, column) in properties.iter().zip(columns.iter_mut()) {
            column.push(property.scalar.decode(&mut body, endianness));
        }
    }

    if body.has_remaining() {
        debug!(
            trailing_bytes = body.remaining(),
            "ignoring data after the vertex records"
        );
    }

    let mut table = VertexTable::new(n);
    for (property, column) in properties.iter().zip(columns) {
        table.insert(property.name.clone(), column);
    }
    debug!(vertex_count = n, stride, columns = table.len(), "decoded vertex table");
    Ok(table)
}
