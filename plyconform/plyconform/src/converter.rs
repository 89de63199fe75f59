//! End-to-end conversion: source body + reference schema → output file.

use std::path::{Path, PathBuf};

use plyconform_core::{Header, parse_header};
use tracing::info;

use crate::{
    error::ConvertError,
    reader::read_vertex_table,
    reconcile::reconcile,
    schema::schema_from_reference,
    writer::write_vertex_table_chunked,
};

/// Summary of a finished conversion.
///
/// `destination` is the path a downstream index should register.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub destination: PathBuf,
    pub vertex_count: usize,
    pub copied: Vec<String>,
    pub zero_filled: Vec<String>,
    pub dropped: Vec<String>,
}

/// Conforms source files to the schema of a reference file.
pub struct Converter {
    chunk_size: usize,
}

/// Builder for configuring [`Converter`].
pub struct ConverterBuilder {
    chunk_size: usize,
}

impl Converter {
    /// Create a builder for [`Converter`].
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder { chunk_size: 4096 }
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Convert `source` so that its `vertex` element matches the schema of
    /// `reference`, writing the result to `destination`.
    ///
    /// The output has the source's vertex count and the reference's
    /// properties, types and order. Nothing is written unless every stage
    /// succeeds.
    pub fn convert(
        &self,
        source: impl AsRef<Path>,
        reference: impl AsRef<Path>,
        destination: impl AsRef<Path>,
    ) -> Result<ConversionReport, ConvertError> {
        self.convert_with_progress(source, reference, destination, |_| {})
    }

    /// Like [`convert`](Self::convert), calling `progress` with the number
    /// of records written after each chunk.
    #[tracing::instrument(skip_all, fields(source = %source.as_ref().display()))]
    pub fn convert_with_progress(
        &self,
        source: impl AsRef<Path>,
        reference: impl AsRef<Path>,
        destination: impl AsRef<Path>,
        mut progress: impl FnMut(u64),
    ) -> Result<ConversionReport, ConvertError> {
        let (source, reference, destination) =
            (source.as_ref(), reference.as_ref(), destination.as_ref());

        let source_header = read_header(source)?;
        let reference_header = read_header(reference)?;
        let target = schema_from_reference(&reference_header);

        let table = read_vertex_table(source, &source_header)?;
        let vertex_count = source_header.vertex_count;
        let reconciled = reconcile(table, &target, vertex_count);

        write_vertex_table_chunked(
            destination,
            vertex_count,
            &target,
            &reconciled.columns,
            self.chunk_size,
            &mut progress,
        )?;

        info!(
            destination = %destination.display(),
            vertex_count,
            properties = target.len(),
            "conversion finished"
        );

        Ok(ConversionReport {
            destination: destination.to_path_buf(),
            vertex_count,
            copied: reconciled.copied,
            zero_filled: reconciled.zero_filled,
            dropped: reconciled.dropped,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterBuilder {
    /// Set the number of records encoded per write and progress tick.
    /// Values below 1 are treated as 1.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    pub fn build(self) -> Converter {
        Converter {
            chunk_size: self.chunk_size,
        }
    }
}

/// Convert with default settings. See [`Converter::convert`].
pub fn convert(
    source: impl AsRef<Path>,
    reference: impl AsRef<Path>,
    destination: impl AsRef<Path>,
) -> Result<ConversionReport, ConvertError> {
    Converter::new().convert(source, reference, destination)
}

/// `<stem>_convert<.ext>` next to `source`.
pub fn default_destination(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match source.extension() {
        Some(ext) => format!("{stem}_convert.{}", ext.to_string_lossy()),
        None => format!("{stem}_convert"),
    };
    source.with_file_name(name)
}

fn read_header(path: &Path) -> Result<Header, ConvertError> {
    parse_header(path).map_err(|source| ConvertError::Header {
        path: path.display().to_string(),
        source,
    })
}
