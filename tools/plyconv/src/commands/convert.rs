use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use plyconform::{Converter, default_destination, parse_header};

#[derive(Args)]
pub struct ConvertArgs {
    /// PLY file whose vertex data is converted
    source: PathBuf,

    /// PLY file whose vertex schema the output must match
    reference: PathBuf,

    /// Output file path (defaults to <source stem>_convert.<ext> next to the source)
    destination: Option<PathBuf>,

    /// Records encoded between progress updates
    #[arg(long, default_value_t = 4096)]
    chunk_size: usize,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Do not print header summaries after converting
    #[arg(short, long)]
    quiet: bool,
}

impl ConvertArgs {
    pub fn run(self) -> Result<()> {
        let destination = self.destination();
        let source_header = parse_header(&self.source)
            .with_context(|| format!("failed to read {}", self.source.display()))?;

        let pb = if self.no_progress {
            ProgressBar::hidden()
        } else {
            ProgressBar::new(source_header.vertex_count as u64)
        };
        pb.set_style(
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} vertices ({per_sec}, ETA: {eta})",
            )?
            .progress_chars("=>-"),
        );

        let converter = Converter::builder()
            .with_chunk_size(self.chunk_size)
            .build();
        let report = converter
            .convert_with_progress(&self.source, &self.reference, &destination, |n| pb.inc(n))
            .with_context(|| {
                format!(
                    "failed to convert {} using schema of {}",
                    self.source.display(),
                    self.reference.display()
                )
            })?;
        pb.finish_and_clear();

        if !self.quiet {
            for path in [&self.reference, &self.source, &report.destination] {
                println!("{}", summarize(path)?);
            }
            if !report.zero_filled.is_empty() {
                println!("zero-filled: {}", report.zero_filled.join(", "));
            }
            if !report.dropped.is_empty() {
                println!("dropped: {}", report.dropped.join(", "));
            }
        }
        Ok(())
    }

    fn destination(&self) -> PathBuf {
        self.destination
            .clone()
            .unwrap_or_else(|| default_destination(&self.source))
    }
}

pub fn summarize(path: &Path) -> Result<String> {
    let header =
        parse_header(path).with_context(|| format!("failed to read {}", path.display()))?;
    let label = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(header.summary(label).to_string())
}
