use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use plyconform::{core::format_schema, parse_header};

use super::convert::summarize;

#[derive(Args)]
pub struct InspectArgs {
    /// PLY files to inspect
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Also print each property's type, byte width and record offset
    #[arg(long)]
    types: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl InspectArgs {
    pub fn run(self) -> Result<()> {
        let text = self.render()?;
        match self.output {
            Some(path) => fs::write(path, text)?,
            None => print!("{text}"),
        }
        Ok(())
    }

    fn render(&self) -> Result<String> {
        let mut text = String::new();
        for path in &self.files {
            text.push_str(&summarize(path)?);
            text.push('\n');
            if self.types {
                let header = parse_header(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                text.push_str(&format_schema(&header.vertex_properties)?);
            }
        }
        Ok(text)
    }
}
