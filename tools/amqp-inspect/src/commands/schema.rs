use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use corda_amqp::{
    BlobReader,
    schema::{format_notations, format_schema},
};

use super::{emit, render_sections};

#[derive(Args)]
pub struct SchemaArgs {
    /// Paths to serialized blobs
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print types in declaration order instead of dependency order
    #[arg(long)]
    declared: bool,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl SchemaArgs {
    pub fn run(self) -> Result<()> {
        let reader = BlobReader::new();

        let mut sections = Vec::with_capacity(self.files.len());
        for path in &self.files {
            let schema = reader.read_schema(path)?;
            let text = if self.declared {
                format_notations(schema.types())?
            } else {
                format_schema(&schema)?
            };
            sections.push((path.as_path(), text));
        }

        emit(&render_sections(&sections), self.output.as_deref())
    }
}
