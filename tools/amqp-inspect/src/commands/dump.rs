use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Args;
use corda_amqp::{
    BlobReader,
    core::format_value,
    reader::{DEFAULT_MAX_DEPTH, DescriptorPolicy},
};
use tracing::error;

use super::{emit, render_sections};

#[derive(Args)]
pub struct DumpArgs {
    /// Paths to serialized blobs
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Warn about descriptors that disagree with the schema instead of failing
    #[arg(long)]
    lenient: bool,

    /// Maximum nesting depth of decoded values
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Output file path (stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl DumpArgs {
    pub fn run(self) -> Result<()> {
        let policy = if self.lenient {
            DescriptorPolicy::Lenient
        } else {
            DescriptorPolicy::Strict
        };
        let reader = BlobReader::builder()
            .with_max_depth(self.max_depth)
            .with_descriptor_policy(policy)
            .build();

        let mut sections = Vec::with_capacity(self.files.len());
        let mut failed = 0;
        for (path, result) in self.files.iter().zip(reader.decode_files(&self.files)) {
            match result {
                Ok(decoded) => sections.push((path.as_path(), format_value(&decoded.value)?)),
                Err(e) => {
                    error!("{e}");
                    failed += 1;
                }
            }
        }

        emit(&render_sections(&sections), self.output.as_deref())?;
        if failed > 0 {
            bail!("{failed} of {} files failed to decode", self.files.len());
        }
        Ok(())
    }
}
