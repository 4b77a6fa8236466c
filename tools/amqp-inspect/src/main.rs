mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{dump::DumpArgs, schema::SchemaArgs};
use tracing::Level;

#[derive(Parser)]
#[command(name = "amqp-inspect", about = "Inspect Corda AMQP serialized blobs")]
struct Cli {
    /// Minimum level of log events written to stderr
    #[arg(long, global = true, default_value_t = Level::WARN)]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the schema carried by each blob
    Schema(SchemaArgs),
    /// Print the decoded object of each blob
    Dump(DumpArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Schema(args) => args.run(),
        Commands::Dump(args) => args.run(),
    }
}
