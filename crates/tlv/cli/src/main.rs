use clap::{Parser, Subcommand};

mod commands;
mod utils;

use commands::*;

#[derive(Parser)]
#[command(version, about = "Inspect and build TLV payloads for Tangem cards")]
struct Cli {
    /// Debug level output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a hex payload and print its records
    Parse {
        /// Payload as a hex string
        #[arg(required = true)]
        payload: String,

        /// Show raw value bytes instead of decoded values
        #[arg(long)]
        raw: bool,

        /// Spaces before each record line
        #[arg(long, default_value_t = 2)]
        indent: usize,
    },

    /// List the known tags
    Tags,

    /// Encode a single record
    Encode {
        /// Tag name or code (e.g. CardId or 0x01)
        #[arg(required = true)]
        tag: String,

        /// Value, read per the tag's value type (omit for a flag)
        value: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    match &cli.command {
        Commands::Parse {
            payload,
            raw,
            indent,
        } => parse_command(payload, *raw, *indent)?,
        Commands::Tags => tags_command(),
        Commands::Encode { tag, value } => encode_command(tag, value.as_deref())?,
    }

    Ok(())
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .init();
}
