use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::{EncodeStats, Format};

mod decode;
mod encode;
mod verify;

pub(crate) struct EncodeArgs {
    pub(crate) names: Vec<String>,
    pub(crate) r#in: Option<PathBuf>,
    pub(crate) formats: Vec<Format>,
    pub(crate) separator: String,
    pub(crate) stats: bool,
}

pub(crate) struct DecodeArgs {
    pub(crate) text: Option<String>,
    pub(crate) r#in: Option<PathBuf>,
    pub(crate) format: Option<Format>,
}

pub(crate) struct VerifyArgs {
    pub(crate) names: Vec<String>,
    pub(crate) r#in: Option<PathBuf>,
    pub(crate) quiet: bool,
}

#[derive(Parser)]
#[command(
    name = "option119",
    about = "Encode and decode DHCP Option 119 (domain search list)",
    long_about = "Converts a domain search list to the compressed RFC 3397 wire format and renders it for Mikrotik RouterOS, Cisco IOS, raw hex and C strings.",
    after_help = "Examples:\n  option119 encode mydomain.home users.mydomain.home\n  option119 encode --format mikrotik --in ./search-domains.txt\n  option119 decode \"0x08'mydomain'0x04'home'0x00\"\n  option119 verify google.com 0.google.com\n\nRun 'option119 encode --help' or 'option119 decode --help' to see all flags."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a domain search list into every output format
    Encode {
        /// Domain names (space separated)
        #[arg(conflicts_with = "in")]
        names: Vec<String>,

        /// Read domain names from a file ('-' for stdin)
        #[arg(short, long)]
        r#in: Option<PathBuf>,

        /// Only print these formats (repeatable)
        #[arg(short, long, value_enum)]
        format: Vec<Format>,

        /// Byte separator for spaced hex output
        #[arg(long, default_value = crate::DEFAULT_SEPARATOR)]
        separator: String,

        /// Show compression statistics
        #[arg(short, long)]
        stats: bool,

        /// Show debug output for each compression pointer
        #[arg(short, long)]
        verbose: bool,
    },

    /// Decode Option 119 text back into a domain list
    Decode {
        /// Encoded option value
        #[arg(conflicts_with = "in")]
        text: Option<String>,

        /// Read the encoded value from a file ('-' for stdin)
        #[arg(short, long)]
        r#in: Option<PathBuf>,

        /// Input format (detected from the text when omitted)
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Show debug output while decoding
        #[arg(short, long)]
        verbose: bool,
    },

    /// Check that a domain list survives every format unchanged
    Verify {
        /// Domain names (space separated)
        #[arg(conflicts_with = "in")]
        names: Vec<String>,

        /// Read domain names from a file ('-' for stdin)
        #[arg(short, long)]
        r#in: Option<PathBuf>,

        /// Suppress per-format output and diffs (exit code still indicates mismatches)
        #[arg(long)]
        quiet: bool,

        /// Show debug output for each format
        #[arg(short, long)]
        verbose: bool,
    },
}

pub fn run_with_args<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    match cli.command {
        Commands::Encode {
            names,
            r#in,
            format,
            separator,
            stats,
            verbose,
        } => {
            init_logging(verbose);
            encode::run_encode(EncodeArgs {
                names,
                r#in,
                formats: format,
                separator,
                stats,
            })
        }
        Commands::Decode {
            text,
            r#in,
            format,
            verbose,
        } => {
            init_logging(verbose);
            decode::run_decode(DecodeArgs { text, r#in, format })
        }
        Commands::Verify {
            names,
            r#in,
            quiet,
            verbose,
        } => {
            init_logging(verbose);
            verify::run_verify(VerifyArgs { names, r#in, quiet })
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "option119=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

/// Input text from positional arguments or from `--in`.
pub(crate) fn read_input(args: &[String], path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None if !args.is_empty() => Ok(args.join(" ")),
        None => bail!("No input given (pass it as arguments or use --in)"),
    }
}

pub(crate) fn print_encode_stats(stats: &EncodeStats) {
    println!("Domain names: {}", stats.names);
    println!("Encoded length: {} bytes", stats.encoded_len);
    println!("Uncompressed length: {} bytes", stats.uncompressed_len);
    println!("Compression pointers: {}", stats.pointers);
    println!("Bytes saved: {}", stats.bytes_saved());
}
