//! OxiArc LZ5 CLI
//!
//! Decodes LArc `-lz5-` compressed entries.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{DecodeOptions, cmd_decode, cmd_info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxiarc-lz5")]
#[command(author, version, about = "Decode LArc -lz5- compressed entries")]
#[command(long_about = "
Decodes a raw LArc -lz5- (LZSS) entry. The archive container is not parsed:
point the tool at the compressed bytes with --offset and --length.

Examples:
  oxiarc-lz5 decode entry.lz5 -o entry.bin
  oxiarc-lz5 decode archive.lzh --offset 41 --length 1187 -o readme.txt
  oxiarc-lz5 decode entry.lz5 > entry.bin
  oxiarc-lz5 info --json
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors and suppress summaries
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode one compressed entry
    #[command(alias = "d")]
    Decode {
        /// File holding the compressed entry
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Byte offset of the entry within the input file
        #[arg(long, default_value_t = 0)]
        offset: u64,

        /// Compressed length of the entry (rest of the file if omitted)
        #[arg(long)]
        length: Option<u64>,

        /// Method tag from the entry header
        #[arg(short, long, default_value = "-lz5-", allow_hyphen_values = true)]
        method: String,

        /// Bytes requested from the decoder per read
        #[arg(long, default_value_t = 8192, value_parser = clap::value_parser!(u64).range(1..))]
        chunk_size: u64,

        /// Show progress bar
        #[arg(short = 'P', long)]
        progress: bool,

        /// Print the summary as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the decoder's format parameters
    #[command(alias = "i")]
    Info {
        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let _ = tracing_subscriber::fmt()
        .with_max_level(utils::log_level(cli.verbose, cli.quiet))
        .with_writer(std::io::stderr)
        .try_init();

    let result = match cli.command {
        Commands::Decode {
            input,
            output,
            offset,
            length,
            method,
            chunk_size,
            progress,
            json,
        } => cmd_decode(&DecodeOptions {
            input,
            output,
            offset,
            length,
            method,
            chunk_size: chunk_size as usize,
            progress,
            json,
            quiet: cli.quiet,
        })
        .map(|_| ()),
        Commands::Info { json } => cmd_info(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_decode() {
        let cli = Cli::try_parse_from([
            "oxiarc-lz5",
            "-vv",
            "decode",
            "a.lzh",
            "--offset",
            "41",
            "--length",
            "100",
            "--method",
            "-lz5-",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Decode {
                offset,
                length,
                method,
                chunk_size,
                ..
            } => {
                assert_eq!(offset, 41);
                assert_eq!(length, Some(100));
                assert_eq!(method, "-lz5-");
                assert_eq!(chunk_size, 8192);
            }
            Commands::Info { .. } => panic!("expected decode"),
        }
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let parsed = Cli::try_parse_from(["oxiarc-lz5", "decode", "a.lz5", "--chunk-size", "0"]);
        assert!(parsed.is_err());
    }
}
