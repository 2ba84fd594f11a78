//! Decode command implementation.

use crate::utils::{create_progress_bar, format_size, space_savings};
use indicatif::ProgressBar;
use oxiarc_core::{ByteSource, OxiArcError, ReadSource};
use oxiarc_lz5::{Lz5Decoder, Lz5Reader};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::PathBuf;

/// Options for the decode command.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
    /// File holding the compressed entry.
    pub input: PathBuf,
    /// Destination file; stdout when `None`.
    pub output: Option<PathBuf>,
    /// Byte offset of the entry within `input`.
    pub offset: u64,
    /// Compressed length of the entry; the rest of the file when `None`.
    pub length: Option<u64>,
    /// Method tag from the entry header.
    pub method: String,
    /// Bytes requested from the decoder per read.
    pub chunk_size: usize,
    /// Show a progress bar.
    pub progress: bool,
    /// Print the summary as JSON.
    pub json: bool,
    /// Suppress the summary.
    pub quiet: bool,
}

/// Result of decoding one entry.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecodeSummary {
    input: String,
    method: String,
    offset: u64,
    compressed_size: u64,
    decoded_size: u64,
    space_savings: f64,
}

impl DecodeSummary {
    fn to_human(&self) -> String {
        format!(
            "{} ({} at offset {}): {} -> {} ({:.1}% saved)",
            self.input,
            self.method,
            self.offset,
            format_size(self.compressed_size),
            format_size(self.decoded_size),
            self.space_savings
        )
    }
}

pub fn cmd_decode(opts: &DecodeOptions) -> Result<DecodeSummary, Box<dyn std::error::Error>> {
    let decoder = Lz5Decoder::for_method(opts.method.as_bytes())?;

    let mut file = File::open(&opts.input)?;
    let available = file.metadata()?.len().saturating_sub(opts.offset);
    let entry_len = opts.length.map_or(available, |len| len.min(available));
    file.seek(SeekFrom::Start(opts.offset))?;

    tracing::info!(
        "decoding {} bytes of {} at offset {}",
        entry_len,
        opts.input.display(),
        opts.offset
    );

    let source = ReadSource::new(BufReader::new(file).take(entry_len));
    let mut reader = Lz5Reader::with_decoder(decoder, source);
    let pb = create_progress_bar(Some(entry_len), opts.progress);

    match &opts.output {
        Some(path) => {
            let out = BufWriter::new(File::create(path)?);
            copy_entry(&mut reader, out, opts.chunk_size, &pb)?;
        }
        None => {
            copy_entry(&mut reader, io::stdout().lock(), opts.chunk_size, &pb)?;
        }
    }
    pb.finish_and_clear();

    // The decoder cannot tell a read error from the end of the entry.
    if let Some(err) = reader.source_mut().take_error() {
        return Err(OxiArcError::Io(err).into());
    }

    let decoder = reader.decoder();
    let summary = DecodeSummary {
        input: opts.input.display().to_string(),
        method: opts.method.clone(),
        offset: opts.offset,
        compressed_size: decoder.total_in(),
        decoded_size: decoder.total_out(),
        space_savings: space_savings(decoder.total_in(), decoder.total_out()),
    };

    tracing::info!(
        "decoded {} bytes from {} compressed bytes",
        summary.decoded_size,
        summary.compressed_size
    );

    if !opts.quiet {
        let text = if opts.json {
            serde_json::to_string_pretty(&summary)?
        } else {
            summary.to_human()
        };
        // Keep stdout clean when it carries the decoded data.
        if opts.output.is_some() {
            println!("{}", text);
        } else {
            eprintln!("{}", text);
        }
    }

    Ok(summary)
}

/// Pump decoded bytes from `reader` into `out` in `chunk_size` reads.
fn copy_entry<S: ByteSource, W: Write>(
    reader: &mut Lz5Reader<S>,
    mut out: W,
    chunk_size: usize,
    pb: &ProgressBar,
) -> io::Result<()> {
    let mut chunk = vec![0u8; chunk_size.max(1)];

    loop {
        let n = reader.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        out.write_all(&chunk[..n])?;
        pb.set_position(reader.decoder().total_in());
    }

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(dir: &TempDir, input: &[u8]) -> DecodeOptions {
        let path = dir.path().join("entry.lz5");
        std::fs::write(&path, input).unwrap();
        DecodeOptions {
            input: path,
            output: Some(dir.path().join("entry.out")),
            offset: 0,
            length: None,
            method: "-lz5-".to_string(),
            chunk_size: 3,
            progress: false,
            json: false,
            quiet: true,
        }
    }

    #[test]
    fn test_decode_to_file() {
        let dir = TempDir::new().unwrap();
        // Seven literals then a 3-byte copy of the first three.
        let opts = options(&dir, b"\x7Fabc-xyz\xEE\xF0");

        let summary = cmd_decode(&opts).unwrap();

        let decoded = std::fs::read(opts.output.as_ref().unwrap()).unwrap();
        assert_eq!(decoded, b"abc-xyzabc");
        assert_eq!(summary.decoded_size, 10);
        assert_eq!(summary.compressed_size, 10);
    }

    #[test]
    fn test_decode_carves_entry() {
        let dir = TempDir::new().unwrap();
        let mut opts = options(&dir, b"HEADER\xFFpayload!TRAILER");
        opts.offset = 6;
        opts.length = Some(9);

        cmd_decode(&opts).unwrap();

        let decoded = std::fs::read(opts.output.as_ref().unwrap()).unwrap();
        assert_eq!(decoded, b"payload!");
    }

    #[test]
    fn test_decode_rejects_other_methods() {
        let dir = TempDir::new().unwrap();
        let mut opts = options(&dir, b"\xFFpayload!");
        opts.method = "-lh5-".to_string();

        let err = cmd_decode(&opts).unwrap_err();
        assert!(err.to_string().contains("-lh5-"));
    }

    #[test]
    fn test_summary_json() {
        let summary = DecodeSummary {
            input: "a.lz5".to_string(),
            method: "-lz5-".to_string(),
            offset: 0,
            compressed_size: 9,
            decoded_size: 8,
            space_savings: -12.5,
        };

        let json = serde_json::to_string(&summary).unwrap();
        let parsed: DecodeSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.decoded_size, 8);
        assert!(summary.to_human().contains("a.lz5"));
    }
}
