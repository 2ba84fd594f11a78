//! Info command implementation.

use oxiarc_core::EntryDecoder;
use oxiarc_lz5::Lz5Decoder;
use oxiarc_lz5::constants::{
    COMMANDS_PER_RUN, MAX_MATCH, OUTPUT_QUEUE_SIZE, START_OFFSET, THRESHOLD, WINDOW_SIZE,
};
use serde::{Deserialize, Serialize};

/// JSON serializable description of the decoder.
#[derive(Debug, Serialize, Deserialize)]
struct MethodInfoJson {
    method: String,
    window_size: usize,
    start_offset: usize,
    threshold: usize,
    max_match: usize,
    commands_per_run: usize,
    max_run_output: usize,
    instance_size: usize,
}

impl MethodInfoJson {
    fn lz5() -> Self {
        Self {
            method: String::from_utf8_lossy(Lz5Decoder::METHOD_ID).into_owned(),
            window_size: WINDOW_SIZE,
            start_offset: START_OFFSET,
            threshold: THRESHOLD,
            max_match: MAX_MATCH,
            commands_per_run: COMMANDS_PER_RUN,
            max_run_output: OUTPUT_QUEUE_SIZE,
            instance_size: Lz5Decoder::INSTANCE_SIZE,
        }
    }
}

pub fn cmd_info(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let info = MethodInfoJson::lz5();

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("Method Information");
    println!("==================");
    println!("Method: {}", info.method);
    println!("Window size: {} bytes", info.window_size);
    println!(
        "Initial cursor: {:#05x} (window size - {})",
        info.window_size - info.start_offset,
        info.start_offset
    );
    println!("Copy length: {}..={}", info.threshold, info.max_match);
    println!(
        "Run: {} commands, up to {} bytes of output",
        info.commands_per_run, info.max_run_output
    );
    println!("Decoder instance size: {} bytes", info.instance_size);

    Ok(())
}
