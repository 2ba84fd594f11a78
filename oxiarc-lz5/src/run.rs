//! Decoding of a single run.
//!
//! A run is one control byte followed by eight commands. Bit `n` of the
//! control byte (least significant first) selects the kind of command `n`:
//!
//! ```text
//! bit set:    [literal]                     1 byte, output as-is
//! bit clear:  [c0] [c1]                     copy from the window
//!              start  = c0 | (c1 & 0xF0) << 4   (12-bit absolute index)
//!              length = (c1 & 0x0F) + 3         (3..=18)
//! ```

use crate::constants::{COMMANDS_PER_RUN, THRESHOLD};
use crate::history::HistoryBuffer;
use crate::queue::OutputQueue;
use oxiarc_core::ByteSource;

/// One decoded command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Output a byte.
    Literal(u8),
    /// Replay `length` bytes from absolute window index `start`.
    Copy {
        /// Absolute window index of the first source byte.
        start: usize,
        /// Number of bytes to copy.
        length: usize,
    },
}

impl Command {
    /// Decode the two payload bytes of a copy command.
    pub fn copy(c0: u8, c1: u8) -> Self {
        let start = usize::from(c0) | (usize::from(c1 & 0xF0) << 4);
        let length = usize::from(c1 & 0x0F) + THRESHOLD;
        Self::Copy { start, length }
    }

    /// Pull the payload of command number `bit` of a run controlled by
    /// `control`. Returns `None` if the source cannot supply it.
    fn pull<S: ByteSource + ?Sized>(source: &mut S, control: u8, bit: usize) -> Option<Self> {
        if control & (1 << bit) != 0 {
            source.pull_byte().map(Self::Literal)
        } else {
            let mut cmd = [0u8; 2];
            source
                .pull(&mut cmd)
                .then(|| Self::copy(cmd[0], cmd[1]))
        }
    }
}

/// Decode one run into `queue`, updating `history`.
///
/// The queue is cleared first. Returns `false` if the source failed, either
/// on the control byte (the queue stays empty) or part-way through the run.
/// In the latter case the commands completed before the failure are kept in
/// both the queue and the window; nothing is rolled back. Existing LArc
/// decoders behave the same way, so truncated entries yield the same prefix.
pub fn decode_run<S: ByteSource + ?Sized>(
    source: &mut S,
    history: &mut HistoryBuffer,
    queue: &mut OutputQueue,
) -> bool {
    queue.clear();

    let Some(control) = source.pull_byte() else {
        return false;
    };

    for bit in 0..COMMANDS_PER_RUN {
        let Some(command) = Command::pull(source, control, bit) else {
            tracing::debug!(
                "lz5: input ended at command {} of run (control=0x{:02x}), keeping {} bytes",
                bit,
                control,
                queue.len()
            );
            return false;
        };

        match command {
            Command::Literal(byte) => history.append_byte(byte, queue),
            Command::Copy { start, length } => history.copy_range(start, length, queue),
        }
    }

    tracing::trace!("lz5: run control=0x{:02x} produced {} bytes", control, queue.len());
    true
}
