use std::fs::File;
use std::io::{BufRead, BufReader};

use crossbeam_channel as channel;

/// Streams dictionary lines to the build loop. Runs on a pool worker; the
/// channel closing on the consumer side just ends the read early.
pub(crate) fn stream_lines(file: File, tx: channel::Sender<String>) {
    let reader = BufReader::new(file);

    for raw_line in reader.lines() {
        if let Ok(line) = raw_line {
            if tx.send(line).is_err() {
                return;
            }
        }
    }
}
