//! Update channel: each message is a complete replacement `TreeState`,
//! one JSON object per line. Blank lines are ignored and malformed lines
//! are logged and skipped without disturbing the current state.

use std::io::BufRead;
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};

use log::{info, warn};

use crate::app::AppEvent;
use crate::state::TreeState;

/// Parse one update line; `None` for blank or malformed input
pub fn parse_update(line: &str) -> Option<TreeState> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match TreeState::from_json(line) {
        Ok(state) => Some(state),
        Err(e) => {
            warn!("Ignoring malformed state update {:?}: {}", line, e);
            None
        }
    }
}

/// Forward updates until the reader hits EOF or the receiver goes away
pub fn forward_updates<R: BufRead>(reader: R, events: &Sender<AppEvent>) -> usize {
    let mut forwarded = 0;
    for line in reader.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Update stream read error: {}", e);
                break;
            }
        };
        if let Some(state) = parse_update(&line) {
            if events.send(AppEvent::StateUpdated(state)).is_err() {
                break;
            }
            forwarded += 1;
        }
    }
    info!("Update stream closed after {} updates", forwarded);
    forwarded
}

pub fn spawn_update_reader<R>(reader: R, events: Sender<AppEvent>) -> JoinHandle<usize>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || forward_updates(reader, &events))
}
