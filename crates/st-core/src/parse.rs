//! Log line parsing.
//!
//! A valid line looks like `08:30:00 alice Start`. Anything else is skipped
//! without a diagnostic beyond a `trace` event.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::LogError;
use crate::event::Event;

/// `HH:MM:SS <username> <Start|End>` with two ASCII digits per time field.
static LOG_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})\s+(\w+)\s+(Start|End)$").unwrap()
});

/// Parses a single log line, ignoring surrounding whitespace.
///
/// Returns `None` for blank or malformed lines. Time fields are not range
/// checked: `25:61:99` is accepted and converted with the same linear formula.
pub fn parse_line(line: &str) -> Option<Event> {
    let caps = LOG_LINE_RE.captures(line.trim())?;

    let hours: i64 = caps[1].parse().ok()?;
    let minutes: i64 = caps[2].parse().ok()?;
    let seconds: i64 = caps[3].parse().ok()?;
    let action = caps[5].parse().ok()?;

    Some(Event::new(
        hours * 3600 + minutes * 60 + seconds,
        &caps[4],
        action,
    ))
}

/// Reads every parseable event from `reader`, in input order.
///
/// Lines end at `\n`, `\r\n`, or a lone `\r`. Fails on the first read
/// error, including invalid UTF-8.
pub fn read_events<R: BufRead>(reader: R) -> io::Result<Vec<Event>> {
    let mut events = Vec::new();
    let mut line_no = 0_usize;
    for chunk in reader.split(b'\n') {
        let chunk = String::from_utf8(chunk?)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let chunk = chunk.strip_suffix('\r').unwrap_or(&chunk);

        for line in chunk.split('\r') {
            line_no += 1;
            match parse_line(line) {
                Some(event) => events.push(event),
                None => tracing::trace!(line = line_no, "skipping unparseable line"),
            }
        }
    }
    Ok(events)
}

/// Opens `path` and reads all of its events.
pub fn load_events(path: &Path) -> Result<Vec<Event>, LogError> {
    let file = File::open(path).map_err(|e| LogError::from_io(path, e))?;
    tracing::debug!(path = %path.display(), "reading session log");

    let events = read_events(BufReader::new(file)).map_err(|e| LogError::from_io(path, e))?;
    tracing::debug!(count = events.len(), "parsed events");
    Ok(events)
}
