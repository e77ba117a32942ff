//! Core domain logic for session-tally.
//!
//! This crate contains the fundamental types and logic for:
//! - Parsing: turning `HH:MM:SS user Start|End` log lines into events
//! - Aggregation: pairing starts and ends into per-user session totals

mod aggregate;
mod error;
pub mod event;
pub mod parse;

pub use aggregate::{SessionReport, Span, UserStats, aggregate};
pub use error::LogError;
pub use event::{Action, Event, UnknownAction};
pub use parse::{load_events, parse_line, read_events};
