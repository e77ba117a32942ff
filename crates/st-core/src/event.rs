//! Session events parsed from a log.

use std::fmt;
use std::str::FromStr;

/// Whether an event opens or closes a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Start,
    End,
}

impl Action {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::End => "End",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Start" => Ok(Self::Start),
            "End" => Ok(Self::End),
            _ => Err(UnknownAction(s.to_string())),
        }
    }
}

/// Error type for unknown action strings.
#[derive(Debug, Clone)]
pub struct UnknownAction(String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

/// A single log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Seconds since midnight. Not range checked, so `99:99:99` is 362439.
    pub seconds: i64,
    pub username: String,
    pub action: Action,
}

impl Event {
    pub fn new(seconds: i64, username: impl Into<String>, action: Action) -> Self {
        Self {
            seconds,
            username: username.into(),
            action,
        }
    }
}
