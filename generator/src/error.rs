//! This file describe errors we may meet.

use std::fmt::Display;

/// Document-level failures, these abort the whole run.
#[derive(Debug)]
pub enum GeneratorError {
    /// Bad invocation, e.g. an unsupported package manager.
    Config(String),
    /// Lockfile unreadable, or output unwritable.
    Io(String),
    /// Lockfile is not valid JSON.
    Parse(String),
}

impl GeneratorError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) => -1,
            Self::Io(_) => -2,
            Self::Parse(_) => -3,
        }
    }
}

impl Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config error: {msg}"),
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

/// Per-entry failures, these drop the entry but never abort the run.
#[derive(Debug)]
pub enum EntryError {
    /// Inline integrity value cannot be decoded.
    HashDecode(String),
    /// Network fetch failed, no hash can be computed.
    Fetch(String),
}

impl Display for EntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HashDecode(msg) => write!(f, "cannot decode integrity: {msg}"),
            Self::Fetch(msg) => write!(f, "cannot fetch: {msg}"),
        }
    }
}
