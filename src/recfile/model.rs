use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single line of a record file, tagged with its 1-based position.
/// The index is derived from position on every load, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub index: usize,
    pub text: String,
}

/// One registered user, serialized as a single-line JSON object in the
/// users file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Lenient line parse. Lines that are not valid credential JSON are
    /// treated as non-matching, not as corruption.
    pub fn parse(line: &str) -> Option<Self> {
        serde_json::from_str(line).ok()
    }

    pub fn to_line(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
