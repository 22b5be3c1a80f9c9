use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("User already exists")]
    DuplicateUser,

    #[error("No users registered yet.")]
    NoUsersRegistered,

    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl RecfileError {
    /// Auth outcomes are reported on stdout with exit code 1, unlike
    /// I/O faults which go to stderr as generic fatal errors.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            RecfileError::DuplicateUser
                | RecfileError::NoUsersRegistered
                | RecfileError::InvalidCredentials
        )
    }
}

pub type Result<T> = std::result::Result<T, RecfileError>;
