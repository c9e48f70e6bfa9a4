use thiserror::Error;

use crate::permission::PermissionId;

#[derive(Debug, Error)]
pub enum AuthError {
    // Classification
    #[error("unknown permission: {0}")]
    UnknownPermission(String),

    // Authorization
    #[error("forbidden: missing permission {required}")]
    Forbidden { required: PermissionId },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("not found: {0}")]
    NotFound(String),

    // Config
    #[error("configuration error: {0}")]
    Config(String),

    #[error("configuration file not found at {0}, run `um-access init` first")]
    ConfigNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),
}

pub type Result<T> = std::result::Result<T, AuthError>;
