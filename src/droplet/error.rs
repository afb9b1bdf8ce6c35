use crate::model::Field;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DropletError {
    #[error("Field `{0}` must not be empty")]
    MissingRequiredField(Field),

    #[error("Field `{field}` must be {expected}")]
    InvalidFormat { field: Field, expected: &'static str },

    #[error("Field `{field}` must be one of these values: [{allowed}]")]
    InvalidEnum { field: Field, allowed: &'static str },

    #[error("Supplied action is not supported: {0}")]
    UnsupportedAction(String),

    #[error("Exiting because of user interrupt")]
    Cancelled,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, DropletError>;
