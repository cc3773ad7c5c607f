use std::error::Error;
use std::fmt;
use serde::{Deserialize, Serialize};

/// Errors surfaced by the client layer.
///
/// Transport failures, encoding failures and malformed host payloads stay
/// distinct so callers can tell "host unreachable" from "host returned
/// garbage". Nothing is retried; every failure goes straight back to the
/// caller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    Serialization(String),
    Request(String),
    Unauthorized,
    UnexpectedStatus(u16, String),
    MalformedPayload(String),
}

impl Error for ClientError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ClientError::Serialization(ref msg) => write!(f, "Serialization error: {}", msg),
            ClientError::Request(ref msg) => write!(f, "Request error: {}", msg),
            ClientError::Unauthorized => write!(f, "Host rejected the application key"),
            ClientError::UnexpectedStatus(code, ref body) => {
                write!(f, "Host returned status {}: {}", code, body)
            }
            ClientError::MalformedPayload(ref msg) => write!(f, "Malformed payload: {}", msg),
        }
    }
}
