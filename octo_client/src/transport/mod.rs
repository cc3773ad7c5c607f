#[cfg(feature = "client")]
mod client;
#[cfg(feature = "client")]
pub use client::*;

mod client_config;
pub use client_config::*;

use std::fmt;
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;

/// HTTP methods the host API uses.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
        }
    }
}

/// The single transport-facing dependency: one HTTP round trip.
///
/// `uri` is the path (plus query string) below the host's base URL; `body`
/// is the JSON body for POSTs. Implementations own connection handling,
/// authentication and timeouts; this crate never retries.
pub trait Transport {
    fn do_request(
        &self,
        method: Method,
        uri: &str,
        body: Option<&[u8]>,
    ) -> impl Future<Output = Result<Vec<u8>, ClientError>> + Send;
}
