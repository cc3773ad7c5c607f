use tracing::debug;

use crate::commands::{ToolStateRequest, ToolStateResponse};
use crate::errors::ClientError;
use crate::transport::{Method, Transport};
use crate::URI_TOOL;

use super::ToolCommand;

/// A fully encoded request: everything the transport needs for one round
/// trip against the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    pub method: Method,
    pub uri: String,
    pub body: Option<Vec<u8>>,
}

/// Any single operation against the tool endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolRequest {
    /// Read the current per-tool state, optionally with history.
    ReadState(ToolStateRequest),
    /// One of the POST commands.
    Command(ToolCommand),
}

impl ToolRequest {
    /// Encodes into method, URI and body. Reads append their query
    /// parameters to the endpoint path and carry no body; writes serialize
    /// their JSON body and fail only if that serialization fails.
    pub fn encode(&self) -> Result<EncodedRequest, ClientError> {
        match self {
            ToolRequest::ReadState(req) => Ok(EncodedRequest {
                method: Method::Get,
                uri: format!("{}?history={}&limit={}", URI_TOOL, req.history, req.limit),
                body: None,
            }),
            ToolRequest::Command(cmd) => {
                let body = serde_json::to_vec(cmd)
                    .map_err(|e| ClientError::Serialization(e.to_string()))?;
                Ok(EncodedRequest {
                    method: Method::Post,
                    uri: URI_TOOL.to_string(),
                    body: Some(body),
                })
            }
        }
    }

    /// Runs the operation: encode, one round trip, decode.
    ///
    /// Reads return the normalized state; writes ignore the response body
    /// and return `None` on success. Transport errors pass through
    /// unchanged, with no retry. A read payload that cannot be normalized
    /// surfaces as `MalformedPayload`, distinct from transport failures.
    pub async fn execute<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<Option<ToolStateResponse>, ClientError> {
        let request = self.encode()?;
        debug!(method = %request.method, uri = %request.uri, "dispatching tool request");

        let bytes = transport
            .do_request(request.method, &request.uri, request.body.as_deref())
            .await?;

        match self {
            ToolRequest::ReadState(_) => {
                let state: ToolStateResponse = serde_json::from_slice(&bytes)
                    .map_err(|e| ClientError::MalformedPayload(e.to_string()))?;
                Ok(Some(state))
            }
            ToolRequest::Command(_) => Ok(None),
        }
    }
}
