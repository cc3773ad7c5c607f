use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::ClientError;
use crate::packets::ToolRequest;
use crate::transport::Transport;
use crate::{HistoryEntry, ToolState};

/// ToolStateRequest retrieves the current temperature data (actual, target
/// and offset) plus optionally a limited history (actual, target,
/// timestamp) for all of the printer's available tools.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolStateRequest {
    /// Include the temperature history in the response.
    pub history: bool,
    /// Limits the amount of returned history data points.
    pub limit: u32,
}

impl ToolStateRequest {
    pub fn new(history: bool, limit: u32) -> Self {
        Self { history, limit }
    }

    /// Sends the read and returns the normalized tool state.
    pub async fn send<T: Transport>(&self, transport: &T) -> Result<ToolStateResponse, ClientError> {
        match ToolRequest::ReadState(*self).execute(transport).await? {
            Some(state) => Ok(state),
            None => Err(ClientError::MalformedPayload(
                "tool state response missing".to_string(),
            )),
        }
    }
}

/// Normalized tool state: per-tool current readings split from the
/// temperature history.
///
/// The host returns both in one flat JSON object, with the per-tool keys
/// and the `history` array as siblings. The manual `Deserialize` impl
/// below reshapes that wire form into the two fields here.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct ToolStateResponse {
    pub current: HashMap<String, ToolState>,
    pub history: Vec<HistoryEntry>,
}

#[derive(Deserialize, Default)]
struct SplitToolState {
    #[serde(default)]
    current: HashMap<String, ToolState>,
    #[serde(default)]
    history: Vec<HistoryEntry>,
}

impl<'de> Deserialize<'de> for ToolStateResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut raw = serde_json::Map::deserialize(deserializer)?;

        // Every key other than `history` is a per-tool current entry. An
        // absent or null history is an empty history, not an error.
        let history = match raw.remove("history") {
            None | Some(Value::Null) => Value::Array(Vec::new()),
            Some(value) => value,
        };

        let split = serde_json::json!({
            "current": Value::Object(raw),
            "history": history,
        });
        let inner: SplitToolState =
            serde_json::from_value(split).map_err(serde::de::Error::custom)?;

        Ok(Self {
            current: inner.current,
            history: inner.history,
        })
    }
}
