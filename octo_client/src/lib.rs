use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod commands;
pub mod errors;
pub mod packets;
pub mod transport;
pub use errors::*;

/// Path of the printer host's tool endpoint. Every command in this crate
/// targets it: reads via GET with query parameters, writes via POST.
pub const URI_TOOL: &str = "/api/printer/tool";

/// Temperature readings for one heated component (a hotend `tool{n}` with n
/// starting at 0, or the `bed`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct ToolState {
    /// Measured temperature in degrees Celsius.
    #[serde(default)]
    pub actual: f64,
    /// Target temperature in degrees Celsius.
    #[serde(default)]
    pub target: f64,
    /// Configured temperature offset.
    #[serde(default)]
    pub offset: f64,
}

/// One temperature history sample.
///
/// Next to the timestamp the host emits either flat readings or per-tool
/// keyed objects depending on firmware; everything but the timestamp is
/// kept verbatim in `readings` so neither shape loses data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct HistoryEntry {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(flatten)]
    pub readings: HashMap<String, serde_json::Value>,
}
