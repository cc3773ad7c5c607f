use serde::{Deserialize, Serialize};

use crate::commands::*;

/// The write commands accepted by the tool endpoint.
///
/// Serializes to the host's wire form: the `command` discriminator plus
/// the variant's payload fields flattened into the same object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum ToolCommand {
    Target(TargetCommand),
    Offset(OffsetCommand),
    Extrude(ExtrudeCommand),
    Select(SelectCommand),
    Flowrate(FlowrateCommand),
}
