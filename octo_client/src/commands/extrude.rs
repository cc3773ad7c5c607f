use serde::{Deserialize, Serialize};

use crate::errors::ClientError;
use crate::packets::{ToolCommand, ToolRequest};
use crate::transport::Transport;

/// ExtrudeCommand extrudes the given amount of filament from the currently
/// selected tool.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtrudeCommand {
    /// Amount of filament to extrude in mm. May be negative to retract.
    pub amount: i32,
}

impl ExtrudeCommand {
    pub fn new(amount: i32) -> Self {
        Self { amount }
    }

    /// Sends the command, returning an error if any.
    pub async fn send<T: Transport>(&self, transport: &T) -> Result<(), ClientError> {
        ToolRequest::Command(ToolCommand::Extrude(*self))
            .execute(transport)
            .await
            .map(|_| ())
    }
}
