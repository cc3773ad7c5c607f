use serde::{Deserialize, Serialize};

use crate::errors::ClientError;
use crate::packets::{ToolCommand, ToolRequest};
use crate::transport::Transport;

/// SelectCommand selects the printer's current tool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectCommand {
    /// Tool to select, format tool{n} with n being the tool's index
    /// starting with 0.
    pub tool: String,
}

impl SelectCommand {
    pub fn new(tool: String) -> Self {
        Self { tool }
    }

    /// Sends the command, returning an error if any.
    pub async fn send<T: Transport>(&self, transport: &T) -> Result<(), ClientError> {
        ToolRequest::Command(ToolCommand::Select(self.clone()))
            .execute(transport)
            .await
            .map(|_| ())
    }
}
