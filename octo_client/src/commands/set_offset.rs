use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;
use crate::packets::{ToolCommand, ToolRequest};
use crate::transport::Transport;

/// OffsetCommand sets the given temperature offset on the printer's tools.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct OffsetCommand {
    /// Offset(s) to set, key must match the format tool{n} with n being
    /// the tool's index starting with 0, or `bed`.
    pub offsets: HashMap<String, i32>,
}

impl OffsetCommand {
    pub fn new(offsets: HashMap<String, i32>) -> Self {
        Self { offsets }
    }

    /// Sends the command, returning an error if any.
    pub async fn send<T: Transport>(&self, transport: &T) -> Result<(), ClientError> {
        ToolRequest::Command(ToolCommand::Offset(self.clone()))
            .execute(transport)
            .await
            .map(|_| ())
    }
}
