use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ClientError;
use crate::packets::{ToolCommand, ToolRequest};
use crate::transport::Transport;

/// TargetCommand sets the given target temperature on the printer's tools.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct TargetCommand {
    /// Target temperature(s) to set, key must match the format tool{n}
    /// with n being the tool's index starting with 0, or `bed`.
    pub target: HashMap<String, i32>,
}

impl TargetCommand {
    pub fn new(target: HashMap<String, i32>) -> Self {
        Self { target }
    }

    /// Sends the command, returning an error if any.
    pub async fn send<T: Transport>(&self, transport: &T) -> Result<(), ClientError> {
        ToolRequest::Command(ToolCommand::Target(self.clone()))
            .execute(transport)
            .await
            .map(|_| ())
    }
}
