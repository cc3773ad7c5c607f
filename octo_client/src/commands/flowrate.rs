use serde::{Deserialize, Serialize};

use crate::errors::ClientError;
use crate::packets::{ToolCommand, ToolRequest};
use crate::transport::Transport;

/// FlowrateCommand changes the flow rate factor applied to extrusion of
/// the tool.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct FlowrateCommand {
    /// New factor, a percentage between 75 and 125. The host takes the
    /// value as a string, so it is carried as one here.
    pub factor: String,
}

impl FlowrateCommand {
    pub fn new(factor: String) -> Self {
        Self { factor }
    }

    /// Sends the command, returning an error if any.
    pub async fn send<T: Transport>(&self, transport: &T) -> Result<(), ClientError> {
        ToolRequest::Command(ToolCommand::Flowrate(self.clone()))
            .execute(transport)
            .await
            .map(|_| ())
    }
}
