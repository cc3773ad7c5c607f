use std::collections::HashMap;
use std::env;

use octo_client::commands::{TargetCommand, ToolStateRequest};
use octo_client::transport::{Client, ClientConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = env::var("PRINTER_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PRINTER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5000);
    let api_key = env::var("PRINTER_API_KEY").unwrap_or_default();

    let config = ClientConfig::new(addr, port, api_key);
    if let Err(e) = config.validate() {
        eprintln!("Configuration error: {}", e);
        return;
    }
    let client = Client::new(config);

    match ToolStateRequest::new(true, 5).send(&client).await {
        Ok(state) => {
            for (tool, readings) in &state.current {
                println!(
                    "{}: {:.1} -> {:.1} (offset {:.1})",
                    tool, readings.actual, readings.target, readings.offset
                );
            }
            println!("{} history points", state.history.len());
        }
        Err(e) => {
            eprintln!("Failed to read tool state: {}", e);
            return;
        }
    }

    let mut target = HashMap::new();
    target.insert("tool0".to_string(), 210);
    if let Err(e) = TargetCommand::new(target).send(&client).await {
        eprintln!("Failed to set target temperature: {}", e);
    }
}
