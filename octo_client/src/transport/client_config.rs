use serde::{Deserialize, Serialize};

/// Connection settings for a printer host.
///
/// ```rust,ignore
/// let config = ClientConfig::new("octopi.local".to_string(), 5000, key);
///
/// if let Err(e) = config.validate() {
///     println!("Configuration error: {}", e);
///     return;
/// }
///
/// let client = Client::new(config);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub addr: String,
    pub port: u16,
    /// Application key the host expects in the `X-Api-Key` header.
    pub api_key: String,
}

impl ClientConfig {
    pub fn new(addr: String, port: u16, api_key: String) -> Self {
        Self {
            addr,
            port,
            api_key,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.addr.is_empty() {
            return Err("Address cannot be empty.".to_string());
        }
        if self.port == 0 {
            return Err("Port number must be greater than 0.".to_string());
        }
        if self.api_key.is_empty() {
            return Err("Application key cannot be empty.".to_string());
        }
        Ok(())
    }

    /// Base URL the encoded request paths are appended to.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.addr, self.port)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1".to_string(),
            port: 5000,
            api_key: String::new(),
        }
    }
}
