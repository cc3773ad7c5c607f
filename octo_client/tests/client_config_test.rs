use octo_client::transport::ClientConfig;

#[test]
fn test_validate_accepts_complete_config() {
    let config = ClientConfig::new("octopi.local".to_string(), 5000, "ABC123".to_string());
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_missing_fields() {
    let mut config = ClientConfig::new(String::new(), 5000, "ABC123".to_string());
    assert!(config.validate().is_err());

    config.addr = "octopi.local".to_string();
    config.port = 0;
    assert!(config.validate().is_err());

    config.port = 5000;
    config.api_key = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_base_url_format() {
    let config = ClientConfig::new("192.168.1.20".to_string(), 80, "key".to_string());
    assert_eq!(config.base_url(), "http://192.168.1.20:80");
}
