/// Validates that the POST body of every write command matches the host's
/// wire format: the `command` discriminator plus exactly the command's
/// declared fields, flattened into one object.
use std::collections::HashMap;

use octo_client::commands::{
    ExtrudeCommand, FlowrateCommand, OffsetCommand, SelectCommand, TargetCommand,
};
use octo_client::packets::ToolCommand;

#[test]
fn test_target_command_body_format() {
    let mut target = HashMap::new();
    target.insert("tool0".to_string(), 210);
    target.insert("bed".to_string(), 60);

    let command = ToolCommand::Target(TargetCommand::new(target));
    let json = serde_json::to_string(&command).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["command"], "target");
    assert_eq!(value["target"]["tool0"], 210);
    assert_eq!(value["target"]["bed"], 60);

    // Discriminator plus the one declared field, nothing else.
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn test_offset_command_body_format() {
    let mut offsets = HashMap::new();
    offsets.insert("tool0".to_string(), -5);

    let command = ToolCommand::Offset(OffsetCommand::new(offsets));
    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&command).unwrap()).unwrap();

    assert_eq!(value["command"], "offset");
    assert_eq!(value["offsets"]["tool0"], -5);
    assert_eq!(value.as_object().unwrap().len(), 2);

    // The payload must be a sibling of the discriminator, not nested
    // under a sub-key.
    assert!(value.get("payload").is_none());
    assert!(value.get("offset").is_none());
}

#[test]
fn test_extrude_command_body_format() {
    let command = ToolCommand::Extrude(ExtrudeCommand::new(5));
    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&command).unwrap()).unwrap();

    assert_eq!(value["command"], "extrude");
    assert_eq!(value["amount"], 5);
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn test_extrude_command_negative_amount_retracts() {
    let command = ToolCommand::Extrude(ExtrudeCommand::new(-3));
    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&command).unwrap()).unwrap();

    assert_eq!(value["command"], "extrude");
    assert_eq!(value["amount"], -3);
}

#[test]
fn test_select_command_body_format() {
    let command = ToolCommand::Select(SelectCommand::new("tool1".to_string()));
    let json = serde_json::to_string(&command).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["command"], "select");
    assert_eq!(value["tool"], "tool1");
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn test_flowrate_command_keeps_string_factor() {
    let command = ToolCommand::Flowrate(FlowrateCommand::new("95".to_string()));
    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&command).unwrap()).unwrap();

    assert_eq!(value["command"], "flowrate");
    // The host expects the percentage as a string, not a number.
    assert_eq!(value["factor"], "95");
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn test_command_discriminators_are_unique() {
    let mut seen = Vec::new();
    let commands = vec![
        ToolCommand::Target(TargetCommand::default()),
        ToolCommand::Offset(OffsetCommand::default()),
        ToolCommand::Extrude(ExtrudeCommand::default()),
        ToolCommand::Select(SelectCommand::default()),
        ToolCommand::Flowrate(FlowrateCommand::default()),
    ];

    for command in commands {
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&command).unwrap()).unwrap();
        let tag = value["command"].as_str().unwrap().to_string();
        assert!(!seen.contains(&tag), "duplicate discriminator {}", tag);
        seen.push(tag);
    }

    assert_eq!(
        seen,
        vec!["target", "offset", "extrude", "select", "flowrate"]
    );
}

#[test]
fn test_command_round_trips_through_tag() {
    let command = ToolCommand::Select(SelectCommand::new("tool0".to_string()));
    let json = serde_json::to_string(&command).unwrap();
    let parsed: ToolCommand = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, command);
}
