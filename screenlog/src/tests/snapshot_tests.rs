use serde_json::json;

use super::node;
use crate::actions::{action_ids, NodeActions};
use crate::{NodeSnapshot, ScreenLogError, ScreenSnapshot, ScreenSource, SnapshotSource};

#[test]
fn snapshots_round_trip_through_json() {
    let snapshot = ScreenSnapshot {
        root: Some(NodeSnapshot {
            text: Some("hello".to_string()),
            children: vec![node("Button")],
            ..node("Frame")
        }),
        ..Default::default()
    };

    let json = snapshot.to_json().unwrap();
    let reparsed = ScreenSnapshot::from_json(&json).unwrap();
    assert_eq!(reparsed.to_json().unwrap(), json);
}

#[test]
fn malformed_json_is_reported_as_such() {
    let error = ScreenSnapshot::from_json("not a snapshot").unwrap_err();
    assert!(matches!(error, ScreenLogError::MalformedSnapshot(_)));
}

#[test]
fn an_empty_document_is_an_empty_screen() {
    let snapshot = ScreenSnapshot::from_json("{}").unwrap();
    assert!(snapshot.root.is_none());
    assert!(snapshot.windows.is_empty());
    assert_eq!(snapshot.capabilities, Default::default());

    let source = SnapshotSource::new(snapshot);
    assert!(source.root_node().is_none());
    assert!(source.windows().is_empty());
}

#[test]
fn node_defaults_fill_missing_fields() {
    let snapshot = ScreenSnapshot::from_json(
        r#"{"root": {"class_name": "Frame", "state": {"focused": true}}}"#,
    )
    .unwrap();
    let root = snapshot.root.unwrap();

    // Unlisted state flags keep their defaults.
    assert!(root.state.focused);
    assert!(root.state.visible);
    assert!(root.state.enabled);
    assert!(!root.state.checked);
    assert_eq!(root.actions, NodeActions::Bitmask(0));
}

#[test]
fn both_action_encodings_deserialize() {
    let snapshot = ScreenSnapshot::from_json(
        r#"{"root": {"actions": {"list": [16, 2097152]}, "children": [{"actions": {"bitmask": 20}}]}}"#,
    )
    .unwrap();
    let root = snapshot.root.unwrap();

    match &root.actions {
        NodeActions::List(descriptors) => {
            assert_eq!(descriptors.len(), 2);
            assert_eq!(descriptors[0].id, action_ids::CLICK);
            assert_eq!(descriptors[1].id, action_ids::SET_TEXT);
        }
        other => panic!("expected list encoding, got: {other:?}"),
    }
    assert_eq!(root.children[0].actions, NodeActions::Bitmask(20));
}

#[test]
fn handles_for_missing_children_are_never_acquired() {
    let source = SnapshotSource::new(ScreenSnapshot {
        root: Some(node("Frame")),
        ..Default::default()
    });
    let stats = source.stats();

    let root = source.root_node().unwrap();
    assert!(root.child(0).is_none());
    assert!(root.parent().is_none());

    // Only the root itself was ever acquired.
    assert_eq!(stats.acquired(), 1);
    assert_eq!(stats.outstanding(), 1);
}

#[test]
fn extras_blobs_survive_the_round_trip() {
    let snapshot = ScreenSnapshot {
        root: Some(NodeSnapshot {
            extras: json!({"input.hint": "search"})
                .as_object()
                .unwrap()
                .clone(),
            ..node("SearchBox")
        }),
        ..Default::default()
    };

    let json = snapshot.to_json().unwrap();
    let reparsed = ScreenSnapshot::from_json(&json).unwrap();
    let extras = reparsed.root.unwrap().extras;
    assert_eq!(extras["input.hint"], "search");
}
