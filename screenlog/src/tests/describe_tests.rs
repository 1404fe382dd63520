use serde_json::json;

use super::{node, source_with_root};
use crate::actions::{action_ids, ActionDescriptor, NodeActions};
use crate::describe::{describe_node, describe_window};
use crate::types::{
    CollectionInfo, CollectionItemInfo, NodeState, RangeInfo, RangeValueFormat, Rect,
    SelectionMode, TextSelection,
};
use crate::{
    Capabilities, NodeSnapshot, ScreenSnapshot, ScreenSource, SnapshotSource, WindowSnapshot,
};

fn editable_field() -> NodeSnapshot {
    NodeSnapshot {
        class_name: Some("EditText".to_string()),
        text: Some("hello".to_string()),
        description: Some("Greeting field".to_string()),
        state: NodeState {
            focusable: true,
            focused: true,
            clickable: true,
            editable: true,
            ..Default::default()
        },
        text_selection: Some(TextSelection { start: 2, end: 5 }),
        actions: NodeActions::List(vec![
            ActionDescriptor::new(action_ids::CLICK),
            ActionDescriptor::new(action_ids::SET_TEXT),
        ]),
        bounds: Rect::new(0, 0, 200, 48),
        raw_class_name: Some("widget.EditText".to_string()),
        package_name: Some("demo.notes".to_string()),
        window_id: Some(12),
        resource_name: Some("demo:id/greeting".to_string()),
        ..Default::default()
    }
}

#[test]
fn node_line_renders_fields_in_fixed_order() {
    let source = source_with_root(editable_field());
    let root = source.root_node().unwrap();

    let line = describe_node(&root, &Capabilities::all());
    assert_eq!(
        line,
        "EditText \"hello\" (Greeting field) root ifb ifd clb edt sel(2..5) clk txs \
         [0,0][200,48] obj=widget.EditText pkg=demo.notes win=12 vrn=demo:id/greeting"
    );
}

#[test]
fn describe_node_is_pure() {
    let source = source_with_root(editable_field());
    let root = source.root_node().unwrap();

    let capabilities = Capabilities::all();
    assert_eq!(
        describe_node(&root, &capabilities),
        describe_node(&root, &capabilities)
    );
}

#[test]
fn caret_selection_renders_without_a_range() {
    let snapshot = NodeSnapshot {
        text_selection: Some(TextSelection { start: 4, end: 4 }),
        ..node("EditText")
    };
    let source = source_with_root(snapshot);
    let root = source.root_node().unwrap();

    let line = describe_node(&root, &Capabilities::all());
    assert!(line.contains("sel(4)"), "got: {line}");
    assert!(!line.contains("sel(4..4)"), "got: {line}");
}

#[test]
fn capability_gated_fields_are_omitted_without_their_flag() {
    let snapshot = NodeSnapshot {
        state: NodeState {
            visible: false,
            accessibility_focused: true,
            context_clickable: true,
            editable: true,
            ..Default::default()
        },
        text_selection: Some(TextSelection { start: 1, end: 1 }),
        resource_name: Some("demo:id/pane".to_string()),
        extras: json!({"hint": "dim"}).as_object().unwrap().clone(),
        ..node("Pane")
    };
    let source = source_with_root(snapshot);
    let root = source.root_node().unwrap();

    let gated = describe_node(&root, &Capabilities::all());
    assert_eq!(
        gated,
        "Pane root inv afd ccb edt sel(1) [0,0][0,0] vrn=demo:id/pane extras: {\"hint\":\"dim\"}"
    );

    let bare = describe_node(&root, &Capabilities::none());
    assert_eq!(bare, "Pane root [0,0][0,0]");
}

#[test]
fn parent_probe_marks_the_root_and_releases_the_handle() {
    let mut root = node("Frame");
    root.children.push(node("Button"));
    let source = source_with_root(root);
    let stats = source.stats();

    let root = source.root_node().unwrap();
    let child = root.child(0).unwrap();
    let outstanding = stats.outstanding();
    assert_eq!(outstanding, 2);

    // The root has no parent and gets the marker token.
    assert!(describe_node(&root, &Capabilities::none()).contains(" root "));

    // The child's parent probe acquires a transient handle and releases it
    // before describe returns.
    let line = describe_node(&child, &Capabilities::none());
    assert!(!line.contains("root"), "got: {line}");
    assert_eq!(stats.outstanding(), outstanding);
    assert!(stats.acquired() > outstanding);
}

#[test]
fn numeric_ranges_render_per_declared_format() {
    for (format, expected) in [
        (RangeValueFormat::Integer, "rng(0..100@40)"),
        (RangeValueFormat::Percent, "rng(0%..100%@40%)"),
    ] {
        let snapshot = NodeSnapshot {
            range: Some(RangeInfo {
                min: 0.0,
                max: 100.0,
                current: 40.0,
                format,
            }),
            ..node("SeekBar")
        };
        let source = source_with_root(snapshot);
        let root = source.root_node().unwrap();
        let line = describe_node(&root, &Capabilities::none());
        assert!(line.contains(expected), "got: {line}");
    }

    let snapshot = NodeSnapshot {
        range: Some(RangeInfo {
            min: 0.0,
            max: 1.0,
            current: 0.25,
            format: RangeValueFormat::Float,
        }),
        ..node("SeekBar")
    };
    let source = source_with_root(snapshot);
    let root = source.root_node().unwrap();
    let line = describe_node(&root, &Capabilities::none());
    assert!(line.contains("rng(0..1@0.25)"), "got: {line}");
}

#[test]
fn collection_and_item_summaries_render_compactly() {
    let snapshot = NodeSnapshot {
        collection: Some(CollectionInfo {
            columns: 3,
            rows: 10,
            hierarchical: false,
            selection_mode: SelectionMode::Single,
        }),
        ..node("Grid")
    };
    let source = source_with_root(snapshot);
    let root = source.root_node().unwrap();
    let line = describe_node(&root, &Capabilities::all());
    assert!(line.contains("col(3x10,flat,sgl)"), "got: {line}");

    let snapshot = NodeSnapshot {
        collection: Some(CollectionInfo {
            columns: 1,
            rows: 7,
            hierarchical: true,
            selection_mode: SelectionMode::None,
        }),
        collection_item: Some(CollectionItemInfo {
            column_span: 1,
            row_span: 1,
            column_index: 2,
            row_index: 4,
            heading: true,
            selected: true,
        }),
        ..node("Tree")
    };
    let source = source_with_root(snapshot);
    let root = source.root_node().unwrap();

    let line = describe_node(&root, &Capabilities::all());
    assert!(line.contains("col(1x7,tree)"), "got: {line}");
    assert!(line.contains("itm(1x1+2+4,hdg,sel)"), "got: {line}");

    // The item's selected flag is capability-gated; heading is not.
    let line = describe_node(&root, &Capabilities::none());
    assert!(line.contains("itm(1x1+2+4,hdg)"), "got: {line}");
}

#[test]
fn label_relations_resolve_to_the_target_text() {
    let mut root = node("Form");
    root.children.push(NodeSnapshot {
        text: Some("User name".to_string()),
        label_for: Some(vec![1]),
        ..node("Label")
    });
    root.children.push(NodeSnapshot {
        description: Some("user name input".to_string()),
        labeled_by: Some(vec![0]),
        ..node("EditText")
    });
    let source = source_with_root(root);
    let stats = source.stats();

    let root = source.root_node().unwrap();
    let label = root.child(0).unwrap();
    let field = root.child(1).unwrap();
    let outstanding = stats.outstanding();

    let line = describe_node(&label, &Capabilities::all());
    assert!(line.contains("lbf=user name input"), "got: {line}");

    let line = describe_node(&field, &Capabilities::all());
    assert!(line.contains("lbd=User name"), "got: {line}");

    // Without the capability the relation is not even probed.
    let line = describe_node(&label, &Capabilities::none());
    assert!(!line.contains("lbf="), "got: {line}");

    assert_eq!(stats.outstanding(), outstanding);
}

#[test]
fn window_line_renders_fields_in_fixed_order() {
    let snapshot = ScreenSnapshot {
        capabilities: Capabilities::all(),
        windows: vec![WindowSnapshot {
            id: 7,
            title: Some("Settings".to_string()),
            window_type: 3,
            layer: 2,
            state: crate::types::WindowState {
                active: true,
                focused: true,
                ..Default::default()
            },
            bounds: Rect::new(0, 0, 800, 600),
            children: vec![WindowSnapshot {
                id: 8,
                window_type: 9,
                layer: 3,
                bounds: Rect::new(10, 10, 400, 300),
                ..Default::default()
            }],
            ..Default::default()
        }],
        ..Default::default()
    };
    let source = SnapshotSource::new(snapshot);
    let window = source.windows().into_iter().next().unwrap();

    let line = describe_window(&window, &Capabilities::all());
    assert_eq!(line, "id=7 \"Settings\" root cld=1 type=sys layer=2 act ifd [0,0][800,600]");

    // An unrecognized type id renders as its literal numeric value, and a
    // child window is not a root.
    let child = window.child(0).unwrap();
    let line = describe_window(&child, &Capabilities::all());
    assert_eq!(line, "id=8 type=9 layer=3 [10,10][400,300]");
}

#[test]
fn window_title_and_pip_are_capability_gated() {
    let snapshot = ScreenSnapshot {
        windows: vec![WindowSnapshot {
            id: 4,
            title: Some("Player".to_string()),
            window_type: 1,
            layer: 1,
            state: crate::types::WindowState {
                picture_in_picture: true,
                ..Default::default()
            },
            ..Default::default()
        }],
        ..Default::default()
    };
    let source = SnapshotSource::new(snapshot);
    let window = source.windows().into_iter().next().unwrap();

    let line = describe_window(&window, &Capabilities::all());
    assert_eq!(line, "id=4 \"Player\" root type=app layer=1 pip [0,0][0,0]");

    let line = describe_window(&window, &Capabilities::none());
    assert_eq!(line, "id=4 root type=app layer=1 [0,0][0,0]");
}
