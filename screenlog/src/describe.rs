//! Single-entity renderers: one diagnostic line per node or window.
//!
//! Both renderers are pure functions of the entity snapshot and the
//! capability set at call time; identical input yields byte-identical
//! output. Absent fields are omitted outright, never rendered as blank
//! placeholders.

use std::fmt;

use serde_json::Value;

use crate::actions::action_mnemonics;
use crate::capabilities::Capabilities;
use crate::element::{AccessibleNode, AccessibleWindow};
use crate::text::shrink_text;
use crate::types::window_types;

static WINDOW_TYPE_NAMES: &[(i32, &str)] = &[
    (window_types::ACCESSIBILITY_OVERLAY, "acc"),
    (window_types::APPLICATION, "app"),
    (window_types::INPUT_METHOD, "ime"),
    (window_types::SPLIT_SCREEN_DIVIDER, "ssd"),
    (window_types::SYSTEM, "sys"),
];

fn window_type_name(id: i32) -> Option<&'static str> {
    WINDOW_TYPE_NAMES
        .iter()
        .find(|&&(type_id, _)| type_id == id)
        .map(|&(_, name)| name)
}

/// Space-separated token accumulator for one diagnostic line.
#[derive(Default)]
struct Line(String);

impl Line {
    fn push(&mut self, token: &str) {
        if !self.0.is_empty() {
            self.0.push(' ');
        }
        self.0.push_str(token);
    }

    fn push_if(&mut self, condition: bool, token: &str) {
        if condition {
            self.push(token);
        }
    }

    fn push_field(&mut self, label: &str, value: impl fmt::Display) {
        self.push(&format!("{label}={value}"));
    }

    // Continuation of the current token; no separator.
    fn append(&mut self, value: impl fmt::Display) {
        self.0.push_str(&value.to_string());
    }

    fn finish(self) -> String {
        self.0
    }
}

/// Render one accessibility node into one diagnostic line.
pub fn describe_node(node: &AccessibleNode, capabilities: &Capabilities) -> String {
    let mut line = Line::default();

    if let Some(class_name) = node.class_name() {
        line.push(&class_name);
    }

    if let Some(text) = node.text() {
        line.push(&format!("\"{}\"", shrink_text(&text)));
    }

    if let Some(description) = node.description() {
        line.push(&format!("({})", shrink_text(&description)));
    }

    // Parent probe only; the handle is dropped unused, releasing it before
    // anything else is rendered.
    if node.parent().is_none() {
        line.push("root");
    }

    let child_count = node.child_count();
    if child_count > 0 {
        line.push_field("cld", child_count);
    }

    let state = node.state();
    if capabilities.visibility {
        line.push_if(!state.visible, "inv");
    }
    line.push_if(!state.enabled, "dsb");
    line.push_if(state.selected, "sld");
    line.push_if(state.scrollable, "scr");
    line.push_if(state.focusable, "ifb");
    line.push_if(state.focused, "ifd");
    if capabilities.accessibility_focus {
        line.push_if(state.accessibility_focused, "afd");
    }
    line.push_if(state.clickable, "clb");
    line.push_if(state.long_clickable, "lcb");
    if capabilities.context_click {
        line.push_if(state.context_clickable, "ccb");
    }
    line.push_if(state.checkable, "ckb");
    line.push_if(state.checked, "ckd");
    line.push_if(state.password, "pwd");

    if capabilities.text_editing {
        line.push_if(state.editable, "edt");

        if let Some(selection) = node.text_selection() {
            line.push("sel");
            line.append(format_args!("({}", selection.start));
            if selection.end != selection.start {
                line.append(format_args!("..{}", selection.end));
            }
            line.append(')');
        }
    }

    if let Some(range) = node.range() {
        let format = range.format;
        line.push("rng");
        line.append(format_args!(
            "({}..{}@{})",
            format.render(range.min),
            format.render(range.max),
            format.render(range.current)
        ));
    }

    if let Some(collection) = node.collection() {
        line.push("col");
        line.append(format_args!(
            "({}x{},{}",
            collection.columns,
            collection.rows,
            if collection.hierarchical { "tree" } else { "flat" }
        ));
        if let Some(mode) = collection.selection_mode.label() {
            line.append(format_args!(",{mode}"));
        }
        line.append(')');
    }

    if let Some(item) = node.collection_item() {
        line.push("itm");
        line.append(format_args!(
            "({}x{}+{}+{}",
            item.column_span, item.row_span, item.column_index, item.row_index
        ));
        if item.heading {
            line.append(",hdg");
        }
        if capabilities.item_selection && item.selected {
            line.append(",sel");
        }
        line.append(')');
    }

    for mnemonic in action_mnemonics(&node.actions(), capabilities) {
        line.push(mnemonic);
    }

    if capabilities.label_relations {
        if let Some(target) = node.label_for() {
            if let Some(text) = target.text_or_description() {
                line.push_field("lbf", text);
            }
        } // target handle released here

        if let Some(target) = node.labeled_by() {
            if let Some(text) = target.text_or_description() {
                line.push_field("lbd", text);
            }
        }
    }

    line.push(&node.bounds_in_screen().to_string());

    if let Some(raw_class_name) = node.raw_class_name() {
        line.push_field("obj", raw_class_name);
    }

    if let Some(package_name) = node.package_name() {
        line.push_field("pkg", package_name);
    }

    if let Some(window_id) = node.window_id() {
        line.push_field("win", window_id);
    }

    if capabilities.resource_id {
        if let Some(resource_name) = node.resource_name() {
            line.push_field("vrn", resource_name);
        }
    }

    if capabilities.extras {
        let extras = node.extras();
        if !extras.is_empty() {
            line.push("extras:");
            line.push(&Value::Object(extras).to_string());
        }
    }

    line.finish()
}

/// Render one accessibility window into one diagnostic line.
pub fn describe_window(window: &AccessibleWindow, capabilities: &Capabilities) -> String {
    let mut line = Line::default();

    line.push_field("id", window.id());

    if capabilities.window_title {
        if let Some(title) = window.title() {
            if !title.is_empty() {
                line.push(&format!("\"{title}\""));
            }
        }
    }

    // Parent probe only, as for nodes.
    if window.parent().is_none() {
        line.push("root");
    }

    let child_count = window.child_count();
    if child_count > 0 {
        line.push_field("cld", child_count);
    }

    let type_id = window.window_type();
    match window_type_name(type_id) {
        Some(name) => line.push_field("type", name),
        None => line.push_field("type", type_id),
    }

    line.push_field("layer", window.layer());

    let state = window.state();
    line.push_if(state.active, "act");
    line.push_if(state.focused, "ifd");
    line.push_if(state.accessibility_focused, "afd");
    if capabilities.picture_in_picture {
        line.push_if(state.picture_in_picture, "pip");
    }

    line.push(&window.bounds_in_screen().to_string());

    line.finish()
}
