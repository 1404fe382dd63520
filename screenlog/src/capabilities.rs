//! Capability flags for optional field groups.

use serde::{Deserialize, Serialize};

fn is_false(value: &bool) -> bool {
    !*value
}

/// Read-only flags describing which optional data fields the mirrored
/// runtime exposes.
///
/// Each conditional field in a diagnostic line is a branch on one of these
/// named booleans, never on a host-version probe. The set is queried once
/// per [`ScreenLogger`](crate::ScreenLogger) and stays fixed for the
/// duration of every traversal that logger runs.
///
/// The choice between the two action encodings is deliberately not a flag
/// here: it travels with the node data as the
/// [`NodeActions`](crate::NodeActions) tagged variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Capabilities {
    /// Visibility of nodes to the user is reported (`inv` tag).
    #[serde(skip_serializing_if = "is_false")]
    pub visibility: bool,
    /// Accessibility focus is reported on nodes (`afd` tag).
    #[serde(skip_serializing_if = "is_false")]
    pub accessibility_focus: bool,
    /// Context click is available (`ccb` tag, `cck` action).
    #[serde(skip_serializing_if = "is_false")]
    pub context_click: bool,
    /// Editable state and text-selection ranges are reported.
    #[serde(skip_serializing_if = "is_false")]
    pub text_editing: bool,
    /// Label-for / labeled-by relations can be resolved.
    #[serde(skip_serializing_if = "is_false")]
    pub label_relations: bool,
    /// Resource identifiers are reported (`vrn` field).
    #[serde(skip_serializing_if = "is_false")]
    pub resource_id: bool,
    /// The extras blob is reported.
    #[serde(skip_serializing_if = "is_false")]
    pub extras: bool,
    /// Collection items report their selected flag.
    #[serde(skip_serializing_if = "is_false")]
    pub item_selection: bool,
    /// Top-level windows can be enumerated; without this the screen is a
    /// single root node.
    #[serde(skip_serializing_if = "is_false")]
    pub multi_window: bool,
    /// Windows report a title.
    #[serde(skip_serializing_if = "is_false")]
    pub window_title: bool,
    /// Windows report picture-in-picture mode (`pip` tag).
    #[serde(skip_serializing_if = "is_false")]
    pub picture_in_picture: bool,
}

impl Capabilities {
    /// Every optional field group available.
    pub fn all() -> Self {
        Self {
            visibility: true,
            accessibility_focus: true,
            context_click: true,
            text_editing: true,
            label_relations: true,
            resource_id: true,
            extras: true,
            item_selection: true,
            multi_window: true,
            window_title: true,
            picture_in_picture: true,
        }
    }

    /// No optional field group available; same as `Default`.
    pub fn none() -> Self {
        Self::default()
    }
}
