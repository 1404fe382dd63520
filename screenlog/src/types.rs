//! Common data types carried by node and window handles.

use std::fmt;

use serde::{Deserialize, Serialize};

fn is_true(value: &bool) -> bool {
    *value
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Screen-space rectangle.
///
/// Rendered in the compact `[l,t][r,b]` notation via `Display`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{}][{},{}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Boolean state flags of a node, mirrored verbatim from the foreign UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeState {
    #[serde(skip_serializing_if = "is_true")]
    pub visible: bool,
    #[serde(skip_serializing_if = "is_true")]
    pub enabled: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub selected: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub scrollable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub focusable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub focused: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub accessibility_focused: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub clickable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub long_clickable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub context_clickable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub checkable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub checked: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub password: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub editable: bool,
}

impl Default for NodeState {
    fn default() -> Self {
        Self {
            visible: true,
            enabled: true,
            selected: false,
            scrollable: false,
            focusable: false,
            focused: false,
            accessibility_focused: false,
            clickable: false,
            long_clickable: false,
            context_clickable: false,
            checkable: false,
            checked: false,
            password: false,
            editable: false,
        }
    }
}

/// Boolean state flags of a window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    #[serde(skip_serializing_if = "is_false")]
    pub active: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub focused: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub accessibility_focused: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub picture_in_picture: bool,
}

/// Selection range within editable text. `start == end` is a bare caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: i32,
    pub end: i32,
}

/// How the values of a numeric range are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeValueFormat {
    Integer,
    Float,
    Percent,
}

impl RangeValueFormat {
    pub fn render(&self, value: f32) -> String {
        match self {
            RangeValueFormat::Integer => format!("{value:.0}"),
            RangeValueFormat::Float => format!("{value}"),
            RangeValueFormat::Percent => format!("{value:.0}%"),
        }
    }
}

/// Numeric range of an adjustable node (slider, progress bar, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeInfo {
    pub min: f32,
    pub max: f32,
    pub current: f32,
    pub format: RangeValueFormat,
}

/// Selection behavior of a collection container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    #[default]
    None,
    Single,
    Multiple,
}

impl SelectionMode {
    /// Diagnostic label; `None` has none and is omitted from output.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            SelectionMode::None => None,
            SelectionMode::Single => Some("sgl"),
            SelectionMode::Multiple => Some("mlt"),
        }
    }
}

/// Shape summary of a collection container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub columns: i32,
    pub rows: i32,
    #[serde(default)]
    pub hierarchical: bool,
    #[serde(default)]
    pub selection_mode: SelectionMode,
}

/// Position summary of an item within a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionItemInfo {
    pub column_span: i32,
    pub row_span: i32,
    pub column_index: i32,
    pub row_index: i32,
    #[serde(skip_serializing_if = "is_false")]
    pub heading: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub selected: bool,
}

/// Window type id → mnemonic constants.
pub mod window_types {
    pub const APPLICATION: i32 = 1;
    pub const INPUT_METHOD: i32 = 2;
    pub const SYSTEM: i32 = 3;
    pub const ACCESSIBILITY_OVERLAY: i32 = 4;
    pub const SPLIT_SCREEN_DIVIDER: i32 = 5;
}
