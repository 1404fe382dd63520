//! Handle wrappers over the foreign introspection service.
//!
//! Nodes and windows are reference-counted resources owned by the foreign
//! service. A wrapper owns exactly one such reference; the provider behind
//! it releases the reference when the wrapper is dropped. Callers keep every
//! transient handle (child, parent probe, label target, window root) scoped
//! to the call that acquired it, so release-exactly-once falls out of
//! ownership.

use std::fmt::Debug;

use serde_json::{Map, Value};

use crate::actions::NodeActions;
use crate::types::{
    CollectionInfo, CollectionItemInfo, NodeState, RangeInfo, Rect, TextSelection, WindowState,
};

/// One node of the mirrored accessibility tree.
#[derive(Debug)]
pub struct AccessibleNode {
    inner: Box<dyn AccessibleNodeImpl>,
}

impl AccessibleNode {
    pub fn new(inner: Box<dyn AccessibleNodeImpl>) -> Self {
        Self { inner }
    }

    pub fn class_name(&self) -> Option<String> {
        self.inner.class_name()
    }

    pub fn text(&self) -> Option<String> {
        self.inner.text()
    }

    pub fn description(&self) -> Option<String> {
        self.inner.description()
    }

    /// The text a node is best known by: its own text, else its description.
    pub fn text_or_description(&self) -> Option<String> {
        self.text().or_else(|| self.description())
    }

    /// Acquire the parent node, if any. The returned handle owns a fresh
    /// foreign reference and must be dropped before traversal continues.
    pub fn parent(&self) -> Option<AccessibleNode> {
        self.inner.parent()
    }

    pub fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    /// Acquire the child at `index`. A missing child is an omission, not a
    /// failure.
    pub fn child(&self, index: usize) -> Option<AccessibleNode> {
        self.inner.child(index)
    }

    pub fn state(&self) -> NodeState {
        self.inner.state()
    }

    pub fn text_selection(&self) -> Option<TextSelection> {
        self.inner.text_selection()
    }

    pub fn range(&self) -> Option<RangeInfo> {
        self.inner.range()
    }

    pub fn collection(&self) -> Option<CollectionInfo> {
        self.inner.collection()
    }

    pub fn collection_item(&self) -> Option<CollectionItemInfo> {
        self.inner.collection_item()
    }

    pub fn actions(&self) -> NodeActions {
        self.inner.actions()
    }

    /// Acquire the node this node labels, if any.
    pub fn label_for(&self) -> Option<AccessibleNode> {
        self.inner.label_for()
    }

    /// Acquire the node this node is labeled by, if any.
    pub fn labeled_by(&self) -> Option<AccessibleNode> {
        self.inner.labeled_by()
    }

    pub fn bounds_in_screen(&self) -> Rect {
        self.inner.bounds_in_screen()
    }

    pub fn raw_class_name(&self) -> Option<String> {
        self.inner.raw_class_name()
    }

    pub fn package_name(&self) -> Option<String> {
        self.inner.package_name()
    }

    pub fn window_id(&self) -> Option<i32> {
        self.inner.window_id()
    }

    pub fn resource_name(&self) -> Option<String> {
        self.inner.resource_name()
    }

    /// Extras blob; an empty map means absent.
    pub fn extras(&self) -> Map<String, Value> {
        self.inner.extras()
    }
}

/// Interface for service-specific node implementations.
///
/// Every accessor is a read of the momentary snapshot; optional data is
/// `None`, never an error. Implementations release their foreign reference
/// on drop.
pub trait AccessibleNodeImpl: Debug + Send + Sync {
    fn class_name(&self) -> Option<String>;
    fn text(&self) -> Option<String>;
    fn description(&self) -> Option<String>;
    fn parent(&self) -> Option<AccessibleNode>;
    fn child_count(&self) -> usize;
    fn child(&self, index: usize) -> Option<AccessibleNode>;
    fn state(&self) -> NodeState;
    fn text_selection(&self) -> Option<TextSelection>;
    fn range(&self) -> Option<RangeInfo>;
    fn collection(&self) -> Option<CollectionInfo>;
    fn collection_item(&self) -> Option<CollectionItemInfo>;
    fn actions(&self) -> NodeActions;
    fn label_for(&self) -> Option<AccessibleNode>;
    fn labeled_by(&self) -> Option<AccessibleNode>;
    fn bounds_in_screen(&self) -> Rect;
    fn raw_class_name(&self) -> Option<String>;
    fn package_name(&self) -> Option<String>;
    fn window_id(&self) -> Option<i32>;
    fn resource_name(&self) -> Option<String>;
    fn extras(&self) -> Map<String, Value>;
}

/// One top-level surface grouping a subtree of nodes.
#[derive(Debug)]
pub struct AccessibleWindow {
    inner: Box<dyn AccessibleWindowImpl>,
}

impl AccessibleWindow {
    pub fn new(inner: Box<dyn AccessibleWindowImpl>) -> Self {
        Self { inner }
    }

    pub fn id(&self) -> i32 {
        self.inner.id()
    }

    pub fn title(&self) -> Option<String> {
        self.inner.title()
    }

    /// Acquire the parent window, if any.
    pub fn parent(&self) -> Option<AccessibleWindow> {
        self.inner.parent()
    }

    pub fn child_count(&self) -> usize {
        self.inner.child_count()
    }

    pub fn child(&self, index: usize) -> Option<AccessibleWindow> {
        self.inner.child(index)
    }

    pub fn window_type(&self) -> i32 {
        self.inner.window_type()
    }

    pub fn layer(&self) -> i32 {
        self.inner.layer()
    }

    pub fn state(&self) -> WindowState {
        self.inner.state()
    }

    pub fn bounds_in_screen(&self) -> Rect {
        self.inner.bounds_in_screen()
    }

    /// Acquire the root node of this window's subtree, if any.
    pub fn root(&self) -> Option<AccessibleNode> {
        self.inner.root()
    }
}

/// Interface for service-specific window implementations.
pub trait AccessibleWindowImpl: Debug + Send + Sync {
    fn id(&self) -> i32;
    fn title(&self) -> Option<String>;
    fn parent(&self) -> Option<AccessibleWindow>;
    fn child_count(&self) -> usize;
    fn child(&self, index: usize) -> Option<AccessibleWindow>;
    fn window_type(&self) -> i32;
    fn layer(&self) -> i32;
    fn state(&self) -> WindowState;
    fn bounds_in_screen(&self) -> Rect;
    fn root(&self) -> Option<AccessibleNode>;
}
