//! Owned screen snapshots, for tests and offline replay of captured trees.
//!
//! A [`ScreenSnapshot`] is a plain serializable value. [`SnapshotSource`]
//! serves it through the same handle interface a live introspection service
//! would, handing out address-based providers that resolve lazily from the
//! root and accounting for every acquisition and release in shared
//! [`HandleStats`].

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::actions::NodeActions;
use crate::capabilities::Capabilities;
use crate::element::{
    AccessibleNode, AccessibleNodeImpl, AccessibleWindow, AccessibleWindowImpl,
};
use crate::errors::ScreenLogError;
use crate::source::ScreenSource;
use crate::types::{
    CollectionInfo, CollectionItemInfo, NodeState, RangeInfo, Rect, TextSelection, WindowState,
};

/// Captured attributes of one node, with its subtree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub state: NodeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_selection: Option<TextSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection: Option<CollectionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_item: Option<CollectionItemInfo>,
    pub actions: NodeActions,
    /// Child-index path from the tree root to the node this node labels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_for: Option<Vec<usize>>,
    /// Child-index path from the tree root to the node labeling this node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labeled_by: Option<Vec<usize>>,
    pub bounds: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub extras: Map<String, Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    fn descendant(&self, path: &[usize]) -> Option<&NodeSnapshot> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }
}

/// Captured attributes of one window, with its child windows and node tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSnapshot {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub window_type: i32,
    pub layer: i32,
    pub state: WindowState,
    pub bounds: Rect,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<NodeSnapshot>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<WindowSnapshot>,
}

impl WindowSnapshot {
    fn descendant(&self, path: &[usize]) -> Option<&WindowSnapshot> {
        path.iter()
            .try_fold(self, |window, &index| window.children.get(index))
    }
}

/// A captured screen: capability set plus either top-level windows or a
/// single root node tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenSnapshot {
    pub capabilities: Capabilities,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<WindowSnapshot>,
    /// Screen root for runtimes without window enumeration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<NodeSnapshot>,
}

impl ScreenSnapshot {
    pub fn from_json(json: &str) -> Result<Self, ScreenLogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ScreenLogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScreenLogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/// Acquire/release accounting for every handle a [`SnapshotSource`] gives
/// out.
#[derive(Debug, Default)]
pub struct HandleStats {
    acquired: AtomicUsize,
    released: AtomicUsize,
}

impl HandleStats {
    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::Relaxed)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::Relaxed)
    }

    /// Handles currently alive. A finished traversal must bring this back
    /// to zero.
    pub fn outstanding(&self) -> usize {
        self.acquired().saturating_sub(self.released())
    }

    fn on_acquire(&self) {
        self.acquired.fetch_add(1, Ordering::Relaxed);
    }

    fn on_release(&self) {
        self.released.fetch_add(1, Ordering::Relaxed);
    }
}

/// [`ScreenSource`] over an owned snapshot.
pub struct SnapshotSource {
    screen: Arc<ScreenSnapshot>,
    stats: Arc<HandleStats>,
}

impl SnapshotSource {
    pub fn new(screen: ScreenSnapshot) -> Self {
        Self {
            screen: Arc::new(screen),
            stats: Arc::new(HandleStats::default()),
        }
    }

    pub fn stats(&self) -> Arc<HandleStats> {
        self.stats.clone()
    }
}

impl ScreenSource for SnapshotSource {
    fn capabilities(&self) -> Capabilities {
        self.screen.capabilities
    }

    fn windows(&self) -> Vec<AccessibleWindow> {
        (0..self.screen.windows.len())
            .filter_map(|index| {
                SnapshotWindow::acquire(self.screen.clone(), vec![index], self.stats.clone())
            })
            .collect()
    }

    fn root_node(&self) -> Option<AccessibleNode> {
        SnapshotNode::acquire(
            self.screen.clone(),
            NodeAddress {
                window: None,
                node: Vec::new(),
            },
            self.stats.clone(),
        )
    }
}

/// Where a node lives within a snapshot: which tree root it hangs off,
/// and the child-index path below that root.
#[derive(Debug, Clone)]
struct NodeAddress {
    /// Path to the owning window; `None` means the single screen root.
    window: Option<Vec<usize>>,
    node: Vec<usize>,
}

fn resolve_window<'a>(screen: &'a ScreenSnapshot, path: &[usize]) -> Option<&'a WindowSnapshot> {
    let (first, rest) = path.split_first()?;
    screen.windows.get(*first)?.descendant(rest)
}

fn resolve_node<'a>(screen: &'a ScreenSnapshot, address: &NodeAddress) -> Option<&'a NodeSnapshot> {
    let root = match &address.window {
        Some(path) => resolve_window(screen, path)?.root.as_ref()?,
        None => screen.root.as_ref()?,
    };
    root.descendant(&address.node)
}

#[derive(Debug)]
struct SnapshotNode {
    screen: Arc<ScreenSnapshot>,
    address: NodeAddress,
    stats: Arc<HandleStats>,
}

impl SnapshotNode {
    // Hands out a counted handle, or nothing if the address does not
    // resolve; an unresolvable handle must not be acquired at all.
    fn acquire(
        screen: Arc<ScreenSnapshot>,
        address: NodeAddress,
        stats: Arc<HandleStats>,
    ) -> Option<AccessibleNode> {
        resolve_node(&screen, &address)?;
        stats.on_acquire();
        Some(AccessibleNode::new(Box::new(Self {
            screen,
            address,
            stats,
        })))
    }

    fn data(&self) -> Option<&NodeSnapshot> {
        resolve_node(&self.screen, &self.address)
    }

    fn relative(&self, node: Vec<usize>) -> NodeAddress {
        NodeAddress {
            window: self.address.window.clone(),
            node,
        }
    }
}

impl Drop for SnapshotNode {
    fn drop(&mut self) {
        self.stats.on_release();
    }
}

impl AccessibleNodeImpl for SnapshotNode {
    fn class_name(&self) -> Option<String> {
        self.data().and_then(|data| data.class_name.clone())
    }

    fn text(&self) -> Option<String> {
        self.data().and_then(|data| data.text.clone())
    }

    fn description(&self) -> Option<String> {
        self.data().and_then(|data| data.description.clone())
    }

    fn parent(&self) -> Option<AccessibleNode> {
        let mut node = self.address.node.clone();
        node.pop()?;
        SnapshotNode::acquire(self.screen.clone(), self.relative(node), self.stats.clone())
    }

    fn child_count(&self) -> usize {
        self.data().map(|data| data.children.len()).unwrap_or(0)
    }

    fn child(&self, index: usize) -> Option<AccessibleNode> {
        let mut node = self.address.node.clone();
        node.push(index);
        SnapshotNode::acquire(self.screen.clone(), self.relative(node), self.stats.clone())
    }

    fn state(&self) -> NodeState {
        self.data().map(|data| data.state).unwrap_or_default()
    }

    fn text_selection(&self) -> Option<TextSelection> {
        self.data().and_then(|data| data.text_selection)
    }

    fn range(&self) -> Option<RangeInfo> {
        self.data().and_then(|data| data.range)
    }

    fn collection(&self) -> Option<CollectionInfo> {
        self.data().and_then(|data| data.collection)
    }

    fn collection_item(&self) -> Option<CollectionItemInfo> {
        self.data().and_then(|data| data.collection_item)
    }

    fn actions(&self) -> NodeActions {
        self.data()
            .map(|data| data.actions.clone())
            .unwrap_or_default()
    }

    fn label_for(&self) -> Option<AccessibleNode> {
        let path = self.data()?.label_for.clone()?;
        SnapshotNode::acquire(self.screen.clone(), self.relative(path), self.stats.clone())
    }

    fn labeled_by(&self) -> Option<AccessibleNode> {
        let path = self.data()?.labeled_by.clone()?;
        SnapshotNode::acquire(self.screen.clone(), self.relative(path), self.stats.clone())
    }

    fn bounds_in_screen(&self) -> Rect {
        self.data().map(|data| data.bounds).unwrap_or_default()
    }

    fn raw_class_name(&self) -> Option<String> {
        self.data().and_then(|data| data.raw_class_name.clone())
    }

    fn package_name(&self) -> Option<String> {
        self.data().and_then(|data| data.package_name.clone())
    }

    fn window_id(&self) -> Option<i32> {
        self.data().and_then(|data| data.window_id)
    }

    fn resource_name(&self) -> Option<String> {
        self.data().and_then(|data| data.resource_name.clone())
    }

    fn extras(&self) -> Map<String, Value> {
        self.data()
            .map(|data| data.extras.clone())
            .unwrap_or_default()
    }
}

#[derive(Debug)]
struct SnapshotWindow {
    screen: Arc<ScreenSnapshot>,
    path: Vec<usize>,
    stats: Arc<HandleStats>,
}

impl SnapshotWindow {
    fn acquire(
        screen: Arc<ScreenSnapshot>,
        path: Vec<usize>,
        stats: Arc<HandleStats>,
    ) -> Option<AccessibleWindow> {
        resolve_window(&screen, &path)?;
        stats.on_acquire();
        Some(AccessibleWindow::new(Box::new(Self {
            screen,
            path,
            stats,
        })))
    }

    fn data(&self) -> Option<&WindowSnapshot> {
        resolve_window(&self.screen, &self.path)
    }
}

impl Drop for SnapshotWindow {
    fn drop(&mut self) {
        self.stats.on_release();
    }
}

impl AccessibleWindowImpl for SnapshotWindow {
    fn id(&self) -> i32 {
        self.data().map(|data| data.id).unwrap_or(0)
    }

    fn title(&self) -> Option<String> {
        self.data().and_then(|data| data.title.clone())
    }

    fn parent(&self) -> Option<AccessibleWindow> {
        if self.path.len() < 2 {
            return None;
        }
        let mut path = self.path.clone();
        path.pop();
        SnapshotWindow::acquire(self.screen.clone(), path, self.stats.clone())
    }

    fn child_count(&self) -> usize {
        self.data().map(|data| data.children.len()).unwrap_or(0)
    }

    fn child(&self, index: usize) -> Option<AccessibleWindow> {
        let mut path = self.path.clone();
        path.push(index);
        SnapshotWindow::acquire(self.screen.clone(), path, self.stats.clone())
    }

    fn window_type(&self) -> i32 {
        self.data().map(|data| data.window_type).unwrap_or(0)
    }

    fn layer(&self) -> i32 {
        self.data().map(|data| data.layer).unwrap_or(0)
    }

    fn state(&self) -> WindowState {
        self.data().map(|data| data.state).unwrap_or_default()
    }

    fn bounds_in_screen(&self) -> Rect {
        self.data().map(|data| data.bounds).unwrap_or_default()
    }

    fn root(&self) -> Option<AccessibleNode> {
        SnapshotNode::acquire(
            self.screen.clone(),
            NodeAddress {
                window: Some(self.path.clone()),
                node: Vec::new(),
            },
            self.stats.clone(),
        )
    }
}
