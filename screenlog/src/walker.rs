//! Depth-first traversal emitting one diagnostic line per visited entity.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::capabilities::Capabilities;
use crate::describe::{describe_node, describe_window};
use crate::element::{AccessibleNode, AccessibleWindow};
use crate::source::ScreenSource;

/// Line-oriented destination for diagnostic output.
pub trait DiagnosticSink {
    fn line(&mut self, line: &str);
}

/// Emits every line through `tracing` at debug level.
#[derive(Debug, Default)]
pub struct TraceSink;

impl DiagnosticSink for TraceSink {
    fn line(&mut self, line: &str) {
        debug!(target: "screenlog", "{line}");
    }
}

/// Collects lines in memory, mainly for tests and offline rendering.
impl DiagnosticSink for Vec<String> {
    fn line(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// The walking engine: renders a momentary snapshot of the mirrored screen
/// as hierarchical diagnostic lines.
///
/// Single-threaded and synchronous, invoked on demand. If the underlying UI
/// mutates mid-traversal the output is best-effort; no locks are taken.
pub struct ScreenLogger {
    source: Arc<dyn ScreenSource>,
    capabilities: Capabilities,
}

impl ScreenLogger {
    /// Capability flags are read once here and stay fixed for every
    /// traversal this logger runs.
    pub fn new(source: Arc<dyn ScreenSource>) -> Self {
        let capabilities = source.capabilities();
        Self {
            source,
            capabilities,
        }
    }

    /// Same as [`ScreenLogger::new`] but with an explicit capability set,
    /// overriding whatever the source reports.
    pub fn with_capabilities(source: Arc<dyn ScreenSource>, capabilities: Capabilities) -> Self {
        Self {
            source,
            capabilities,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Log `root` and every descendant, one line each, between
    /// `begin node tree` / `end node tree` delimiters.
    ///
    /// Paths are dot-joined child indices rooted at `root`.
    #[instrument(level = "debug", skip_all)]
    pub fn log_node_tree(&self, root: &AccessibleNode, sink: &mut dyn DiagnosticSink) {
        sink.line("begin node tree");
        self.walk_node(root, "root", sink);
        sink.line("end node tree");
    }

    /// Log the whole screen between `begin screen log` / `end screen log`
    /// delimiters.
    ///
    /// With window enumeration available, every top-level window chain is
    /// rendered as `window.<index>` and each window's node tree is fetched,
    /// rendered and released in turn. Without it, the single screen root
    /// node tree is rendered instead.
    #[instrument(level = "debug", skip_all)]
    pub fn log_screen(&self, sink: &mut dyn DiagnosticSink) {
        sink.line("begin screen log");

        if self.capabilities.multi_window {
            for (index, window) in self.source.windows().into_iter().enumerate() {
                self.walk_window(&window, &format!("window.{index}"), sink);
            }
        } else if let Some(root) = self.source.root_node() {
            self.log_node_tree(&root, sink);
        }

        sink.line("end screen log");
    }

    fn walk_node(&self, node: &AccessibleNode, path: &str, sink: &mut dyn DiagnosticSink) {
        sink.line(&format!(
            "{path}: {}",
            describe_node(node, &self.capabilities)
        ));

        let child_count = node.child_count();
        for index in 0..child_count {
            if let Some(child) = node.child(index) {
                self.walk_node(&child, &format!("{path}.{index}"), sink);
            } // child handle released here, before the next sibling is fetched
        }
    }

    fn walk_window(&self, window: &AccessibleWindow, path: &str, sink: &mut dyn DiagnosticSink) {
        sink.line(&format!(
            "{path}: {}",
            describe_window(window, &self.capabilities)
        ));

        if let Some(root) = window.root() {
            self.log_node_tree(&root, sink);
        } // root node handle released before descending into child windows

        let child_count = window.child_count();
        for index in 0..child_count {
            if let Some(child) = window.child(index) {
                self.walk_window(&child, &format!("{path}.{index}"), sink);
            }
        }
    }
}
