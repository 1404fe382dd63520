//! Diagnostic rendering of a foreign UI's accessibility tree
//!
//! This crate renders a momentary snapshot of the semantic tree an
//! assistive-technology client mirrors — its nodes and windows — into
//! compact, deterministic, human-readable lines, for debugging what the
//! client actually sees. It is strictly read-only: nothing in the mirrored
//! UI is touched, nothing is retained past one log invocation, and the
//! output is description, not analysis.
//!
//! The engine walks handles obtained from an introspection service
//! ([`ScreenSource`]), renders one line per visited node or window, and
//! releases every transient handle before moving on. A serde-backed
//! [`ScreenSnapshot`] with its [`SnapshotSource`] serves captured screens
//! through the same interface, which is what the tests and the CLI replay
//! tool use.
//!
//! ```
//! use std::sync::Arc;
//! use screenlog::{ScreenLogger, ScreenSnapshot, SnapshotSource};
//!
//! let snapshot = ScreenSnapshot::from_json(r#"{"root": {"class_name": "Frame"}}"#)?;
//! let logger = ScreenLogger::new(Arc::new(SnapshotSource::new(snapshot)));
//!
//! let mut lines: Vec<String> = Vec::new();
//! logger.log_screen(&mut lines);
//! assert_eq!(lines.first().map(String::as_str), Some("begin screen log"));
//! # Ok::<(), screenlog::ScreenLogError>(())
//! ```

pub mod actions;
pub mod capabilities;
pub mod describe;
pub mod element;
pub mod errors;
pub mod snapshot;
pub mod source;
pub mod text;
#[cfg(test)]
mod tests;
pub mod types;
pub mod walker;

pub use actions::{action_mnemonics, ActionDescriptor, NodeActions};
pub use capabilities::Capabilities;
pub use describe::{describe_node, describe_window};
pub use element::{AccessibleNode, AccessibleNodeImpl, AccessibleWindow, AccessibleWindowImpl};
pub use errors::ScreenLogError;
pub use snapshot::{HandleStats, NodeSnapshot, ScreenSnapshot, SnapshotSource, WindowSnapshot};
pub use source::ScreenSource;
pub use text::{shrink_text, shrink_text_to, SHRINK_THRESHOLD};
pub use walker::{DiagnosticSink, ScreenLogger, TraceSink};
