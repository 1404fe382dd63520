//! The introspection-service boundary.

use crate::capabilities::Capabilities;
use crate::element::{AccessibleNode, AccessibleWindow};

/// The foreign introspection service the walker reads from.
///
/// Implementations hand out owned handles; every handle releases its
/// foreign reference when dropped. The service is queried once per
/// traversal for its capability set.
pub trait ScreenSource: Send + Sync {
    /// Optional field groups available in the current runtime.
    fn capabilities(&self) -> Capabilities;

    /// Acquire the top-level windows, in stacking order. Empty when window
    /// enumeration is unsupported.
    fn windows(&self) -> Vec<AccessibleWindow>;

    /// Acquire the single screen root node, for runtimes without window
    /// enumeration.
    fn root_node(&self) -> Option<AccessibleNode>;
}
