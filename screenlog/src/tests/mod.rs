mod describe_tests;
mod snapshot_tests;

use crate::{NodeSnapshot, ScreenSnapshot, SnapshotSource};

// Initialize tracing for tests
pub fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into()))
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .try_init();
}

pub fn node(class_name: &str) -> NodeSnapshot {
    NodeSnapshot {
        class_name: Some(class_name.to_string()),
        ..Default::default()
    }
}

pub fn source_with_root(root: NodeSnapshot) -> SnapshotSource {
    SnapshotSource::new(ScreenSnapshot {
        root: Some(root),
        ..Default::default()
    })
}
