//! Screenlog CLI
//!
//! Replays a captured accessibility-tree snapshot as diagnostic text — the
//! operator-facing entry point for inspecting what an assistive-technology
//! client saw on a mirrored screen.
//!
//! Usage:
//!   screenlog capture.json                 # full screen log to stdout
//!   screenlog --tree capture.json          # node tree of the snapshot root only
//!   screenlog --all-capabilities capture.json
//!   screenlog --legacy capture.json        # every optional field group off
//!   screenlog --trace capture.json         # emit through tracing instead

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use screenlog::{
    Capabilities, DiagnosticSink, ScreenLogger, ScreenSnapshot, ScreenSource, SnapshotSource,
    TraceSink,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "screenlog")]
#[command(about = "Replay captured accessibility-tree snapshots as diagnostic text")]
struct Cli {
    /// Snapshot file captured from the mirrored screen
    snapshot: PathBuf,

    /// Render only the node tree of the snapshot root
    #[arg(long)]
    tree: bool,

    /// Treat every optional field group as available
    #[arg(long)]
    all_capabilities: bool,

    /// Treat every optional field group as unavailable
    #[arg(long, conflicts_with = "all_capabilities")]
    legacy: bool,

    /// Emit lines through tracing at debug level instead of stdout
    #[arg(long)]
    trace: bool,
}

struct StdoutSink;

impl DiagnosticSink for StdoutSink {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("screenlog=debug")),
        )
        .init();

    let cli = Cli::parse();

    let snapshot = ScreenSnapshot::from_path(&cli.snapshot)
        .with_context(|| format!("loading snapshot {}", cli.snapshot.display()))?;
    let source = Arc::new(SnapshotSource::new(snapshot));

    let logger = if cli.all_capabilities {
        ScreenLogger::with_capabilities(source.clone(), Capabilities::all())
    } else if cli.legacy {
        ScreenLogger::with_capabilities(source.clone(), Capabilities::none())
    } else {
        ScreenLogger::new(source.clone())
    };

    let mut stdout = StdoutSink;
    let mut trace = TraceSink;
    let sink: &mut dyn DiagnosticSink = if cli.trace { &mut trace } else { &mut stdout };

    if cli.tree {
        let Some(root) = source.root_node() else {
            bail!("snapshot has no root node tree");
        };
        logger.log_node_tree(&root, sink);
    } else {
        logger.log_screen(sink);
    }

    Ok(())
}
