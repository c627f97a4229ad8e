//! Use case factory
//!
//! Builds application services from a loaded `Config`.

use std::path::Path;

use crate::application::{ArtifactGenerator, TreeWalker};
use crate::config::Config;
use crate::domain::ports::WalkEventSink;
use crate::domain::services::StateProber;
use crate::infrastructure::{CommandPreviewRenderer, SevenZipArchiver};

/// Generator backed by the configured archiver and renderer programs.
pub fn create_generator(config: &Config) -> ArtifactGenerator<SevenZipArchiver, CommandPreviewRenderer> {
    ArtifactGenerator::new(config.archiver(), config.renderer(), config.archive_extension())
        .with_wait_policy(config.wait_policy())
}

/// Walker over `root` using the configured ignore list and archive extension.
pub fn create_walker<'a>(
    root: &Path,
    config: &Config,
    sink: &'a dyn WalkEventSink,
) -> TreeWalker<'a> {
    TreeWalker::new(
        root,
        StateProber::new(config.archive_extension()),
        config.ignore_list(),
        sink,
    )
}
