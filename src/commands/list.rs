//! Enumeration command
//!
//! Scans installed applications, aggregates every declared extension into
//! associations and prints them as a list or as JSON.

use std::sync::Arc;

use crate::aggregator::{IdentityFilter, aggregate};
use crate::config::RunConfig;
use crate::error::Result;
use crate::indexer::scan_installed_applications;
use crate::platform::Backend;
use crate::ui::{OutputMode, ScanProgress, SpinnerProgress, format};

/// Run the enumeration and print the result
pub fn run(
    backend: &Backend,
    config: &RunConfig,
    filter: Option<&str>,
    output: OutputMode,
) -> Result<()> {
    let mut progress = SpinnerProgress::new();
    let text = enumerate(backend, config, filter, output, &mut progress)?;
    if !text.is_empty() {
        println!("{text}");
    }
    Ok(())
}

/// Scan, aggregate and render
pub fn enumerate(
    backend: &Backend,
    config: &RunConfig,
    filter: Option<&str>,
    output: OutputMode,
    progress: &mut dyn ScanProgress,
) -> Result<String> {
    let records =
        scan_installed_applications(Arc::clone(&backend.index), config.scan_timeout, progress)?;
    let filter = filter.map(IdentityFilter::new);
    let associations = aggregate(backend.registry.as_ref(), &records, filter.as_ref());
    format(&associations, output)
}
