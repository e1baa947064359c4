//! Installed application discovery
//!
//! This module handles:
//! - Asking the system application index for every installed bundle
//! - Reading each bundle's manifest and flattening its declared extensions
//! - Running the whole scan on a worker thread with a bounded wait
//!
//! A bundle with an unreadable manifest, or one that declares no document
//! types, is skipped; it never fails the scan.

pub mod manifest;


use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::RecvTimeoutError;
use tracing::{debug, info};

use crate::domain::{AppId, ApplicationRecord};
use crate::error::{BindxError, Result};
use crate::ui::ScanProgress;

pub use manifest::{BundleManifest, DocumentType};

/// How long the waiting side sleeps between progress ticks
const TICK: Duration = Duration::from_millis(100);

/// System-wide application index
pub trait AppIndex: Send + Sync {
    /// Locations of every application bundle the index knows about
    fn discover(&self) -> Result<Vec<PathBuf>>;

    /// Read the manifest of one bundle returned by [`AppIndex::discover`]
    fn read_manifest(&self, bundle: &Path) -> Result<BundleManifest>;
}

/// Run a complete scan on the current thread.
///
/// Records come back in discovery order, which is unspecified.
pub fn collect_records(index: &dyn AppIndex) -> Result<Vec<ApplicationRecord>> {
    let bundles = index.discover()?;
    info!(bundles = bundles.len(), "application index returned bundles");

    let mut records = Vec::with_capacity(bundles.len());
    for bundle in &bundles {
        match index.read_manifest(bundle) {
            Ok(manifest) => match manifest.into_record(bundle) {
                Some(record) => {
                    debug!(
                        bundle = %record.path.display(),
                        id = record.id.as_ref().map_or("-", AppId::as_str),
                        extensions = record.extensions.len(),
                        "indexed application"
                    );
                    records.push(record);
                }
                None => debug!(bundle = %bundle.display(), "no document types declared"),
            },
            Err(e) => debug!(bundle = %bundle.display(), error = %e, "skipping bundle"),
        }
    }

    info!(records = records.len(), "application scan complete");
    Ok(records)
}

/// Scan installed applications in the background and wait for the batch.
///
/// The scan runs on its own thread; this call blocks until the full result
/// arrives or `deadline` passes. A scan that overruns is left running
/// detached and reported as [`BindxError::ScanTimeout`].
pub fn scan_installed_applications(
    index: Arc<dyn AppIndex>,
    deadline: Duration,
    progress: &mut dyn ScanProgress,
) -> Result<Vec<ApplicationRecord>> {
    let (tx, rx) = crossbeam_channel::bounded(1);

    std::thread::Builder::new()
        .name("bindx-scan".to_string())
        .spawn(move || {
            // The receiver is gone once the caller timed out.
            let _ = tx.send(collect_records(index.as_ref()));
        })
        .map_err(|e| BindxError::ScanFailed {
            reason: format!("could not start scan thread: {e}"),
        })?;

    progress.start();
    let started = Instant::now();
    loop {
        let remaining = deadline.saturating_sub(started.elapsed());
        if remaining.is_zero() {
            progress.abandon();
            return Err(BindxError::ScanTimeout {
                seconds: deadline.as_secs(),
            });
        }

        match rx.recv_timeout(remaining.min(TICK)) {
            Ok(Ok(records)) => {
                progress.finish(records.len());
                return Ok(records);
            }
            Ok(Err(e)) => {
                progress.abandon();
                return Err(e);
            }
            Err(RecvTimeoutError::Timeout) => progress.tick(),
            Err(RecvTimeoutError::Disconnected) => {
                progress.abandon();
                return Err(BindxError::ScanFailed {
                    reason: "scan worker exited without a result".to_string(),
                });
            }
        }
    }
}
