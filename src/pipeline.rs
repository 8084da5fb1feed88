//! Sequential resolve-and-fetch pipeline.

use std::path::Path;

use tracing::{info, warn};

use crate::config::Config;
use crate::export;
use crate::models::PaperRecord;
use crate::scan;
use crate::sources::{SemanticScholarClient, SourceError};

/// Counters reported after a pipeline run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// Titles enumerated from the papers directory
    pub scanned: usize,
    /// Titles resolved to a paper identifier
    pub resolved: usize,
    /// Titles skipped (no exact match or lookup failure)
    pub unresolved: usize,
    /// Records written to the output file
    pub exported: usize,
}

/// Run the full pipeline: enumerate titles under `root`, resolve each to a
/// paper identifier, fetch metadata for each identifier, and write the export
/// to `output`.
///
/// Requests are strictly sequential, each followed by the configured delay,
/// so total run time grows with (titles + resolved identifiers) x delay.
/// Per-item failures are logged and skipped; only filesystem errors on the
/// scan or the export abort the run.
pub async fn run(config: &Config, root: &Path, output: &Path) -> Result<Summary, SourceError> {
    let client = SemanticScholarClient::new(config)?;

    let titles = scan::collect_titles(root)?;
    info!(count = titles.len(), root = %root.display(), "collected titles");

    let mut summary = Summary {
        scanned: titles.len(),
        ..Summary::default()
    };

    let mut ids = Vec::new();
    for title in &titles {
        match client.resolve_title(title).await {
            Ok(id) => {
                info!(%title, %id, "resolved");
                summary.resolved += 1;
                ids.push(id);
            }
            Err(SourceError::Unresolved(_)) => {
                warn!(%title, "CHECK THE PAPER: no exact title match");
                summary.unresolved += 1;
            }
            Err(err) => {
                warn!(%title, error = %err, "skipping title after lookup failure");
                summary.unresolved += 1;
            }
        }
    }

    let mut records: Vec<PaperRecord> = Vec::with_capacity(ids.len());
    for id in &ids {
        match client.fetch_record(id).await {
            Ok(record) => records.push(record),
            Err(err) => warn!(%id, error = %err, "skipping record after metadata failure"),
        }
    }

    export::write_records(output, &records)?;
    summary.exported = records.len();
    info!(
        exported = summary.exported,
        output = %output.display(),
        "export written"
    );

    Ok(summary)
}
