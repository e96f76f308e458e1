//! One pipeline per entity kind: resolve URLs, visit every page, write the dump.

mod runner;
mod writer;

pub use runner::{Harvest, PageFailure, Runner};
pub use writer::write_lookup;

use crate::config::ScrapeConfig;
use crate::error::LookupError;
use crate::fetchers::Fetcher;
use crate::kind::EntityKind;
use crate::progress::Progress;
use crate::sources;
use log::{info, warn};
use std::path::PathBuf;

/// Outcome of a completed pipeline.
#[derive(Debug)]
pub struct RunReport {
    pub kind: EntityKind,
    pub pages: usize,
    pub records: usize,
    pub failures: Vec<PageFailure>,
    pub output: PathBuf,
}

impl RunReport {
    pub fn summary(&self) -> String {
        format!(
            "{}: {} records from {} pages ({} failed) -> {}",
            self.kind,
            self.records,
            self.pages,
            self.failures.len(),
            self.output.display()
        )
    }
}

/// Run the whole pipeline for `kind` and write its dump into
/// `config.output_dir`.
///
/// With [`FailurePolicy::Abort`](crate::config::FailurePolicy::Abort) the
/// first failed page ends the run and nothing is written.
pub fn run<F: Fetcher>(
    kind: EntityKind,
    config: &ScrapeConfig,
    fetcher: F,
    progress: &mut dyn Progress,
) -> Result<RunReport, LookupError> {
    let urls = sources::page_urls(kind, &config.base_url, &fetcher)?;
    info!("Scraping {} {} page(s)", urls.len(), kind);

    let runner = Runner::new(fetcher, config.failure_policy);
    let harvest = runner.collect(kind, &urls, progress)?;

    let output = config.output_dir.join(kind.output_file());
    write_lookup(&output, &harvest.lookup)?;

    if !harvest.failures.is_empty() {
        warn!(
            "{} of {} {} page(s) failed",
            harvest.failures.len(),
            urls.len(),
            kind
        );
    }

    Ok(RunReport {
        kind,
        pages: urls.len(),
        records: harvest.lookup.len(),
        failures: harvest.failures,
        output,
    })
}
