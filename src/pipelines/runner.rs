use crate::config::FailurePolicy;
use crate::error::LookupError;
use crate::extractors::{self, Extractor, ParsingContext};
use crate::fetchers::Fetcher;
use crate::kind::EntityKind;
use crate::model::{Lookup, Record};
use crate::progress::Progress;
use log::{debug, error, warn};

/// A page that was left out of the output.
#[derive(Debug)]
pub struct PageFailure {
    pub url: String,
    pub error: LookupError,
}

/// Everything collected from one pass over a URL set.
#[derive(Debug, Default)]
pub struct Harvest {
    pub lookup: Lookup,
    pub failures: Vec<PageFailure>,
}

/// Visits pages one at a time: fetch, parse, extract, aggregate.
pub struct Runner<F> {
    fetcher: F,
    policy: FailurePolicy,
}

impl<F: Fetcher> Runner<F> {
    pub fn new(fetcher: F, policy: FailurePolicy) -> Self {
        Self { fetcher, policy }
    }

    pub fn scrape_page(
        &self,
        extractor: &dyn Extractor,
        url: &str,
    ) -> Result<Vec<Record>, LookupError> {
        let html = self.fetcher.fetch(url)?;
        let context = ParsingContext::new(url, &html);
        extractor.extract(&context)
    }

    pub fn collect(
        &self,
        kind: EntityKind,
        urls: &[String],
        progress: &mut dyn Progress,
    ) -> Result<Harvest, LookupError> {
        let extractor = extractors::for_kind(kind);
        let mut harvest = Harvest::default();

        progress.begin(urls.len());
        for (index, url) in urls.iter().enumerate() {
            match self.scrape_page(extractor.as_ref(), url) {
                Ok(records) => {
                    debug!("{} gave {} {} record(s)", url, records.len(), kind);
                    harvest.lookup.extend(records);
                }
                Err(err) => match self.policy {
                    FailurePolicy::Abort => {
                        progress.finish();
                        error!("{} failed: {}", url, err);
                        return Err(LookupError::PageFailed {
                            url: url.clone(),
                            source: Box::new(err),
                        });
                    }
                    FailurePolicy::Skip => {
                        warn!("{} failed: {}", url, err);
                        progress.log(&format!("{url} failed..."));
                        harvest.failures.push(PageFailure {
                            url: url.clone(),
                            error: err,
                        });
                    }
                },
            }
            progress.item_done(index + 1);
        }
        progress.finish();

        Ok(harvest)
    }
}
