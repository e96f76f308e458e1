pub mod config;
pub mod error;
pub mod extractors;
pub mod fetchers;
pub mod html;
pub mod kind;
pub mod model;
pub mod pipelines;
pub mod progress;
pub mod sources;

pub use config::{FailurePolicy, ScrapeConfig};
pub use error::{LookupError, ShapeError};
pub use fetchers::{Fetcher, RequestFetcher};
pub use kind::EntityKind;
pub use model::{Lookup, Record};
pub use pipelines::{run, RunReport};
pub use progress::{ConsoleProgress, NullProgress, Progress};

use crate::extractors::{Extractor, ParsingContext};
use log::debug;

/// Fetch one page and extract the records of `kind` from it.
///
/// # Example
/// ```no_run
/// use dnd_lookups::{fetch_records, EntityKind};
///
/// let records = fetch_records(EntityKind::Spell, "https://dnd5e.wikidot.com/spell:fireball")?;
/// println!("{}", records[0].description);
/// # Ok::<(), dnd_lookups::LookupError>(())
/// ```
pub fn fetch_records(kind: EntityKind, url: &str) -> Result<Vec<Record>, LookupError> {
    let fetcher = RequestFetcher::new(&ScrapeConfig::default())?;
    let html = fetcher.fetch(url)?;

    let context = ParsingContext::new(url, &html);
    let records = extractors::for_kind(kind).extract(&context)?;
    debug!("{:#?}", records);
    Ok(records)
}
