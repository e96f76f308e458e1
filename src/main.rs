use dnd_lookups::{run, ConsoleProgress, EntityKind, RequestFetcher, ScrapeConfig};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Kinds to scrape, e.g. `dnd-lookups spell weapon`; none means all
    let mut kinds = env::args()
        .skip(1)
        .map(|arg| arg.parse::<EntityKind>())
        .collect::<Result<Vec<_>, _>>()?;
    if kinds.is_empty() {
        kinds = EntityKind::ALL.to_vec();
    }

    let config = ScrapeConfig::load()?;
    let fetcher = RequestFetcher::new(&config)?;

    for kind in kinds {
        let mut progress = ConsoleProgress::new();
        let report = run(kind, &config, &fetcher, &mut progress)?;

        println!("{}", report.summary());
        for failure in &report.failures {
            eprintln!("  {}: {}", failure.url, failure.error);
        }
    }

    Ok(())
}
