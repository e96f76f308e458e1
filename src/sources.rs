use crate::error::LookupError;
use crate::fetchers::Fetcher;
use crate::html::selector;
use crate::kind::EntityKind;
use log::{debug, info};
use reqwest::Url;
use scraper::Html;

/// Index page linking to every spell.
const SPELL_LISTING: &str = "/spells";

/// Single page holding every weapon table.
const WEAPON_PAGE: &str = "/weapons";

/// Subclass pages, plus the few class option pages laid out the same way.
const SUBCLASS_PAGES: &[&str] = &[
    "/artificer:alchemist",
    "/artificer:armorer",
    "/artificer:artillerist",
    "/artificer:battle-smith",
    "/barbarian:battlerager",
    "/barbarian:beast",
    "/barbarian:berserker",
    "/barbarian:giant",
    "/barbarian:storm-herald",
    "/barbarian:totem-warrior",
    "/barbarian:wild-magic",
    "/barbarian:zealot",
    "/bard:creation",
    "/bard:eloquence",
    "/bard:glamour",
    "/bard:lore",
    "/bard:spirits",
    "/bard:swords",
    "/bard:valor",
    "/bard:whispers",
    "/cleric:arcana",
    "/cleric:death",
    "/cleric:forge",
    "/cleric:grave",
    "/cleric:knowledge",
    "/cleric:life",
    "/cleric:light",
    "/cleric:nature",
    "/cleric:order",
    "/cleric:peace",
    "/cleric:tempest",
    "/cleric:trickery",
    "/cleric:twilight",
    "/cleric:war",
    "/cleric:ambition",
    "/cleric:solidarity",
    "/cleric:strength",
    "/cleric:zeal",
    "/druid:dreams",
    "/druid:land",
    "/druid:moon",
    "/druid:shepherd",
    "/druid:spores",
    "/druid:stars",
    "/druid:wildfire",
    "/fighter:arcane-archer",
    "/fighter:banneret",
    "/fighter:battle-master",
    "/fighter:cavalier",
    "/fighter:champion",
    "/fighter:echo-knight",
    "/fighter:eldritch-knight",
    "/fighter:psi-warrior",
    "/fighter:rune-knight",
    "/fighter:samurai",
    "/fighter:battle-master:maneuvers",
    "/monk:mercy",
    "/monk:ascendant-dragon",
    "/monk:astral-self",
    "/monk:drunken-master",
    "/monk:four-elements",
    "/monk:kensei",
    "/monk:long-death",
    "/monk:open-hand",
    "/monk:shadow",
    "/monk:sun-soul",
    "/monk:four-elements:disciplines",
    "/sorcerer:aberrant-mind",
    "/sorcerer:clockwork-soul",
    "/sorcerer:draconic-bloodline",
    "/sorcerer:divine-soul",
    "/sorcerer:lunar-sorcery",
    "/sorcerer:shadow-magic",
    "/sorcerer:storm-sorcery",
    "/sorcerer:wild-magic",
    "/sorcerer:pyromancy",
    "/warlock:archfey",
    "/warlock:celestial",
    "/warlock:fathomless",
    "/warlock:fiend",
    "/warlock:the-genie",
    "/warlock:great-old-one",
    "/warlock:hexblade",
    "/warlock:undead",
    "/warlock:undying",
    "/warlock:eldritch-invocations",
    "/wizard:abjuration",
    "/wizard:bladesinging",
    "/wizard:chronurgy",
    "/wizard:conjuration",
    "/wizard:divination",
    "/wizard:enchantment",
    "/wizard:evocation",
    "/wizard:graviturgy",
    "/wizard:illusion",
    "/wizard:necromancy",
    "/wizard:order-of-scribes",
    "/wizard:transmutation",
    "/wizard:war-magic",
];

/// Where a pipeline's page URLs come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlSource {
    /// Links found in the table cells of a listing page
    Listing(&'static str),
    /// A fixed set of pages
    Fixed(&'static [&'static str]),
}

impl UrlSource {
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Spell => UrlSource::Listing(SPELL_LISTING),
            EntityKind::Subclass => UrlSource::Fixed(SUBCLASS_PAGES),
            EntityKind::Weapon => UrlSource::Fixed(&[WEAPON_PAGE]),
        }
    }
}

fn parse_base(base_url: &str) -> Result<Url, LookupError> {
    Url::parse(base_url).map_err(|e| LookupError::Url(format!("{base_url}: {e}")))
}

fn join(base: &Url, link: &str) -> Result<String, LookupError> {
    base.join(link)
        .map(String::from)
        .map_err(|e| LookupError::Url(format!("{link}: {e}")))
}

/// Every `href` of an anchor sitting directly inside a table cell, resolved
/// against `base`.
pub fn discover_links(document: &Html, base: &Url) -> Result<Vec<String>, LookupError> {
    let anchors = selector("td > a[href]")?;
    document
        .select(&anchors)
        .filter_map(|a| a.value().attr("href"))
        .map(|href| join(base, href))
        .collect()
}

/// Resolve the page URLs a pipeline should visit.
pub fn page_urls<F: Fetcher + ?Sized>(
    kind: EntityKind,
    base_url: &str,
    fetcher: &F,
) -> Result<Vec<String>, LookupError> {
    let base = parse_base(base_url)?;

    match UrlSource::for_kind(kind) {
        UrlSource::Fixed(paths) => paths.iter().map(|path| join(&base, path)).collect(),
        UrlSource::Listing(path) => {
            let listing = join(&base, path)?;
            info!("Reading {} listing from {}", kind, listing);
            let html = fetcher.fetch(&listing)?;
            let urls = discover_links(&Html::parse_document(&html), &base)?;
            debug!("Found {} links on {}", urls.len(), listing);
            Ok(urls)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct StaticFetcher(HashMap<String, String>);

    impl Fetcher for StaticFetcher {
        fn fetch(&self, url: &str) -> Result<String, LookupError> {
            self.0
                .get(url)
                .cloned()
                .ok_or_else(|| LookupError::Url(url.to_string()))
        }
    }

    #[test]
    fn test_discover_only_cell_anchors() {
        let html = Html::parse_document(
            r#"<html><body>
                <a href="/nav">nav</a>
                <table>
                    <tr><td><a href="/spell:acid-splash">Acid Splash</a></td><td>Conjuration</td></tr>
                    <tr><td><em><a href="/spell:nested">Nested</a></em></td></tr>
                    <tr><td><a href="http://other.example/spell:fire-bolt">Fire Bolt</a></td></tr>
                </table>
            </body></html>"#,
        );
        let base = Url::parse("https://dnd5e.wikidot.com").unwrap();
        let links = discover_links(&html, &base).unwrap();

        assert_eq!(
            links,
            vec![
                "https://dnd5e.wikidot.com/spell:acid-splash",
                "http://other.example/spell:fire-bolt",
            ]
        );
    }

    #[test]
    fn test_fixed_sources_resolve_against_base() {
        let fetcher = StaticFetcher(HashMap::new());
        let urls = page_urls(EntityKind::Subclass, "http://localhost:1234", &fetcher).unwrap();

        assert_eq!(urls.len(), SUBCLASS_PAGES.len());
        assert_eq!(urls[0], "http://localhost:1234/artificer:alchemist");

        let urls = page_urls(EntityKind::Weapon, "https://dnd5e.wikidot.com", &fetcher).unwrap();
        assert_eq!(urls, vec!["https://dnd5e.wikidot.com/weapons"]);
    }

    #[test]
    fn test_spell_listing_is_fetched() {
        let mut pages = HashMap::new();
        pages.insert(
            "https://dnd5e.wikidot.com/spells".to_string(),
            "<table><tr><td><a href='/spell:shield'>Shield</a></td></tr></table>".to_string(),
        );
        let urls = page_urls(EntityKind::Spell, "https://dnd5e.wikidot.com", &StaticFetcher(pages)).unwrap();
        assert_eq!(urls, vec!["https://dnd5e.wikidot.com/spell:shield"]);
    }

    #[test]
    fn test_bad_base_url() {
        let fetcher = StaticFetcher(HashMap::new());
        let result = page_urls(EntityKind::Weapon, "not a url", &fetcher);
        assert!(matches!(result, Err(LookupError::Url(_))));
    }
}
