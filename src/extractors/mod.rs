use crate::error::{LookupError, ShapeError};
use crate::kind::EntityKind;
use crate::model::Record;
use scraper::Html;

mod list;
mod spell;
mod subclass;
mod table;
mod weapon;

pub use list::list_lines;
pub use spell::SpellExtractor;
pub use subclass::SubclassExtractor;
pub use table::table_lines;
pub use weapon::WeaponExtractor;

/// Prefix for every list item and table row line.
pub const MARKER: &str = "  -- ";

pub struct ParsingContext {
    pub url: String,
    pub document: Html,
}

impl ParsingContext {
    pub fn new(url: impl Into<String>, html: &str) -> Self {
        Self {
            url: url.into(),
            document: Html::parse_document(html),
        }
    }
}

pub trait Extractor {
    /// Turn one page into records. Spell and subclass pages yield one record,
    /// the weapon page yields one per table row.
    fn extract(&self, context: &ParsingContext) -> Result<Vec<Record>, LookupError>;
}

pub fn for_kind(kind: EntityKind) -> Box<dyn Extractor> {
    match kind {
        EntityKind::Spell => Box::new(SpellExtractor),
        EntityKind::Subclass => Box::new(SubclassExtractor),
        EntityKind::Weapon => Box::new(WeaponExtractor),
    }
}

fn page_name(text: String) -> Result<String, ShapeError> {
    let name = text.trim();
    if name.is_empty() {
        return Err(ShapeError::EmptyName);
    }
    Ok(name.to_string())
}
