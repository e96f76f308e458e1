use super::table::{cells, is_header, rows};
use super::{Extractor, ParsingContext};
use crate::error::LookupError;
use crate::html::{find, get_text, segment, Block, SegmentOptions};
use crate::model::Record;
use log::debug;
use scraper::ElementRef;

/// Cells this short are placeholders such as an em-dash.
const MIN_CELL_CHARS: usize = 3;

pub struct WeaponExtractor;

fn weapon_from_row(row: ElementRef) -> Option<Record> {
    let cells = cells(row);
    let (first, rest) = cells.split_first()?;

    let name = get_text(*first).trim().to_string();
    if name.is_empty() {
        return None;
    }

    let mut description = String::new();
    for cell in rest {
        let text = get_text(*cell);
        let text = text.trim();
        if text.chars().count() >= MIN_CELL_CHARS {
            description.push_str(text);
            description.push_str("\n\n");
        }
    }

    Some(Record {
        name,
        description_short: String::new(),
        description,
    })
}

impl Extractor for WeaponExtractor {
    fn extract(&self, context: &ParsingContext) -> Result<Vec<Record>, LookupError> {
        debug!("Extracting weapons from {}", context.url);

        let content = find(&context.document, "#page-content")?;
        let mut records = Vec::new();

        for block in segment(content, SegmentOptions::default()) {
            let Block::Table(table) = block else {
                continue;
            };
            for row in rows(table).into_iter().filter(|row| !is_header(*row)) {
                match weapon_from_row(row) {
                    Some(record) => records.push(record),
                    None => debug!("Skipping weapon row without a name"),
                }
            }
        }

        debug!("Found {} weapons", records.len());
        Ok(records)
    }
}
