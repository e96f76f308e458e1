use super::{page_name, Extractor, ParsingContext};
use crate::error::{LookupError, ShapeError};
use crate::html::{find, get_text, normalize, segment, strip_markup, Block, BlockKind, SegmentOptions};
use crate::model::Record;
use log::debug;

pub struct SpellExtractor;

struct Slot {
    role: &'static str,
    expected: BlockKind,
}

/// Fixed leading blocks of a spell page. Body blocks follow, and the last
/// block is always the spell lists line.
const LAYOUT: [Slot; 3] = [
    Slot {
        role: "source",
        expected: BlockKind::Paragraph,
    },
    Slot {
        role: "summary",
        expected: BlockKind::Paragraph,
    },
    Slot {
        role: "stats",
        expected: BlockKind::Paragraph,
    },
];

const LISTS_ROLE: &str = "spell lists";

fn check_layout(blocks: &[Block]) -> Result<(), ShapeError> {
    for (index, slot) in LAYOUT.iter().enumerate() {
        let block = blocks.get(index).ok_or(ShapeError::MissingBlock {
            role: slot.role,
            found: blocks.len(),
        })?;
        if block.kind() != slot.expected {
            return Err(ShapeError::UnexpectedBlock {
                role: slot.role,
                expected: slot.expected,
                found: block.kind(),
            });
        }
    }

    if blocks.len() <= LAYOUT.len() {
        return Err(ShapeError::MissingBlock {
            role: LISTS_ROLE,
            found: blocks.len(),
        });
    }
    Ok(())
}

impl Extractor for SpellExtractor {
    fn extract(&self, context: &ParsingContext) -> Result<Vec<Record>, LookupError> {
        debug!("Extracting spell from {}", context.url);

        let name = page_name(get_text(find(&context.document, "div.page-header")?))?;
        let content = find(&context.document, "#page-content")?;
        let blocks: Vec<Block> = segment(
            content,
            SegmentOptions {
                skip_wrappers: true,
            },
        )
        .collect();
        check_layout(&blocks)?;

        let (fixed, rest) = blocks.split_at(LAYOUT.len());
        let (lists, body) = rest.split_last().ok_or(ShapeError::MissingBlock {
            role: LISTS_ROLE,
            found: blocks.len(),
        })?;

        let source = fixed[0].text();
        let summary = fixed[1].text();
        let stats = fixed[2].element().map(strip_markup).unwrap_or_default();
        let body = body.iter().map(Block::text).collect::<Vec<_>>().join("\n\n");
        let lists = lists.strings().join(" ");

        debug!("Spell {}: {} body blocks", name, blocks.len() - LAYOUT.len() - 1);

        Ok(vec![Record {
            name,
            description_short: format!("{source}\n{summary}\n"),
            description: normalize(&format!("{stats}\n\n{body}\n\n{lists}")),
        }])
    }
}
