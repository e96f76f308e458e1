use super::{list_lines, page_name, table_lines, Extractor, ParsingContext};
use crate::error::{LookupError, ShapeError};
use crate::html::{find, first_descendant, get_text, segment, Block, SegmentOptions};
use crate::model::Record;
use log::debug;

pub struct SubclassExtractor;

impl Extractor for SubclassExtractor {
    fn extract(&self, context: &ParsingContext) -> Result<Vec<Record>, LookupError> {
        debug!("Extracting subclass from {}", context.url);

        let name = page_name(get_text(find(&context.document, "div.page-title")?))?;
        let content = find(&context.document, "#page-content")?;
        let blurb = get_text(first_descendant(content, "p")?);

        // The feature text sits three wrapper divs down
        let body = first_descendant(content, "div")?;
        let body = first_descendant(body, "div")?;
        let body = first_descendant(body, "div")?;

        let mut blocks = segment(body, SegmentOptions::default());
        let source = blocks
            .next()
            .ok_or(ShapeError::MissingBlock {
                role: "source",
                found: 0,
            })?
            .text();

        let mut description = String::new();
        for block in blocks {
            match block {
                Block::Heading(el) | Block::Paragraph(el) => {
                    description.push_str(&get_text(el));
                    description.push_str("\n\n");
                }
                Block::List(el) => description.extend(list_lines(el)),
                Block::Table(el) => description.extend(table_lines(el)?),
                Block::Element(el) => debug!("Skipping <{}> in {}", el.value().name(), name),
                Block::Text(_) => {}
            }
        }

        Ok(vec![Record {
            description_short: format!("{source}\n\n{blurb}\n\n"),
            name,
            description,
        }])
    }
}
