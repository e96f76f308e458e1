//! Helpers for walking the wiki's HTML.
//!
//! The segmenter turns an element's children into typed [`Block`]s. The text
//! helpers flatten those blocks back into strings.

mod segment;
mod text;

pub use segment::{segment, Block, BlockKind, SegmentOptions};
pub use text::{get_text, normalize, strip_markup};

use crate::error::{LookupError, ShapeError};
use scraper::{ElementRef, Html, Selector};

pub fn selector(css: &str) -> Result<Selector, LookupError> {
    Selector::parse(css).map_err(|e| LookupError::Selector(format!("{css}: {e:?}")))
}

/// First element in the document matching `css`.
pub fn find<'a>(document: &'a Html, css: &'static str) -> Result<ElementRef<'a>, LookupError> {
    let selector = selector(css)?;
    document
        .select(&selector)
        .next()
        .ok_or_else(|| ShapeError::MissingElement { selector: css }.into())
}

/// First element named `tag` strictly below `scope`, in document order.
pub fn first_descendant<'a>(
    scope: ElementRef<'a>,
    tag: &'static str,
) -> Result<ElementRef<'a>, LookupError> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == tag)
        .ok_or_else(|| ShapeError::MissingElement { selector: tag }.into())
}
