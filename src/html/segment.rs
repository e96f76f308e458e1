use super::text::get_text;
use scraper::node::Node;
use scraper::ElementRef;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Heading,
    Paragraph,
    List,
    Table,
    Element,
    Text,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BlockKind::Heading => "heading",
            BlockKind::Paragraph => "paragraph",
            BlockKind::List => "list",
            BlockKind::Table => "table",
            BlockKind::Element => "element",
            BlockKind::Text => "text",
        };
        f.write_str(name)
    }
}

/// One meaningful child of a page's content root.
#[derive(Debug, Clone, Copy)]
pub enum Block<'a> {
    Heading(ElementRef<'a>),
    Paragraph(ElementRef<'a>),
    List(ElementRef<'a>),
    Table(ElementRef<'a>),
    /// Any element without a dedicated block type (`div`, `blockquote`, ...)
    Element(ElementRef<'a>),
    /// A bare, non-blank text node
    Text(&'a str),
}

impl<'a> Block<'a> {
    fn from_element(element: ElementRef<'a>) -> Self {
        match element.value().name() {
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Block::Heading(element),
            "p" => Block::Paragraph(element),
            "ul" | "ol" => Block::List(element),
            "table" => Block::Table(element),
            _ => Block::Element(element),
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading(_) => BlockKind::Heading,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::List(_) => BlockKind::List,
            Block::Table(_) => BlockKind::Table,
            Block::Element(_) => BlockKind::Element,
            Block::Text(_) => BlockKind::Text,
        }
    }

    pub fn element(&self) -> Option<ElementRef<'a>> {
        match *self {
            Block::Heading(el)
            | Block::Paragraph(el)
            | Block::List(el)
            | Block::Table(el)
            | Block::Element(el) => Some(el),
            Block::Text(_) => None,
        }
    }

    /// All text runs beneath this block, in document order.
    pub fn strings(&self) -> Vec<&'a str> {
        match self.element() {
            Some(el) => el.text().collect(),
            None => match *self {
                Block::Text(text) => vec![text],
                _ => Vec::new(),
            },
        }
    }

    pub fn text(&self) -> String {
        match *self {
            Block::Text(text) => text.to_string(),
            _ => self.element().map(get_text).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentOptions {
    /// Drop `div` children that carry no direct text of their own
    pub skip_wrappers: bool,
}

fn is_wrapper(element: ElementRef) -> bool {
    element.value().name() == "div"
        && !element.children().any(|child| {
            child
                .value()
                .as_text()
                .is_some_and(|text| !text.trim().is_empty())
        })
}

/// Split `root`'s direct children into typed blocks.
///
/// Blank text nodes, comments and (optionally) wrapper `div`s are dropped;
/// everything else comes out in document order.
pub fn segment<'a>(
    root: ElementRef<'a>,
    options: SegmentOptions,
) -> impl Iterator<Item = Block<'a>> + 'a {
    root.children().filter_map(move |node| match node.value() {
        Node::Text(text) => {
            let text: &'a str = text;
            (!text.trim().is_empty()).then_some(Block::Text(text))
        }
        Node::Element(_) => {
            let element = ElementRef::wrap(node)?;
            if options.skip_wrappers && is_wrapper(element) {
                None
            } else {
                Some(Block::from_element(element))
            }
        }
        _ => None,
    })
}
