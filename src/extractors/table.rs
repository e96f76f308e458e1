use super::MARKER;
use crate::error::{LookupError, ShapeError};
use crate::html::get_text;
use scraper::ElementRef;

fn children_named<'a>(
    parent: ElementRef<'a>,
    names: &'a [&'a str],
) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    parent
        .children()
        .filter_map(ElementRef::wrap)
        .filter(move |child| names.contains(&child.value().name()))
}

/// Rows of `table` in document order, looking through `thead`/`tbody`/`tfoot`.
pub(crate) fn rows(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut rows = Vec::new();
    for child in children_named(table, &["tr", "thead", "tbody", "tfoot"]) {
        if child.value().name() == "tr" {
            rows.push(child);
        } else {
            rows.extend(children_named(child, &["tr"]));
        }
    }
    rows
}

pub(crate) fn cells(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    children_named(row, &["td", "th"]).collect()
}

pub(crate) fn is_header(row: ElementRef) -> bool {
    children_named(row, &["th"]).next().is_some()
}

fn row_line(row: ElementRef) -> String {
    let cells = cells(row);
    let mut line = String::from(MARKER);

    if let Some((first, rest)) = cells.split_first() {
        line.push_str(&get_text(*first));
        if !rest.is_empty() {
            line.push(':');
        }
        for cell in rest {
            line.push(' ');
            line.push_str(&get_text(*cell));
        }
    }

    line.retain(|c| c != '\n');
    line.push('\n');
    line
}

/// Flatten a table into a title line, one line per data row and a closing
/// blank line.
pub fn table_lines(table: ElementRef) -> Result<Vec<String>, LookupError> {
    let rows = rows(table);
    let (title, rest) = rows.split_first().ok_or(ShapeError::MissingBlock {
        role: "table title row",
        found: 0,
    })?;

    let mut lines = vec![format!("{}\n", get_text(*title).replace('\n', "").trim())];
    lines.extend(
        rest.iter()
            .filter(|row| !is_header(**row))
            .map(|row| row_line(*row)),
    );
    lines.push("\n".to_string());
    Ok(lines)
}
