use super::MARKER;
use crate::html::get_text;
use scraper::ElementRef;

/// One `"  -- item\n\n"` line per `li` child; other children are ignored.
pub fn list_lines(list: ElementRef) -> Vec<String> {
    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|child| child.value().name() == "li")
        .map(|item| format!("{MARKER}{}\n\n", get_text(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::find;
    use scraper::Html;

    #[test]
    fn test_one_line_per_item() {
        let html = Html::parse_fragment(
            "<ul id='l'>\n  <li>Alpha</li>\n  stray\n  <li>Beta <em>two</em></li><span>x</span>\n  <li>Gamma</li>\n</ul>",
        );
        let lines = list_lines(find(&html, "#l").unwrap());

        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.starts_with(MARKER)));
        assert_eq!(lines[1], "  -- Beta two\n\n");
    }

    #[test]
    fn test_empty_list() {
        let html = Html::parse_fragment("<ul id='l'>\n</ul>");
        assert!(list_lines(find(&html, "#l").unwrap()).is_empty());
    }
}
