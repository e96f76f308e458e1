use scraper::node::Node;
use scraper::ElementRef;

/// Every text node beneath `element`, concatenated as-is.
pub fn get_text(element: ElementRef) -> String {
    element.text().collect()
}

/// Render an element's markup as plain text: tags are dropped and `<br>`
/// breaks the line unless the source already does.
pub fn strip_markup(element: ElementRef) -> String {
    let mut out = String::new();
    let mut pending_break = false;

    for node in element.descendants() {
        match node.value() {
            Node::Text(text) => {
                if pending_break && !text.starts_with('\n') {
                    out.push('\n');
                }
                pending_break = false;
                out.push_str(text);
            }
            Node::Element(el) if el.name() == "br" => {
                if pending_break {
                    out.push('\n');
                }
                pending_break = true;
            }
            _ => {}
        }
    }

    if pending_break {
        out.push('\n');
    }
    out
}

/// Tidy assembled description text.
///
/// Runs of three or more newlines become a single blank line, runs of spaces
/// become one space, and a space directly before a comma is removed.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0;

    for ch in text.chars() {
        if ch == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(ch);
            }
            continue;
        }
        newlines = 0;

        if ch == ' ' && out.ends_with(' ') {
            continue;
        }
        if ch == ',' && out.ends_with(' ') {
            out.pop();
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::find;
    use scraper::Html;

    #[test]
    fn test_get_text_concatenates_runs() {
        let html = Html::parse_fragment("<p id='x'>A <em>quick</em> <strong>test</strong></p>");
        let p = find(&html, "#x").unwrap();
        assert_eq!(get_text(p), "A quick test");
    }

    #[test]
    fn test_strip_markup_stat_block() {
        let html = Html::parse_fragment(
            "<p id='x'><strong>Casting Time:</strong> 1 action<br />\n<strong>Range:</strong> 60 feet<br/><strong>Duration:</strong> Instantaneous</p>",
        );
        let p = find(&html, "#x").unwrap();
        assert_eq!(
            strip_markup(p),
            "Casting Time: 1 action\nRange: 60 feet\nDuration: Instantaneous"
        );
    }

    #[test]
    fn test_strip_markup_decodes_entities() {
        let html = Html::parse_fragment("<p id='x'>Fire &amp; Ice</p>");
        let p = find(&html, "#x").unwrap();
        assert_eq!(strip_markup(p), "Fire & Ice");
    }

    #[test]
    fn test_normalize_collapses() {
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n\nb"), "a\n\nb");
        assert_eq!(normalize("Wizard   ,  Sorcerer"), "Wizard, Sorcerer");
        assert_eq!(normalize("x ,y"), "x,y");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "Level: 1st\n\n\n\n\nbody  text , more\n\n\nSpell Lists.  Wizard ,  Bard",
            " , \n\n \n\n\n ,,  ,",
            "",
            "\n\n\n",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {sample:?}");
        }
    }
}
