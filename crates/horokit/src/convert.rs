//! HTML flattening utilities

use crate::extract::ContentItem;

/// Flatten content items into plain display text.
///
/// Keeps markup-bearing items in their original order (paragraphs in
/// reading order), joins them with a blank line, then strips the tags.
/// Returns an empty string when no item carries markup.
pub fn items_to_text(items: &[ContentItem]) -> String {
    let fragments: Vec<&str> = items
        .iter()
        .filter(|item| item.is_html())
        .filter_map(|item| item.html.as_deref())
        .collect();

    strip_tags(&fragments.join("\n\n")).trim().to_string()
}

/// Strip markup tags from a string, decoding HTML entities.
///
/// Tag boundaries collapse without inserting whitespace, so text split
/// across inline tags stays contiguous and the blank-line separators
/// between fragments survive untouched.
pub fn strip_tags(html: &str) -> String {
    let mut output = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '<' {
            // Consume the tag
            for next in chars.by_ref() {
                if next == '>' {
                    break;
                }
            }
        } else {
            output.push(decode_entity(c, &mut chars));
        }
    }

    output
}

/// Decode HTML entity starting from ampersand
fn decode_entity(c: char, chars: &mut std::iter::Peekable<std::str::Chars>) -> char {
    if c != '&' {
        return c;
    }

    let mut entity = String::new();
    while let Some(&next) = chars.peek() {
        if next == ';' {
            chars.next();
            break;
        }
        if next.is_whitespace() || entity.len() > 10 {
            // Not a valid entity
            return '&';
        }
        entity.push(chars.next().unwrap());
    }

    match entity.as_str() {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "#39" => '\'',
        "nbsp" => ' ',
        "mdash" => '—',
        "ndash" => '–',
        "laquo" => '«',
        "raquo" => '»',
        "copy" => '©',
        "reg" => '®',
        _ => {
            // Check for numeric entities
            if let Some(num_str) = entity.strip_prefix('#') {
                if let Some(stripped) = num_str.strip_prefix('x') {
                    // Hex entity
                    if let Ok(code) = u32::from_str_radix(stripped, 16) {
                        if let Some(ch) = char::from_u32(code) {
                            return ch;
                        }
                    }
                } else if let Ok(code) = num_str.parse::<u32>() {
                    if let Some(ch) = char::from_u32(code) {
                        return ch;
                    }
                }
            }
            // Unknown entity - return original
            '&'
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html_item(html: &str) -> ContentItem {
        ContentItem {
            kind: "html".to_string(),
            html: Some(html.to_string()),
        }
    }

    fn other_item(kind: &str) -> ContentItem {
        ContentItem {
            kind: kind.to_string(),
            html: None,
        }
    }

    #[test]
    fn test_strip_tags_simple() {
        assert_eq!(strip_tags("<p>Hello</p>"), "Hello");
        assert_eq!(strip_tags("plain"), "plain");
        assert_eq!(strip_tags(""), "");
    }

    #[test]
    fn test_strip_tags_no_inserted_whitespace() {
        assert_eq!(strip_tags("<p>A<b>B</b>C</p>"), "ABC");
        assert_eq!(strip_tags("<p>A</p>\n\n<p>B</p>"), "A\n\nB");
    }

    #[test]
    fn test_strip_tags_attributes() {
        assert_eq!(
            strip_tags(r#"<a href="https://example.com" class="x">link</a>"#),
            "link"
        );
    }

    #[test]
    fn test_entity_decoding() {
        assert_eq!(strip_tags("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(strip_tags("&laquo;да&raquo;"), "«да»");
        assert_eq!(strip_tags("&#1055;"), "П");
        assert_eq!(strip_tags("&#x41;"), "A");
        assert_eq!(strip_tags("5 &lt; 6 &gt; 4"), "5 < 6 > 4");
    }

    #[test]
    fn test_unknown_entity_kept() {
        assert_eq!(strip_tags("&bogus;x"), "&x");
        assert_eq!(strip_tags("a & b"), "a & b");
    }

    #[test]
    fn test_items_to_text_joins_in_order() {
        let items = vec![html_item("<p>A</p>"), html_item("<p>B</p>")];
        assert_eq!(items_to_text(&items), "A\n\nB");
    }

    #[test]
    fn test_items_to_text_filters_non_html() {
        let items = vec![
            html_item("<p>A</p>"),
            other_item("ad"),
            html_item("<p>B</p>"),
            other_item("widget"),
        ];
        assert_eq!(items_to_text(&items), "A\n\nB");
    }

    #[test]
    fn test_items_to_text_empty_cases() {
        assert_eq!(items_to_text(&[]), "");
        assert_eq!(items_to_text(&[other_item("ad")]), "");
        assert_eq!(items_to_text(&[html_item("   ")]), "");
    }

    #[test]
    fn test_items_to_text_trims_edges() {
        let items = vec![html_item("<p>  A  </p>")];
        assert_eq!(items_to_text(&items), "A");
    }

    #[test]
    fn test_items_to_text_idempotent_over_input() {
        let items = vec![html_item("<p>Сегодня &mdash; хороший день.</p>")];
        let first = items_to_text(&items);
        let second = items_to_text(&items);
        assert_eq!(first, second);
        assert_eq!(first, "Сегодня — хороший день.");
    }
}
