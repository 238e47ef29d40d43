//! Markdown Preview
//!
//! Renders the generated checklist summary with pulldown-cmark.
//! Task list markers (`- [x]`) become checkboxes.

use pulldown_cmark::{html::push_html, Event, Options, Parser};

/// Render markdown to HTML. Raw HTML in the source is shown as text.
pub fn to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, get_options());
    let events = transform_events(parser);
    let mut html_output = String::new();
    push_html(&mut html_output, events.into_iter());
    html_output
}

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
}

fn transform_events<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    parser
        .map(|event| match event {
            // The summary comes from the server; never inject its markup.
            Event::Html(html) | Event::InlineHtml(html) => Event::Text(html),
            other => other,
        })
        .collect()
}

/// Number of checked and total task items, e.g. for a preview caption
pub fn task_counts(text: &str) -> (usize, usize) {
    Parser::new_ext(text, get_options()).fold((0, 0), |(checked, total), event| match event {
        Event::TaskListMarker(true) => (checked + 1, total + 1),
        Event::TaskListMarker(false) => (checked, total + 1),
        _ => (checked, total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUMMARY: &str = "# The Sims 4 DLC - Checklist\n\n## Expansion Packs\n\n- [x] EP01 - Get To Work\n- [ ] EP04 - Cats & Dogs\n\n## Output\n\n-disablepacks:EP04\n";

    #[test]
    fn test_task_list_rendered_as_checkboxes() {
        let html = to_html(SUMMARY);
        assert!(html.contains("<h2>Expansion Packs</h2>"));
        assert!(html.contains(r#"type="checkbox" checked="""#));
        assert!(html.contains("EP04 - Cats &amp; Dogs"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = to_html("<script>alert(1)</script>\n");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_task_counts() {
        assert_eq!(task_counts(SUMMARY), (1, 2));
        assert_eq!(task_counts(""), (0, 0));
    }
}
