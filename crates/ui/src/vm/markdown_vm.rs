use std::collections::HashSet;

/// Render trusted-but-configurable markdown (the intro essay) to safe HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_SMART_PUNCTUATION);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "br", "em", "strong", "b", "i", "blockquote", "ul", "ol", "li", "h2", "h3", "h4",
        "hr", "del",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_quotes_and_emphasis() {
        let html = markdown_to_html("> a quote\n\n**bold** and *soft*");
        assert!(html.contains("<blockquote>"), "{html}");
        assert!(html.contains("<strong>bold</strong>"), "{html}");
        assert!(html.contains("<em>soft</em>"), "{html}");
    }

    #[test]
    fn strips_scripts_and_links() {
        let html = markdown_to_html("hi <script>alert(1)</script> [x](https://example.com)");
        assert!(!html.contains("<script"), "{html}");
        assert!(!html.contains("<a"), "{html}");
        assert!(html.contains('x'), "{html}");
    }
}
