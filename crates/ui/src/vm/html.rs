use std::collections::HashSet;

/// Strip supplier-provided text down to inline formatting.
///
/// Questions, options and explanations are rendered as HTML, so anything the
/// model sends goes through this allowlist first.
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "b", "br", "code", "em", "i", "mark", "small", "span", "strong", "sub", "sup", "u",
    ]
    .into_iter()
    .collect();

    ammonia::Builder::new()
        .tags(tags)
        .clean(html)
        .to_string()
}
