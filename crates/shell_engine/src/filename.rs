/// Derives a destination file name from the trailing path segment of `url`.
///
/// Query and fragment are stripped first; path characters the filesystem
/// forbids are replaced; an empty result falls back to `"download"`.
pub fn file_name_from_url(url: &str) -> String {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let without_query = without_fragment.split('?').next().unwrap_or(without_fragment);
    let segment = without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or("");

    let sanitized = sanitize(segment);
    if sanitized.is_empty() {
        "download".to_string()
    } else {
        sanitized
    }
}

fn sanitize(input: &str) -> String {
    let cleaned: String = input
        .chars()
        .map(|c| if is_forbidden(c) { '_' } else { c })
        .collect();
    cleaned.trim_matches(&['_', ' ', '.'][..]).to_string()
}

fn is_forbidden(c: char) -> bool {
    matches!(c,
        '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' | '\0'..='\u{1F}'
    )
}
