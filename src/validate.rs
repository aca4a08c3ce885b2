/// Suffix heuristic for URLs that likely serve Markdown. Case-sensitive and
/// purely syntactic; a matching URL may still serve something else entirely.
pub fn is_likely_markdown(url: &str) -> bool {
    url.ends_with(".md") || url.ends_with(".markdown")
}

#[test]
fn test_accepts_markdown_suffixes() {
    assert!(is_likely_markdown("https://example.com/README.md"));
    assert!(is_likely_markdown("https://example.com/docs.markdown"));
    assert!(is_likely_markdown(".md"));
}

#[test]
fn test_rejects_everything_else() {
    assert!(!is_likely_markdown(""));
    assert!(!is_likely_markdown("https://example.com/README"));
    assert!(!is_likely_markdown("https://example.com/README.md.html"));
    assert!(!is_likely_markdown("https://example.com/md"));
}

#[test]
fn test_suffix_is_case_sensitive() {
    assert!(!is_likely_markdown("https://example.com/README.MD"));
    assert!(!is_likely_markdown("https://example.com/docs.Markdown"));
}
