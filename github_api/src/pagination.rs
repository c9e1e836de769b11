//! `Link` header parsing for GitHub's paginated list endpoints.

/// Extracts the `rel="next"` target from a `Link` header value, if any.
///
/// GitHub formats the header as a comma-separated list of entries like
/// `<https://api.github.com/...?page=2>; rel="next"`.
pub(crate) fn next_page(link_header: &str) -> Option<String> {
    for entry in link_header.split(',') {
        let mut sections = entry.split(';');
        let target = sections.next()?.trim();
        if !(target.starts_with('<') && target.ends_with('>')) {
            continue;
        }
        if sections.any(|s| matches!(s.trim(), r#"rel="next""# | "rel=next")) {
            return Some(target[1..target.len() - 1].to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::next_page;

    #[test]
    fn finds_next_among_multiple_rels() {
        let header = r#"<https://api.github.com/orgs/octo/repos?page=2>; rel="next", <https://api.github.com/orgs/octo/repos?page=5>; rel="last""#;
        assert_eq!(
            next_page(header).as_deref(),
            Some("https://api.github.com/orgs/octo/repos?page=2")
        );
    }

    #[test]
    fn last_page_has_no_next() {
        let header = r#"<https://api.github.com/orgs/octo/repos?page=1>; rel="first", <https://api.github.com/orgs/octo/repos?page=4>; rel="prev""#;
        assert_eq!(next_page(header), None);
    }

    #[test]
    fn accepts_unquoted_rel() {
        let header = "<https://example.com/items?page=3>; rel=next";
        assert_eq!(next_page(header).as_deref(), Some("https://example.com/items?page=3"));
    }

    #[test]
    fn empty_or_garbage_header() {
        assert_eq!(next_page(""), None);
        assert_eq!(next_page("not a link header"), None);
    }
}
