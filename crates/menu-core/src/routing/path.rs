//! Path normalization used for active-item matching.
//!
//! Only the path component takes part in the comparison: scheme, host,
//! query and fragment are dropped, and a trailing slash is ignored except
//! for the root path. Relative paths are otherwise compared as written.

use menu_shared::constants::ROOT_PATH;
use url::Url;

pub fn normalize_path(value: Option<&str>) -> String {
    let value = match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => return ROOT_PATH.to_string(),
    };

    // Only absolute URLs go through `Url`; relative paths are never resolved.
    let path = match Url::parse(value) {
        Ok(url) if !url.cannot_be_a_base() => url.path().to_string(),
        _ => value
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .to_string(),
    };

    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH.to_string()
    } else {
        trimmed.to_string()
    }
}

pub fn paths_match(left: &str, right: &str) -> bool {
    normalize_path(Some(left)) == normalize_path(Some(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_ignored() {
        assert_eq!(normalize_path(Some("/docs/api/")), "/docs/api");
        assert!(paths_match("/docs/api/", "/docs/api"));
    }

    #[test]
    fn test_root_is_never_stripped() {
        assert_eq!(normalize_path(Some("/")), "/");
        assert_eq!(normalize_path(Some("//")), "/");
    }

    #[test]
    fn test_missing_path_is_root() {
        assert_eq!(normalize_path(None), "/");
        assert_eq!(normalize_path(Some("   ")), "/");
    }

    #[test]
    fn test_query_and_fragment_dropped() {
        assert_eq!(normalize_path(Some("/pricing/?plan=pro#faq")), "/pricing");
        assert_eq!(normalize_path(Some("#")), "/");
    }

    #[test]
    fn test_absolute_url_keeps_only_path() {
        assert_eq!(normalize_path(Some("https://example.com/docs/")), "/docs");
    }

    #[test]
    fn test_distinct_paths_do_not_match() {
        assert!(!paths_match("/docs/", "/docs/api/"));
    }

    #[test]
    fn test_dot_segments_are_not_resolved() {
        assert_eq!(normalize_path(Some("/docs/../pricing/")), "/docs/../pricing");
        assert!(!paths_match("/docs/../pricing/", "/pricing"));
    }

    #[test]
    fn test_relative_path_is_not_rooted() {
        assert_eq!(normalize_path(Some("docs/")), "docs");
        assert!(!paths_match("docs/", "/docs"));
    }

    #[test]
    fn test_relative_path_is_kept_verbatim() {
        assert_eq!(normalize_path(Some("/café/")), "/café");
        assert!(!paths_match("/café/", "/caf%C3%A9"));
        assert_eq!(normalize_path(Some("\\docs\\")), "\\docs\\");
        assert!(!paths_match("\\docs\\", "/docs"));
    }
}
