//! Decisions behind the navigation handlers, kept free of DOM types.

/// Whether the navbar should carry the `scrolled` class.
pub fn is_scrolled(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

/// Selector for an in-page link's target, or `None` for a bare `#` (or
/// anything else `querySelector` would reject).
pub fn anchor_selector(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    let valid = !id.is_empty()
        && !id.starts_with(|c: char| c.is_ascii_digit())
        && id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_');
    valid.then_some(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_only_past_offset() {
        assert!(!is_scrolled(0.0, 100.0));
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
    }

    #[test]
    fn anchor_selectors() {
        assert_eq!(anchor_selector("#about"), Some("#about"));
        assert_eq!(anchor_selector("#research_2"), Some("#research_2"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("#1st"), None);
        assert_eq!(anchor_selector("#a b"), None);
        assert_eq!(anchor_selector("about"), None);
    }
}
