//! Raw secret input normalization.
//!
//! Values arriving from env vars, config fields, or store records are
//! trimmed; empty or whitespace-only input counts as absent everywhere.

/// Trim a raw secret string; `None` if nothing remains.
pub fn normalize_secret(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// [`normalize_secret`] lifted over an optional input.
pub fn normalize_optional_secret(raw: Option<&str>) -> Option<String> {
    raw.and_then(normalize_secret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_secret("  sk-live-1\n"), Some("sk-live-1".into()));
    }

    #[test]
    fn whitespace_only_is_absent() {
        assert_eq!(normalize_secret("   "), None);
        assert_eq!(normalize_secret(""), None);
    }

    #[test]
    fn optional_passthrough() {
        assert_eq!(normalize_optional_secret(None), None);
        assert_eq!(normalize_optional_secret(Some(" \t ")), None);
        assert_eq!(normalize_optional_secret(Some("k")), Some("k".into()));
    }
}
