//! Provider id normalization.
//!
//! Several raw spellings fold to one canonical id ("Z-AI", "z-ai", "zai" are
//! the same vendor). Comparison sites normalize both sides.

/// Alternate spellings of the same vendor. Distinct providers (e.g.
/// "openai" vs "openai-codex") are never folded together.
const PROVIDER_SYNONYMS: &[(&str, &str)] = &[
    ("z-ai", "zai"),
    ("x-ai", "xai"),
    ("hugging-face", "huggingface"),
    ("open-router", "openrouter"),
];

/// Canonical lowercase id for a raw provider spelling.
///
/// Unknown ids pass through trimmed and lowercased.
pub fn normalize_provider_id(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    for (synonym, canonical) in PROVIDER_SYNONYMS {
        if lowered == *synonym {
            return (*canonical).to_string();
        }
    }
    lowered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_whitespace() {
        assert_eq!(normalize_provider_id("  OpenAI "), "openai");
    }

    #[test]
    fn folds_synonyms() {
        assert_eq!(normalize_provider_id("Z-AI"), "zai");
        assert_eq!(normalize_provider_id("x-ai"), "xai");
    }

    #[test]
    fn keeps_distinct_providers_apart() {
        assert_eq!(normalize_provider_id("openai-codex"), "openai-codex");
        assert_eq!(normalize_provider_id("volcengine-plan"), "volcengine-plan");
    }
}
