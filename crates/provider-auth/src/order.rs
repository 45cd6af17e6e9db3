//! Candidate order for profile-backed resolution.

use crate::profiles::AuthProfileSource;

/// Build the ordered, deduplicated candidate list for a provider.
///
/// An explicit profile id short-circuits to exactly that id; explicit
/// requests never fall back. Otherwise the order is the preferred profile
/// (when it actually exists for this provider), the provider's profiles in
/// store order, then configured order hints. Later duplicates are dropped;
/// first occurrence keeps its position. Pure function of its inputs.
pub fn resolve_profile_order(
    store: &dyn AuthProfileSource,
    provider: &str,
    explicit_profile_id: Option<&str>,
    preferred_profile: Option<&str>,
    configured_order: &[String],
) -> Vec<String> {
    if let Some(explicit) = explicit_profile_id {
        return vec![explicit.to_string()];
    }

    let store_profiles = store.profiles_for_provider(provider);
    let mut order: Vec<String> = Vec::new();

    if let Some(preferred) = preferred_profile
        && store_profiles.iter().any(|id| id == preferred)
    {
        order.push(preferred.to_string());
    }
    order.extend(store_profiles);
    order.extend(configured_order.iter().cloned());

    dedupe_profile_ids(order)
}

/// Drop later duplicates, preserving first-occurrence positions.
fn dedupe_profile_ids(order: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    order.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::profiles::{AuthProfileStore, Credential, ProfileRecord},
        secrecy::Secret,
    };

    fn store(records: &[(&str, &str)]) -> AuthProfileStore {
        AuthProfileStore::with_records(
            "/tmp/auth-profiles.json",
            records
                .iter()
                .map(|(id, provider)| ProfileRecord {
                    id: (*id).into(),
                    provider: (*provider).into(),
                    credential: Credential::ApiKey {
                        key: Secret::new("k".into()),
                    },
                })
                .collect(),
        )
    }

    #[test]
    fn explicit_profile_short_circuits() {
        let store = store(&[("openai:a", "openai"), ("openai:b", "openai")]);
        let order = resolve_profile_order(
            &store,
            "openai",
            Some("openai:b"),
            Some("openai:a"),
            &["openai:c".into()],
        );
        assert_eq!(order, vec!["openai:b".to_string()]);
    }

    #[test]
    fn preferred_then_store_then_configured() {
        let store = store(&[("openai:a", "openai"), ("openai:b", "openai")]);
        let order = resolve_profile_order(&store, "openai", None, Some("openai:b"), &[
            "openai:cfg".into(),
        ]);
        assert_eq!(order, vec![
            "openai:b".to_string(),
            "openai:a".to_string(),
            "openai:cfg".to_string()
        ]);
    }

    #[test]
    fn preferred_for_another_provider_is_ignored() {
        let store = store(&[("openai:a", "openai"), ("xai:a", "xai")]);
        let order = resolve_profile_order(&store, "openai", None, Some("xai:a"), &[]);
        assert_eq!(order, vec!["openai:a".to_string()]);
    }

    #[test]
    fn dedupes_keeping_first_occurrence() {
        let store = store(&[("openai:a", "openai"), ("openai:b", "openai")]);
        let order = resolve_profile_order(&store, "openai", None, Some("openai:b"), &[
            "openai:a".into(),
            "openai:b".into(),
            "openai:cfg".into(),
        ]);
        assert_eq!(order, vec![
            "openai:b".to_string(),
            "openai:a".to_string(),
            "openai:cfg".to_string()
        ]);
    }

    #[test]
    fn empty_inputs_give_empty_order() {
        let store = store(&[]);
        assert!(resolve_profile_order(&store, "openai", None, None, &[]).is_empty());
    }
}
