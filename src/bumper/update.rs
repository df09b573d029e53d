use crate::bumper::policy::{BumpPolicy, bump};
use crate::store::RegistryStore;
use crate::types::registry::{BuildRegistry, Channel, DEFAULT_VERSION};
use serde_yaml::Value;

/// Bumps one channel in place and returns its new version.
/// A channel with no entry is bumped from the default version.
///
/// ### Parameters
/// - `registry`: The loaded registry.
/// - `channel`: The channel to bump.
/// - `policy`: How a malformed stored version is handled.
///
pub fn update_channel(
    registry: &mut BuildRegistry,
    channel: Channel,
    policy: BumpPolicy,
) -> Result<String, String> {
    let default = Value::String(DEFAULT_VERSION.to_string());
    let current = registry.get(channel.key()).unwrap_or(&default);
    let next = bump(current, policy).map_err(|e| format!("Channel '{}': {}", channel, e))?;
    registry.set_version(channel.key(), next.clone());
    Ok(next)
}

/// Bumps `alpha` then `bravo`, stopping at the first failure.
pub fn bump_stable_channels(registry: &mut BuildRegistry, policy: BumpPolicy) -> Result<(), String> {
    for channel in Channel::STABLE {
        update_channel(registry, channel, policy)?;
    }
    Ok(())
}

/// Loads the registry, bumps the stable channels and saves the result.
/// Nothing is written when a bump fails.
pub fn run<S: RegistryStore + ?Sized>(store: &S, policy: BumpPolicy) -> Result<BuildRegistry, String> {
    let mut registry = store.load()?;
    bump_stable_channels(&mut registry, policy)?;
    store.save(&registry)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn registry(pairs: &[(&str, &str)]) -> BuildRegistry {
        pairs.iter().copied().collect()
    }

    #[test]
    fn absent_channel_starts_from_default() {
        let mut reg = BuildRegistry::new();
        let next = update_channel(&mut reg, Channel::Alpha, BumpPolicy::Strict).unwrap();
        assert_eq!(next, "1.1");
        assert_eq!(reg, registry(&[("alpha", "1.1")]));
    }

    #[test]
    fn existing_channel_is_overwritten() {
        let mut reg = registry(&[("bravo", "3.7")]);
        update_channel(&mut reg, Channel::Bravo, BumpPolicy::Strict).unwrap();
        assert_eq!(reg.get_str("bravo"), Some("3.8"));
    }

    #[test]
    fn strict_failure_names_the_channel() {
        let mut reg = registry(&[("alpha", "v1")]);
        let err = update_channel(&mut reg, Channel::Alpha, BumpPolicy::Strict).unwrap_err();
        assert!(err.starts_with("Channel 'alpha':"), "{err}");
        assert_eq!(reg.get_str("alpha"), Some("v1"));
    }

    #[test]
    fn missing_resource_initialises_both_channels() {
        let store = MemoryStore::empty();
        let result = run(&store, BumpPolicy::Strict).unwrap();
        assert_eq!(result, registry(&[("alpha", "1.1"), ("bravo", "1.1")]));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn null_document_initialises_both_channels() {
        let store = MemoryStore::with_document("~\n");
        let result = run(&store, BumpPolicy::Strict).unwrap();
        assert_eq!(result.to_string(), r#"{alpha: "1.1", bravo: "1.1"}"#);
    }

    #[test]
    fn untouched_channels_are_preserved() {
        let store = MemoryStore::with_document("alpha: '2.5'\nbravo: '0.9'\ncharlie: '9.9'\n");
        let result = run(&store, BumpPolicy::Strict).unwrap();
        assert_eq!(
            result,
            registry(&[("alpha", "2.6"), ("bravo", "0.10"), ("charlie", "9.9")])
        );
    }

    #[test]
    fn running_twice_bumps_twice() {
        let store = MemoryStore::empty();
        run(&store, BumpPolicy::Strict).unwrap();
        let second = run(&store, BumpPolicy::Strict).unwrap();
        assert_eq!(second, registry(&[("alpha", "1.2"), ("bravo", "1.2")]));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn strict_failure_writes_nothing() {
        let original = "alpha: v1\nbravo: '1.0'\n";
        let store = MemoryStore::with_document(original);
        assert!(run(&store, BumpPolicy::Strict).is_err());
        assert_eq!(store.writes(), 0);
        assert_eq!(store.document().as_deref(), Some(original));
    }

    #[test]
    fn fallback_resets_malformed_channel() {
        let store = MemoryStore::with_document("alpha: v1\nbravo: '1.0'\n");
        let result = run(&store, BumpPolicy::Fallback).unwrap();
        assert_eq!(result, registry(&[("alpha", "1.0"), ("bravo", "1.1")]));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn malformed_document_is_fatal() {
        let store = MemoryStore::with_document("alpha: [\n");
        assert!(run(&store, BumpPolicy::Fallback).is_err());
        assert_eq!(store.writes(), 0);
    }
}
