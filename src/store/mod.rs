use crate::types::registry::BuildRegistry;

#[cfg(test)]
pub mod memory;
pub mod yaml;

/// Backing storage for the build registry.
///
/// `load` is called once at the start of a run and `save` once at the end,
/// with the whole registry each time.
pub trait RegistryStore {
    /// Short name used in the confirmation message.
    fn label(&self) -> String;

    /// Reads the registry. A missing or empty resource is an empty registry.
    fn load(&self) -> Result<BuildRegistry, String>;

    /// Replaces the stored registry with `registry`.
    fn save(&self, registry: &BuildRegistry) -> Result<(), String>;
}
