use crate::store::RegistryStore;
use crate::types::registry::BuildRegistry;
use crate::utils::fs as ufs;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Registry persisted as a top-level YAML mapping, e.g. `stable-builds.yml`.
#[derive(Debug, Clone)]
pub struct YamlFileStore {
    path: PathBuf,
}

impl YamlFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        YamlFileStore { path: path.into() }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RegistryStore for YamlFileStore {
    fn label(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ufs::to_unix_string(&self.path))
    }

    fn load(&self) -> Result<BuildRegistry, String> {
        match ufs::read_optional(&self.path)? {
            Some(text) => parse_registry(&text)
                .map_err(|e| format!("Invalid YAML in {}: {}", self.path.to_string_lossy(), e)),
            None => Ok(BuildRegistry::new()),
        }
    }

    fn save(&self, registry: &BuildRegistry) -> Result<(), String> {
        let text = serde_yaml::to_string(registry).map_err(|e| {
            format!(
                "Failed to serialize registry for {}: {}",
                self.path.to_string_lossy(),
                e
            )
        })?;
        ufs::write_text(&self.path, &text)
    }
}

/// Parses registry text. Empty and null documents give an empty registry.
pub fn parse_registry(text: &str) -> Result<BuildRegistry, String> {
    if is_blank_document(text) {
        return Ok(BuildRegistry::new());
    }
    let doc: Value = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
    match doc {
        Value::Null => Ok(BuildRegistry::new()),
        Value::Mapping(_) => serde_yaml::from_value(doc).map_err(|e| e.to_string()),
        _ => Err("top-level document must be a mapping of channel to version".to_string()),
    }
}

// The YAML parser rejects a stream with no document in it.
fn is_blank_document(text: &str) -> bool {
    text.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
