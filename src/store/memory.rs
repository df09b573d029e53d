use crate::store::RegistryStore;
use crate::store::yaml::parse_registry;
use crate::types::registry::BuildRegistry;
use std::cell::{Cell, RefCell};

/// In-memory store holding the registry as YAML text, as a file would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: RefCell<Option<String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    /// A store with no document, like a missing file.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_document(text: &str) -> Self {
        MemoryStore {
            document: RefCell::new(Some(text.to_string())),
            writes: Cell::new(0),
        }
    }

    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl RegistryStore for MemoryStore {
    fn label(&self) -> String {
        "memory".to_string()
    }

    fn load(&self) -> Result<BuildRegistry, String> {
        match self.document.borrow().as_deref() {
            Some(text) => parse_registry(text),
            None => Ok(BuildRegistry::new()),
        }
    }

    fn save(&self, registry: &BuildRegistry) -> Result<(), String> {
        let text = serde_yaml::to_string(registry).map_err(|e| e.to_string())?;
        *self.document.borrow_mut() = Some(text);
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
