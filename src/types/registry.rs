use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Version every channel starts from when the registry has no entry for it.
pub const DEFAULT_VERSION: &str = "1.0";

/// Build channels whose minor version is bumped on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Alpha,
    Bravo,
}

impl Channel {
    pub const STABLE: [Channel; 2] = [Channel::Alpha, Channel::Bravo];

    pub fn key(&self) -> &'static str {
        match self {
            Channel::Alpha => "alpha",
            Channel::Bravo => "bravo",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Channel name -> version mapping as stored in `stable-builds.yml`.
///
/// Values are kept as raw YAML so entries this tool never touches are written
/// back exactly as they were read. Keys are ordered, which gives the file a
/// stable layout from one run to the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildRegistry {
    entries: BTreeMap<String, Value>,
}

impl BuildRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns the entry as text when it is stored as a YAML string.
    #[allow(dead_code)]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|v| v.as_str())
    }

    pub fn set_version(&mut self, key: &str, version: impl Into<String>) {
        self.entries
            .insert(key.to_string(), Value::String(version.into()));
    }

    #[allow(dead_code)]
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for BuildRegistry {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut registry = BuildRegistry::new();
        for (k, v) in iter {
            let key: String = k.into();
            registry.set_version(&key, v);
        }
        registry
    }
}

/// One-line rendering used by the confirmation message: `{alpha: "1.1", bravo: "1.1"}`.
impl fmt::Display for BuildRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: ", key)?;
            write_inline(f, value)?;
        }
        f.write_str("}")
    }
}

fn write_inline(f: &mut fmt::Formatter<'_>, value: &Value) -> fmt::Result {
    match value {
        Value::Null => f.write_str("null"),
        Value::Bool(b) => write!(f, "{}", b),
        Value::Number(n) => write!(f, "{}", n),
        Value::String(s) => write!(f, "{:?}", s),
        Value::Sequence(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_inline(f, item)?;
            }
            f.write_str("]")
        }
        Value::Mapping(map) => {
            f.write_str("{")?;
            for (i, (k, v)) in map.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write_inline(f, k)?;
                f.write_str(": ")?;
                write_inline(f, v)?;
            }
            f.write_str("}")
        }
        Value::Tagged(tagged) => {
            write!(f, "{} ", tagged.tag)?;
            write_inline(f, &tagged.value)
        }
    }
}
