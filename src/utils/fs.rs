use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads a text file, returning `None` when it does not exist.
pub fn read_optional(path: &Path) -> Result<Option<String>, String> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(format!("Failed to read {}: {}", path.to_string_lossy(), e)),
    }
}

/// Replaces the whole file content with `text`.
pub fn write_text(path: &Path, text: &str) -> Result<(), String> {
    fs::write(path, text).map_err(|e| format!("Failed to write {}: {}", path.to_string_lossy(), e))
}

pub fn to_unix_string<P: AsRef<Path>>(p: P) -> String {
    let s = p.as_ref().to_string_lossy().into_owned();
    s.replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_optional_missing_is_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_optional(&dir.path().join("nope.yml")).unwrap(), None);
    }

    #[test]
    fn read_optional_directory_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(read_optional(dir.path()).is_err());
    }

    #[test]
    fn write_then_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.yml");
        write_text(&path, "alpha: '1.1'\n").unwrap();
        write_text(&path, "bravo: '1.1'\n").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("bravo: '1.1'\n"));
    }

    #[test]
    fn unix_string_uses_forward_slashes() {
        assert_eq!(to_unix_string("ci\\stable-builds.yml"), "ci/stable-builds.yml");
    }
}
