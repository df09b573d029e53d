use std::path::{Path, PathBuf};

/// Registry file used when `--file` is not given.
pub const STABLE_BUILDS_FILE: &str = "stable-builds.yml";

/// Resolves the registry path against the working directory.
/// Absolute paths are returned unchanged.
pub fn resolve_registry_path(cwd: &str, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        Path::new(cwd).join(file)
    }
}
