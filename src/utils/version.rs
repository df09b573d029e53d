use crate::utils::signature::get_signature;

/// Returns the version baked in at compile time.
pub fn get_version() -> String {
    option_env!("CARGO_PKG_VERSION").unwrap_or("0.0.0").to_string()
}

pub fn get_version_with_signature() -> String {
    get_signature(&get_version())
}
