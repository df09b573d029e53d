use crate::types::registry::DEFAULT_VERSION;
use crate::utils::logger::{LogLevel, Logger};
use clap::ValueEnum;
use serde_yaml::Value;

/// How a stored version that is not `<major>.<minor>` is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BumpPolicy {
    /// Abort the run; nothing is written.
    #[default]
    #[value(name = "fail")]
    Strict,
    /// Replace the value with the default version, without bumping it.
    #[value(name = "reset")]
    Fallback,
}

/// Increments the minor part of a `<major>.<minor>` version.
///
/// ### Parameters
/// - `value`: The version as read from the registry.
/// - `policy`: What to do when `value` is not a valid version.
///
pub fn bump(value: &Value, policy: BumpPolicy) -> Result<String, String> {
    match policy {
        BumpPolicy::Strict => bump_strict(value),
        BumpPolicy::Fallback => Ok(bump_or_reset(value)),
    }
}

fn bump_strict(value: &Value) -> Result<String, String> {
    let text = value.as_str().ok_or_else(|| {
        format!(
            "Invalid version: expected a string, found {}",
            describe(value)
        )
    })?;
    let (major, minor) = parse_version(text)
        .ok_or_else(|| format!("Invalid version {:?} (expected <major>.<minor>)", text))?;
    let next = minor
        .checked_add(1)
        .ok_or_else(|| format!("Cannot bump {:?}: minor version overflows", text))?;
    Ok(format!("{}.{}", major, next))
}

fn bump_or_reset(value: &Value) -> String {
    let bumped = coerce_text(value).and_then(|text| {
        let (major, minor) = parse_version(&text)?;
        Some(format!("{}.{}", major, minor.checked_add(1)?))
    });

    match bumped {
        Some(version) => version,
        None => {
            Logger::new().log_message(
                LogLevel::Warning,
                &format!(
                    "Unparseable version {}, resetting to {}",
                    describe(value),
                    DEFAULT_VERSION
                ),
            );
            DEFAULT_VERSION.to_string()
        }
    }
}

/// Splits `text` into exactly two unsigned decimal parts.
pub fn parse_version(text: &str) -> Option<(u64, u64)> {
    let (major, minor) = text.split_once('.')?;
    Some((parse_part(major)?, parse_part(minor)?))
}

fn parse_part(part: &str) -> Option<u64> {
    // `u64::from_str` accepts a leading '+', versions don't
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse::<u64>().ok()
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => coerce_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {}", b),
        Value::Number(n) => format!("number {}", n),
        Value::String(s) => format!("{:?}", s),
        Value::Sequence(_) => "a list".to_string(),
        Value::Mapping(_) => "a mapping".to_string(),
        Value::Tagged(tagged) => format!("tagged value {}", tagged.tag),
    }
}
