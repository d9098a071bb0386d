/*!
 * Serde utilities for hand-edited specification files.
 *
 * `argument_specs.yml` is maintained partly by hand, so boolean flags show up
 * in several spellings. These helpers accept them all consistently.
 */

use serde::{Deserialize, Deserializer};

/// Deserialize a boolean that may be written as a bool, a string or a number.
///
/// All of these are accepted:
///
/// ```yaml
/// required: true
/// required: "true"
/// required: yes       # YAML 1.1 style, a plain string for serde_yaml
/// required: 1
/// required: null      # false
/// # required omitted  # false (with #[serde(default)])
/// ```
///
/// # Usage with serde
///
/// ```rust
/// use serde::Deserialize;
/// use argspecs::utils::serde::deserialize_flexible_bool;
///
/// #[derive(Deserialize)]
/// struct Entry {
///     #[serde(default, deserialize_with = "deserialize_flexible_bool")]
///     required: bool,
/// }
/// ```
pub fn deserialize_flexible_bool<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_yaml::Value> = Option::deserialize(deserializer)?;
    match value {
        None | Some(serde_yaml::Value::Null) => Ok(false),
        Some(serde_yaml::Value::Bool(b)) => Ok(b),
        Some(serde_yaml::Value::Number(n)) => match n.as_i64() {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(D::Error::custom(format!("Invalid boolean value: {n}"))),
        },
        Some(serde_yaml::Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "y" => Ok(true),
            "false" | "no" | "off" | "n" | "" => Ok(false),
            _ => Err(D::Error::custom(format!("Cannot parse '{s}' as boolean"))),
        },
        Some(other) => Err(D::Error::custom(format!(
            "Expected boolean value, found: {other:?}"
        ))),
    }
}

/// Used with `skip_serializing_if` on flags that default to false
pub fn is_false(value: &bool) -> bool {
    !*value
}
