use proptest::prelude::*;
use proptest::strategy::Just;

/// Strategy for generating valid Ansible variable names
pub fn variable_name_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,30}".prop_filter("YAML keywords are not string keys", |name| {
        !matches!(name.as_str(), "true" | "false" | "null")
    })
}

/// Strategy for generating optional descriptions, including characters that
/// are special inside Markdown tables
pub fn description_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9 .,!?|\n`-]{0,80}")
}

/// Strategy for generating scalar default values as YAML text
pub fn default_value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("30".to_string()),
        Just("true".to_string()),
        Just("\"a | b\"".to_string()),
        Just("[1, 2, 3]".to_string()),
        Just("{nested: {key: value}}".to_string()),
        Just("null".to_string()),
        "[a-z]{1,12}",
    ]
}

/// Strategy for a list of distinct variables with required flags
pub fn variables_strategy() -> impl Strategy<Value = Vec<(String, bool, String)>> {
    prop::collection::btree_map(
        variable_name_strategy(),
        (any::<bool>(), default_value_strategy()),
        0..8,
    )
    .prop_map(|map| {
        map.into_iter()
            .map(|(name, (required, default))| (name, required, default))
            .collect()
    })
}

/// Free text placed around the managed regions of a README
pub fn surrounding_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 #|\n-]{0,120}"
}
