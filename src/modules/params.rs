//! Parameter accessors for untyped rule parameters
//!
//! Rule parameters arrive as free-form JSON values. Modules never inspect
//! those values directly; they go through the helpers below, which coerce a
//! named parameter into the shape the module needs.
//!
//! None of these helpers fail. A missing parameter and a parameter of the
//! wrong shape both come back as the empty value for the requested type, so
//! a module has to raise its own [`ValidationError`] from `check` when a
//! mandatory parameter turns out empty.
//!
//! [`ValidationError`]: crate::modules::error::ValidationError

use serde_json::Value;
use std::collections::HashMap;

/// Untyped parameters supplied by a rule
pub type ModuleParams = HashMap<String, Value>;

/// Return the named parameter as a string.
///
/// Absent parameters and non-string values both produce an empty string.
pub fn string_param(params: &ModuleParams, name: &str) -> String {
    match params.get(name) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

/// Return the named parameter as a list of strings.
///
/// A single string is promoted to a one-element list so rule authors can
/// write `target: /tmp` where a list is expected. A list is returned in its
/// original order, but only when every element is a string; anything else
/// produces an empty list.
pub fn array_param(params: &ModuleParams, name: &str) -> Vec<String> {
    match params.get(name) {
        Some(Value::String(s)) => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(String::from))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Return the named parameter as a boolean, if it reads as one.
///
/// Accepts JSON booleans and the strings `true`, `yes`, `false` and `no`
/// in any case.
pub fn bool_param(params: &ModuleParams, name: &str) -> Option<bool> {
    match params.get(name)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.to_ascii_lowercase().as_str() {
            "true" | "yes" => Some(true),
            "false" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Whether the parameter was supplied at all, whatever its shape
pub fn has_param(params: &ModuleParams, name: &str) -> bool {
    params.contains_key(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(name: &str, value: Value) -> ModuleParams {
        let mut map = HashMap::new();
        map.insert(name.to_string(), value);
        map
    }

    #[test]
    fn test_string_param_present() {
        let p = params("path", json!("/etc/motd"));
        assert_eq!(string_param(&p, "path"), "/etc/motd");
    }

    #[test]
    fn test_string_param_missing_or_mismatched() {
        assert_eq!(string_param(&HashMap::new(), "path"), "");
        assert_eq!(string_param(&params("path", json!(42)), "path"), "");
        assert_eq!(string_param(&params("path", json!(["a"])), "path"), "");
        assert_eq!(string_param(&params("path", Value::Null), "path"), "");
    }

    #[test]
    fn test_array_param_promotes_string() {
        let p = params("target", json!("/tmp/one"));
        assert_eq!(array_param(&p, "target"), vec!["/tmp/one".to_string()]);
    }

    #[test]
    fn test_array_param_preserves_order() {
        let p = params("target", json!(["c", "a", "b"]));
        assert_eq!(array_param(&p, "target"), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_array_param_rejects_mixed_lists() {
        let p = params("target", json!(["a", 1, "b"]));
        assert!(array_param(&p, "target").is_empty());
    }

    #[test]
    fn test_array_param_other_shapes() {
        assert!(array_param(&HashMap::new(), "target").is_empty());
        assert!(array_param(&params("target", json!(true)), "target").is_empty());
        assert!(array_param(&params("target", json!({"a": "b"})), "target").is_empty());
    }

    #[test]
    fn test_bool_param() {
        assert_eq!(bool_param(&params("force", json!(true)), "force"), Some(true));
        assert_eq!(bool_param(&params("force", json!("Yes")), "force"), Some(true));
        assert_eq!(bool_param(&params("force", json!("no")), "force"), Some(false));
        assert_eq!(bool_param(&params("force", json!("maybe")), "force"), None);
        assert_eq!(bool_param(&params("force", json!(1)), "force"), None);
        assert_eq!(bool_param(&HashMap::new(), "force"), None);
    }

    #[test]
    fn test_has_param_distinguishes_presence() {
        let p = params("mode", json!(644));
        assert!(has_param(&p, "mode"));
        assert_eq!(string_param(&p, "mode"), "");
        assert!(!has_param(&p, "owner"));
    }
}
