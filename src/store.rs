//! The in-memory config tree and the dotted-path accessor protocol.
//!
//! Reads walk the section chain without side effects: an absent, null, or
//! non-section intermediate entry means "section not found" and the caller's
//! default comes back. Writes auto-create missing sections on the way down.
//! Removes never create anything.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::coerce;
use crate::error::NkconfError;
use crate::path::DottedPath;

/// A section of the config tree. `serde_json`'s map keeps keys sorted.
pub type Section = Map<String, Value>;

/// Owns a [`Section`] tree and exposes dotted-path reads and writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Store {
    root: Section,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_section(root: Section) -> Self {
        Self { root }
    }

    pub fn tree(&self) -> &Section {
        &self.root
    }

    pub fn into_tree(self) -> Section {
        self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Swap in a whole new tree, returning the previous one.
    pub fn replace(&mut self, root: Section) -> Section {
        std::mem::replace(&mut self.root, root)
    }

    /// Look up `key` without a default.
    ///
    /// `Ok(None)` means the sections exist but the leaf does not. A present
    /// leaf holding `null` is `Ok(Some(&Value::Null))`.
    pub fn try_get(&self, key: &str) -> Result<Option<&Value>, NkconfError> {
        let path = DottedPath::parse(key)?;
        let section = walk(&self.root, &path).ok_or_else(|| NkconfError::SectionNotFound {
            key: key.into(),
        })?;
        Ok(section.get(path.leaf()))
    }

    /// Value at `key`, or `default` when the leaf or any section above it is
    /// missing.
    pub fn get(&self, key: &str, default: impl Into<Value>) -> Value {
        match self.try_get(key) {
            Ok(Some(value)) => value.clone(),
            Ok(None) => default.into(),
            Err(err) => {
                tracing::error!("[Config] {err}");
                default.into()
            }
        }
    }

    /// Deserialize the value at `key` into `T`. Missing keys yield `Ok(None)`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, NkconfError> {
        let Some(value) = self.try_get(key)? else {
            return Ok(None);
        };
        serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| NkconfError::Conversion {
                key: key.into(),
                target: std::any::type_name::<T>(),
                reason: e.to_string(),
            })
    }

    /// Assign `value` at `key`, creating intermediate sections as needed.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<(), NkconfError> {
        let path = DottedPath::parse(key)?;
        self.set_path(&path, value.into())
    }

    /// [`set`](Self::set) with a pre-split path.
    ///
    /// Absent or null intermediates become empty sections. Any other
    /// non-section value in the way is an error. Sections are only created
    /// below the last existing one, so a failure leaves the tree untouched.
    pub fn set_path(&mut self, path: &DottedPath, value: Value) -> Result<(), NkconfError> {
        let mut current = &mut self.root;
        for segment in path.sections() {
            let entry = current.entry(segment.as_str()).or_insert(Value::Null);
            if entry.is_null() {
                *entry = Value::Object(Section::new());
            }
            match entry {
                Value::Object(next) => current = next,
                _ => {
                    return Err(NkconfError::NotASection {
                        key: path.to_string(),
                        segment: segment.clone(),
                    });
                }
            }
        }
        current.insert(path.leaf().to_string(), value);
        Ok(())
    }

    /// Serialize `value` and store it at `key`.
    pub fn set_serialized<T: Serialize>(&mut self, key: &str, value: &T) -> Result<(), NkconfError> {
        let value = serde_json::to_value(value).map_err(NkconfError::SerializeError)?;
        self.set(key, value)
    }

    /// Remove `key`, returning the removed value.
    pub fn try_remove(&mut self, key: &str) -> Result<Value, NkconfError> {
        let not_found = || NkconfError::ParameterNotFound { key: key.into() };
        let path = DottedPath::parse(key)?;
        let section = walk_mut(&mut self.root, &path).ok_or_else(not_found)?;
        section.remove(path.leaf()).ok_or_else(not_found)
    }

    /// Remove `key`. Returns `false` (and logs) when it does not exist.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.try_remove(key) {
            Ok(_) => true,
            Err(err) => {
                tracing::error!("[Config] {err}");
                false
            }
        }
    }

    pub fn as_bool(&self, key: &str, default: bool) -> bool {
        coerce::to_bool(&self.get(key, default))
    }

    pub fn as_int(&self, key: &str, default: i64) -> Result<i64, NkconfError> {
        coerce::to_int(key, &self.get(key, default))
    }

    pub fn as_float(&self, key: &str, default: f64) -> Result<f64, NkconfError> {
        coerce::to_float(key, &self.get(key, default))
    }

    pub fn as_string(&self, key: &str, default: &str) -> String {
        coerce::to_string(&self.get(key, default))
    }

    pub fn as_list(&self, key: &str, default: Vec<Value>) -> Result<Vec<Value>, NkconfError> {
        coerce::to_list(key, &self.get(key, default))
    }
}

/// Follow `path`'s sections down from `root`.
fn walk<'a>(root: &'a Section, path: &DottedPath) -> Option<&'a Section> {
    let mut current = root;
    for segment in path.sections() {
        current = current.get(segment)?.as_object()?;
    }
    Some(current)
}

fn walk_mut<'a>(root: &'a mut Section, path: &DottedPath) -> Option<&'a mut Section> {
    let mut current = root;
    for segment in path.sections() {
        current = current.get_mut(segment)?.as_object_mut()?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn store(value: Value) -> Store {
        match value {
            Value::Object(map) => Store::from_section(map),
            other => panic!("fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn set_then_get_returns_value() {
        let mut s = Store::new();
        s.set("server.port", 8080).unwrap();
        assert_eq!(s.get("server.port", "ignored"), json!(8080));
    }

    #[test]
    fn set_auto_creates_sections() {
        let mut s = Store::new();
        s.set("a.b.c", 1).unwrap();
        assert_eq!(s.get("a.b.c", Value::Null), json!(1));
        assert_eq!(s.get("a.b", Value::Null), json!({"c": 1}));
        assert_eq!(s.tree(), store(json!({"a": {"b": {"c": 1}}})).tree());
    }

    #[test]
    fn get_missing_section_returns_default() {
        let s = Store::new();
        assert_eq!(s.get("x.y.z", "fallback"), json!("fallback"));
    }

    #[test]
    fn get_missing_leaf_returns_default() {
        let s = store(json!({"server": {"host": "localhost"}}));
        assert_eq!(s.get("server.port", 80), json!(80));
    }

    #[test]
    fn get_present_falsy_leaf_is_not_defaulted() {
        let s = store(json!({"zero": 0, "empty": "", "nothing": null}));
        assert_eq!(s.get("zero", 5), json!(0));
        assert_eq!(s.get("empty", "x"), json!(""));
        assert_eq!(s.get("nothing", "x"), Value::Null);
    }

    #[test]
    fn null_section_is_not_found() {
        let s = store(json!({"server": null}));
        assert_eq!(s.get("server.port", 1), json!(1));
        assert!(matches!(
            s.try_get("server.port"),
            Err(NkconfError::SectionNotFound { .. })
        ));
    }

    #[test]
    fn scalar_section_is_not_found() {
        let s = store(json!({"server": "flat"}));
        assert_eq!(s.get("server.port", 1), json!(1));
    }

    #[test]
    fn single_segment_reads_root() {
        let mut s = Store::new();
        s.set("flag", true).unwrap();
        assert_eq!(s.get("flag", false), json!(true));
        assert_eq!(s.tree().get("flag"), Some(&json!(true)));
    }

    #[test]
    fn set_overwrites_section_with_scalar() {
        let mut s = store(json!({"a": {"b": 1}}));
        s.set("a", "flat").unwrap();
        assert_eq!(s.get("a", Value::Null), json!("flat"));
    }

    #[test]
    fn set_replaces_null_intermediate() {
        let mut s = store(json!({"a": null}));
        s.set("a.b", 2).unwrap();
        assert_eq!(s.get("a", Value::Null), json!({"b": 2}));
    }

    #[test]
    fn set_through_scalar_fails_without_change() {
        let mut s = store(json!({"a": {"b": 5}}));
        let err = s.set("a.b.c", 1).unwrap_err();
        match err {
            NkconfError::NotASection { key, segment } => {
                assert_eq!(key, "a.b.c");
                assert_eq!(segment, "b");
            }
            other => panic!("Expected NotASection, got {other:?}"),
        }
        assert_eq!(s.get("a.b", Value::Null), json!(5));
    }

    #[test]
    fn set_path_accepts_pre_split() {
        let mut s = Store::new();
        let path = DottedPath::from_segments(["db", "url"]).unwrap();
        s.set_path(&path, json!("pg://")).unwrap();
        assert_eq!(s.get("db.url", Value::Null), json!("pg://"));
    }

    #[test]
    fn set_invalid_key_fails() {
        let mut s = Store::new();
        assert!(matches!(s.set("a..b", 1), Err(NkconfError::InvalidKey(_))));
        assert!(s.is_empty());
    }

    #[test]
    fn remove_then_remove_again() {
        let mut s = Store::new();
        s.set("a.b.c", 1).unwrap();
        assert!(s.remove("a.b.c"));
        assert_eq!(s.get("a.b.c", Value::Null), Value::Null);
        assert!(!s.remove("a.b.c"));
        // the emptied section stays behind
        assert_eq!(s.get("a.b", Value::Null), json!({}));
    }

    #[test]
    fn remove_missing_section_fails() {
        let mut s = Store::new();
        assert!(matches!(
            s.try_remove("x.y"),
            Err(NkconfError::ParameterNotFound { .. })
        ));
        assert!(s.is_empty());
    }

    #[test]
    fn try_remove_returns_value() {
        let mut s = store(json!({"list": [1, 2]}));
        assert_eq!(s.try_remove("list").unwrap(), json!([1, 2]));
        assert!(s.is_empty());
    }

    #[test]
    fn typed_int_from_string() {
        let mut s = Store::new();
        s.set("n", "42").unwrap();
        assert_eq!(s.as_int("n", 0).unwrap(), 42);
        assert_eq!(s.as_int("missing", 7).unwrap(), 7);
    }

    #[test]
    fn typed_int_conversion_error_propagates() {
        let mut s = Store::new();
        s.set("n", "forty-two").unwrap();
        assert!(matches!(
            s.as_int("n", 0),
            Err(NkconfError::Conversion { .. })
        ));
    }

    #[test]
    fn typed_bool_on_empty_list() {
        let mut s = Store::new();
        s.set("count", json!([])).unwrap();
        assert!(!s.as_bool("count", true));
        assert!(s.as_bool("missing", true));
    }

    #[test]
    fn typed_float_and_string() {
        let s = store(json!({"ratio": "0.25", "port": 8080}));
        assert_eq!(s.as_float("ratio", 0.0).unwrap(), 0.25);
        assert_eq!(s.as_string("port", ""), "8080");
        assert_eq!(s.as_string("missing", "dflt"), "dflt");
    }

    #[test]
    fn typed_list_default_is_fresh() {
        let s = Store::new();
        let mut first = s.as_list("items", vec![]).unwrap();
        first.push(json!("leak"));
        assert!(s.as_list("items", vec![]).unwrap().is_empty());
    }

    #[test]
    fn get_as_deserializes() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Server {
            host: String,
            port: u16,
        }
        let s = store(json!({"server": {"host": "localhost", "port": 8080}}));
        let server: Server = s.get_as("server").unwrap().unwrap();
        assert_eq!(
            server,
            Server {
                host: "localhost".into(),
                port: 8080
            }
        );
        assert_eq!(s.get_as::<u16>("server.missing").unwrap(), None);
        assert!(s.get_as::<u16>("server.host").is_err());
    }

    #[test]
    fn set_serialized_stores_structure() {
        #[derive(serde::Serialize)]
        struct Limits {
            max: u32,
        }
        let mut s = Store::new();
        s.set_serialized("limits", &Limits { max: 3 }).unwrap();
        assert_eq!(s.get("limits.max", Value::Null), json!(3));
    }

    #[test]
    fn replace_swaps_tree() {
        let mut s = store(json!({"old": 1}));
        let previous = s.replace(Section::new());
        assert!(s.is_empty());
        assert_eq!(previous.get("old"), Some(&json!(1)));
    }
}
