use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// A string-keyed collection of JSON values.
///
/// Only own keys exist; there is no inherited lookup.
pub trait Record {
    /// The value stored under `key`, if the key is present.
    fn property(&self, key: &str) -> Option<&Value>;

    /// Number of own keys.
    fn key_count(&self) -> usize;
}

impl Record for Map<String, Value> {
    fn property(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}

impl Record for BTreeMap<String, Value> {
    fn property(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
    fn property(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn key_count(&self) -> usize {
        self.len()
    }
}

/// Non-object values are records without keys.
impl Record for Value {
    fn property(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn key_count(&self) -> usize {
        match self {
            Value::Object(map) => map.len(),
            _ => 0,
        }
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn property(&self, key: &str) -> Option<&Value> {
        (**self).property(key)
    }

    fn key_count(&self) -> usize {
        (**self).key_count()
    }
}

/// Check if `key` is an own property of `record`.
///
/// The stored value does not matter; a key holding `null` is present.
///
/// # Examples
///
/// ```
/// use plain_util::object::has_property;
/// use serde_json::json;
///
/// let obj = json!({"name": "Copilot", "version": null});
///
/// assert!(has_property(&obj, "name"));
/// assert!(has_property(&obj, "version"));
/// assert!(!has_property(&obj, "toString"));
/// ```
pub fn has_property<R: Record + ?Sized>(record: &R, key: &str) -> bool {
    record.property(key).is_some()
}

/// Check if a record has no own properties.
///
/// # Examples
///
/// ```
/// use plain_util::object::is_empty_object;
/// use serde_json::json;
///
/// assert!(is_empty_object(&json!({})));
/// assert!(!is_empty_object(&json!({"foo": "bar"})));
/// ```
pub fn is_empty_object<R: Record + ?Sized>(record: &R) -> bool {
    record.key_count() == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_property_value() {
        let obj = json!({"name": "Copilot", "version": "1.0"});

        assert!(has_property(&obj, "name"));
        assert!(!has_property(&obj, "age"));
    }

    #[test]
    fn test_has_property_null_value_counts() {
        let obj = json!({"name": "Copilot", "version": null});
        assert!(has_property(&obj, "version"));
    }

    #[test]
    fn test_has_property_no_inherited_keys() {
        let obj = json!({"name": "Copilot"});
        assert!(!has_property(&obj, "toString"));
        assert!(!has_property(&obj, "hasOwnProperty"));
    }

    #[test]
    fn test_has_property_non_objects() {
        assert!(!has_property(&json!(null), "foo"));
        assert!(!has_property(&json!(42), "foo"));
        assert!(!has_property(&json!("string"), "length"));
        assert!(!has_property(&json!([1, 2, 3]), "0"));
    }

    #[test]
    fn test_has_property_maps() {
        let mut map = Map::new();
        map.insert("foo".to_string(), json!(1));
        assert!(has_property(&map, "foo"));
        assert!(!has_property(&map, "bar"));

        let mut btree = BTreeMap::new();
        btree.insert("foo".to_string(), Value::Null);
        assert!(has_property(&btree, "foo"));
        assert!(!has_property(&btree, "bar"));

        let mut hash = HashMap::new();
        hash.insert("foo".to_string(), json!(false));
        assert!(has_property(&hash, "foo"));
        assert!(!has_property(&hash, "bar"));
    }

    #[test]
    fn test_is_empty_object() {
        assert!(is_empty_object(&json!({})));
        assert!(!is_empty_object(&json!({"foo": "bar"})));
        assert!(!is_empty_object(&json!({"foo": null})));
    }

    #[test]
    fn test_is_empty_object_maps() {
        let empty: BTreeMap<String, Value> = BTreeMap::new();
        assert!(is_empty_object(&empty));

        let mut hash: HashMap<String, Value> = HashMap::new();
        assert!(is_empty_object(&hash));
        hash.insert("foo".to_string(), json!("bar"));
        assert!(!is_empty_object(&hash));

        assert!(is_empty_object(&Map::new()));
    }

    #[test]
    fn test_is_empty_object_non_objects() {
        assert!(is_empty_object(&json!(null)));
        assert!(is_empty_object(&json!(42)));
        assert!(is_empty_object(&json!([1, 2, 3])));
    }

    #[test]
    fn test_record_through_reference() {
        let obj = json!({"a": 1});
        let by_ref: &Value = &obj;
        assert!(has_property(&by_ref, "a"));
        assert_eq!(by_ref.key_count(), 1);
    }
}
