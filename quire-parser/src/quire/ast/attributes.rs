//! Ordered attribute sets attached to blocks
//!
//!     Attribute lines (`[quote, Author, Work]`) are parsed into an [AttributeSet]. Keys keep
//!     their insertion order so that a block serializes the way it was written. Positional
//!     values are stored under synthetic keys (`attr_1`, `attr_2`, ...) and are reinterpreted
//!     by the block kind that ends up owning them, for example a Quote reads `attr_1` as the
//!     attribution.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Style name (first unquoted token of an attribute line)
pub const STYLE: &str = "style";
/// Explicit or generated element id
pub const ID: &str = "id";
/// Extra CSS roles, space separated
pub const ROLE: &str = "role";
/// Quote/verse author
pub const ATTRIBUTION: &str = "attribution";
/// Quote/verse source work
pub const CITETITLE: &str = "citetitle";
/// Source block language
pub const LANGUAGE: &str = "language";

/// Key under which the positional value at `index` (1-based) is stored
pub fn positional_key(index: usize) -> String {
    format!("attr_{}", index)
}

/// Insertion-ordered string map of block attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeSet {
    entries: Vec<(String, String)>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` to `value`. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Layer `other` on top of this set; its values win on key collisions.
    pub fn merge(&mut self, other: AttributeSet) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn style(&self) -> Option<&str> {
        self.get(STYLE)
    }

    /// Positional value by 1-based index
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.get(&positional_key(index))
    }

    /// Copy positional `index` into `key` unless `key` was given explicitly.
    pub(crate) fn promote_positional(&mut self, index: usize, key: &str) {
        if self.contains(key) {
            return;
        }
        if let Some(value) = self.positional(index).map(str::to_string) {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (key, value) in iter {
            set.insert(key, value);
        }
        set
    }
}

impl Serialize for AttributeSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AttributeSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AttributeSetVisitor;

        impl<'de> Visitor<'de> for AttributeSetVisitor {
            type Value = AttributeSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of attribute names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut set = AttributeSet::new();
                while let Some((key, value)) = access.next_entry::<String, String>()? {
                    set.insert(key, value);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(AttributeSetVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_overwrites_in_place() {
        let mut attrs = AttributeSet::new();
        attrs.insert(STYLE, "quote");
        attrs.insert("attr_1", "Someone");
        attrs.insert(STYLE, "verse");

        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["style", "attr_1"]);
        assert_eq!(attrs.style(), Some("verse"));
    }

    #[test]
    fn test_promote_positional_respects_explicit_key() {
        let mut attrs: AttributeSet = [("attr_1", "Positional"), ("attribution", "Named")]
            .into_iter()
            .collect();
        attrs.promote_positional(1, ATTRIBUTION);
        assert_eq!(attrs.get(ATTRIBUTION), Some("Named"));

        let mut attrs: AttributeSet = [("attr_1", "Positional")].into_iter().collect();
        attrs.promote_positional(1, ATTRIBUTION);
        assert_eq!(attrs.get(ATTRIBUTION), Some("Positional"));
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let attrs: AttributeSet = [("style", "source"), ("attr_1", "rust")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"style":"source","attr_1":"rust"}"#);

        let back: AttributeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }
}
