use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attribute map carried by blocks and by kind defaults.
///
/// Uses BTreeMap so iteration (and serialized output) is ordered by key.
pub type Attributes = BTreeMap<String, AttrValue>;

/// A single attribute value.
///
/// Values are fully owned: cloning an `AttrValue` copies nested lists and
/// maps, so a block never shares storage with the kind defaults it was
/// built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<AttrValue>),
    Map(Attributes),
}

impl AttrValue {
    pub fn is_null(&self) -> bool {
        matches!(self, AttrValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttrValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AttrValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Integers widen to floats; everything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AttrValue::Float(f) => Some(*f),
            AttrValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[AttrValue]> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Attributes> {
        match self {
            AttrValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<AttrValue>> {
        match self {
            AttrValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Attributes> {
        match self {
            AttrValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::String(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::String(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Int(value.into())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        AttrValue::Int(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Float(value)
    }
}

impl From<Vec<AttrValue>> for AttrValue {
    fn from(value: Vec<AttrValue>) -> Self {
        AttrValue::List(value)
    }
}

impl From<Attributes> for AttrValue {
    fn from(value: Attributes) -> Self {
        AttrValue::Map(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(AttrValue::Null)
    }
}

/// Collect `(key, value)` pairs into an [`Attributes`] map.
pub fn attributes<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Attributes
where
    K: Into<String>,
    V: Into<AttrValue>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_collects_mixed_pairs() {
        let attrs = attributes([("align", AttrValue::from("left")), ("level", 2.into())]);

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs["align"].as_str(), Some("left"));
        assert_eq!(attrs["level"].as_i64(), Some(2));
    }

    #[test]
    fn test_clone_does_not_share_nested_storage() {
        let original = AttrValue::List(vec!["a".into()]);
        let mut copy = original.clone();

        copy.as_list_mut().unwrap().push("b".into());

        assert_eq!(original.as_list().unwrap().len(), 1);
        assert_eq!(copy.as_list().unwrap().len(), 2);
    }

    #[test]
    fn test_as_f64_widens_integers() {
        assert_eq!(AttrValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(AttrValue::from("3").as_f64(), None);
    }

    #[test]
    fn test_none_becomes_null() {
        let value: AttrValue = None::<&str>.into();
        assert!(value.is_null());
    }
}
