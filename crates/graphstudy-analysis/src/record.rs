//! Hierarchical meta-data records.
//!
//! Analyses report their findings as a tree of [`Record`] values keyed by strings. The
//! tree serializes to plain JSON, so downstream tooling can pick up the numbers without
//! parsing the tabular output files.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single meta-data value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, derive_more::From)]
#[serde(untagged)]
pub enum Record {
    #[default]
    #[from(ignore)]
    Null,
    Bool(bool),
    Text(String),
    Integer(usize),
    Real(f64),
    Array(Vec<Record>),
    Object(Object),
}

impl From<&str> for Record {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl<T> From<Option<T>> for Record
where
    T: Into<Record>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl Record {
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Self::Real(value) => Some(*value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_integer(&self) -> Option<usize> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }
}

/// A string-keyed collection of records with deterministic (sorted) key order.
///
/// # Examples
///
/// ```
/// use graphstudy_analysis::record::{Object, Record};
///
/// let mut info = Object::new();
/// info.insert("producer", "rawdata");
/// info.insert("size", 42_usize);
/// assert_eq!(info.get("size"), Some(&Record::Integer(42)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Object(BTreeMap<String, Record>);

impl Object {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous value stored under the same key.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<Record>,
    {
        self.0.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Record> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        assert_eq!(Record::from(true), Record::Bool(true));
        assert_eq!(Record::from("x"), Record::Text("x".to_owned()));
        assert_eq!(Record::from(3_usize), Record::Integer(3));
        assert_eq!(Record::from(0.5), Record::Real(0.5));
        assert_eq!(Record::from(None::<f64>), Record::Null);
        assert_eq!(Record::from(Some(2.0)), Record::Real(2.0));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Record::Real(1.5).as_real(), Some(1.5));
        assert_eq!(Record::Integer(1).as_real(), None);
        assert_eq!(Record::Integer(7).as_integer(), Some(7));
        assert_eq!(Record::from("a").as_integer(), None);
        assert_eq!(Record::default(), Record::Null);
    }

    #[test]
    fn test_serialize_nested() {
        let mut sub = Object::new();
        sub.insert("bincount", 10_usize);
        sub.insert("filename", None::<String>);
        let mut info = Object::new();
        info.insert("producer", "rawdata");
        info.insert("data", vec![Record::from(sub)]);
        info.insert("mean", 0.25);

        let json = serde_json::to_string(&info).unwrap();
        assert_eq!(
            json,
            r#"{"data":[{"bincount":10,"filename":null}],"mean":0.25,"producer":"rawdata"}"#
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut a = Object::new();
        a.insert("x", 1_usize);
        a.insert("x", 2_usize);
        a.insert("y", true);
        assert_eq!(a.len(), 2);
        assert_eq!(a.get("x"), Some(&Record::Integer(2)));
        assert!(a.contains_key("y"));
    }
}
