//! Dynamic values: maps, lists and scalar leaves

use std::collections::HashMap;
use std::fmt;

use chrono::NaiveDate;
use derive_more::Display;

use crate::kind::Kind;
use crate::path::Step;

/// Marker for "no value at this position"
///
/// Fills placeholder slots in reconstructed lists. It is distinct from
/// [`Value::Null`] and from every scalar, and cannot be constructed outside
/// this crate: the only instance is [`NO_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoValue(());

/// The single [`NoValue`] instance
pub const NO_VALUE: NoValue = NoValue(());

impl fmt::Display for NoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoValue")
    }
}

/// A map key
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum Key {
    #[display(fmt = "{}", _0)]
    String(String),
    #[display(fmt = "{}", _0)]
    Integer(i64),
}

impl Key {
    /// Get the key as a string slice, if it is a string key
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::String(s) => Some(s),
            Key::Integer(_) => None,
        }
    }
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        Key::String(key.to_string())
    }
}

impl From<String> for Key {
    fn from(key: String) -> Self {
        Key::String(key)
    }
}

impl From<i64> for Key {
    fn from(key: i64) -> Self {
        Key::Integer(key)
    }
}

/// An insertion-ordered key-value container
///
/// Entries keep the order they were first inserted in; overwriting a key
/// keeps its original position. Equality ignores order, so two maps are
/// equal when they hold the same keys bound to equal values.
///
/// Lookups go through a hash index into the entry vector, so `get` and
/// `insert` are constant time; `remove` shifts later entries and is linear.
#[derive(Clone, Default)]
pub struct Map {
    entries: Vec<(Key, Value)>,
    index: HashMap<Key, usize>,
}

impl Map {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty map with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &Key) -> Option<usize> {
        self.index.get(key).copied()
    }

    fn push(&mut self, key: Key, value: Value) -> usize {
        let i = self.entries.len();
        self.index.insert(key.clone(), i);
        self.entries.push((key, value));
        i
    }

    /// Get the value bound to `key`
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.position(key).map(|i| &self.entries[i].1)
    }

    /// Get a mutable reference to the value bound to `key`
    pub fn get_mut(&mut self, key: &Key) -> Option<&mut Value> {
        let i = self.position(key)?;
        Some(&mut self.entries[i].1)
    }

    /// Check if `key` is bound
    pub fn contains_key(&self, key: &Key) -> bool {
        self.position(key).is_some()
    }

    /// Bind `key` to `value`, returning the previous value if there was one
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.position(&key) {
            Some(i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.push(key, value);
                None
            }
        }
    }

    /// Get the value bound to `key`, binding the result of `default` first if
    /// the key is absent
    pub fn get_or_insert_with(&mut self, key: Key, default: impl FnOnce() -> Value) -> &mut Value {
        let i = match self.position(&key) {
            Some(i) => i,
            None => {
                let value = default();
                self.push(key, value)
            }
        };
        &mut self.entries[i].1
    }

    /// Remove `key`, returning its value
    pub fn remove(&mut self, key: &Key) -> Option<Value> {
        let i = self.index.remove(key)?;
        let (_, value) = self.entries.remove(i);
        for (k, _) in &self.entries[i..] {
            if let Some(slot) = self.index.get_mut(k) {
                *slot -= 1;
            }
        }
        Some(value)
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&Key, &Value)> + ExactSizeIterator {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Iterate over keys in insertion order
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &Key> + ExactSizeIterator {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Iterate over values in insertion order
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &Value> + ExactSizeIterator {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Map::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for Map {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Map {
    type Item = (Key, Value);
    type IntoIter = std::vec::IntoIter<(Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A node in a value tree
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    List(Vec<Value>),
    Map(Map),
    /// Placeholder slot, see [`NoValue`]
    NoValue(NoValue),
}

impl Value {
    /// The [`NoValue`] placeholder as a value
    pub const fn no_value() -> Self {
        Value::NoValue(NO_VALUE)
    }

    /// Get the kind of this node
    pub fn kind(&self) -> Kind {
        match self {
            Value::Map(_) => Kind::Map,
            Value::List(_) => Kind::List,
            _ => Kind::Scalar,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_no_value(&self) -> bool {
        matches!(self, Value::NoValue(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Get the child reached by a single step
    ///
    /// Keys only address maps and indices only address lists; any other
    /// combination returns `None`.
    pub fn get(&self, step: &Step) -> Option<&Value> {
        match (self, step) {
            (Value::Map(map), Step::Key(key)) => map.get(key),
            (Value::List(items), Step::Index(index)) => items.get(*index),
            _ => None,
        }
    }

    /// Get a mutable reference to the child reached by a single step
    pub fn get_mut(&mut self, step: &Step) -> Option<&mut Value> {
        match (self, step) {
            (Value::Map(map), Step::Key(key)) => map.get_mut(key),
            (Value::List(items), Step::Index(index)) => items.get_mut(*index),
            _ => None,
        }
    }

    /// Follow `steps` from this node
    ///
    /// Returns `None` as soon as a step is missing or lands inside a scalar.
    /// The empty path returns the node itself.
    pub fn get_path(&self, steps: &[Step]) -> Option<&Value> {
        steps.iter().try_fold(self, |node, step| node.get(step))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i.into())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<NaiveDate> for Value {
    fn from(d: NaiveDate) -> Self {
        Value::Date(d)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Map(map)
    }
}

impl From<NoValue> for Value {
    fn from(marker: NoValue) -> Self {
        Value::NoValue(marker)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}
