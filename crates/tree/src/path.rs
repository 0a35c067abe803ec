//! Paths from the root of a value tree to one of its nodes

use std::fmt;
use std::ops::Deref;

use crate::value::Key;

/// A single step along a path: a map key or a list index
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Step {
    Key(Key),
    Index(usize),
}

impl Step {
    /// Returns the key if this step addresses a map
    pub fn as_key(&self) -> Option<&Key> {
        match self {
            Step::Key(key) => Some(key),
            Step::Index(_) => None,
        }
    }

    /// Returns the index if this step addresses a list
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Step::Key(_) => None,
            Step::Index(index) => Some(*index),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key(key) => write!(f, ".{}", key),
            Step::Index(index) => write!(f, "[{}]", index),
        }
    }
}

impl From<Key> for Step {
    fn from(key: Key) -> Self {
        Step::Key(key)
    }
}

impl From<&str> for Step {
    fn from(key: &str) -> Self {
        Step::Key(key.into())
    }
}

impl From<String> for Step {
    fn from(key: String) -> Self {
        Step::Key(key.into())
    }
}

impl From<usize> for Step {
    fn from(index: usize) -> Self {
        Step::Index(index)
    }
}

/// The route from the root to a node
///
/// The empty path denotes the root itself. Displayed as `$` followed by its
/// steps, e.g. `$.d[1].b`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path(Vec<Step>);

impl Path {
    /// The path of the root
    pub fn root() -> Self {
        Self::default()
    }

    /// Check if this is the root path
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the steps of this path
    pub fn steps(&self) -> &[Step] {
        &self.0
    }

    /// Append a step
    pub fn push(&mut self, step: impl Into<Step>) {
        self.0.push(step.into());
    }

    /// Remove and return the last step
    pub fn pop(&mut self) -> Option<Step> {
        self.0.pop()
    }

    /// A new path extended by one step
    pub fn child(&self, step: impl Into<Step>) -> Self {
        let mut steps = Vec::with_capacity(self.0.len() + 1);
        steps.extend_from_slice(&self.0);
        steps.push(step.into());
        Self(steps)
    }

    /// The path of the parent node, `None` for the root
    pub fn parent(&self) -> Option<Self> {
        let (_, prefix) = self.0.split_last()?;
        Some(Self(prefix.to_vec()))
    }
}

impl Deref for Path {
    type Target = [Step];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[Step]> for Path {
    fn as_ref(&self) -> &[Step] {
        &self.0
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for step in &self.0 {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

impl From<Vec<Step>> for Path {
    fn from(steps: Vec<Step>) -> Self {
        Self(steps)
    }
}

impl<S: Into<Step>> FromIterator<S> for Path {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
