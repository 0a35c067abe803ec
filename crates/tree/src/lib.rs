//! Value trees for structural exploration
//!
//! A value tree is built from nested maps and lists with scalar leaves.
//!
//! # Core Concepts
//!
//! - **Value**: a node, tagged by [`Kind`] as a map, a list or a scalar
//! - **Path**: the route of [`Step`]s (keys and indices) from the root to a node
//! - **Walker**: depth-first traversal yielding each node with its path and parent
//! - **NoValue**: the placeholder marker for list slots that hold nothing
//!
//! # Example
//!
//! ```
//! use value_tree::{Map, TraversalOrder, Value};
//!
//! let tree = Value::Map([("a", Value::from(vec![Value::from(1)]))].into_iter().collect::<Map>());
//!
//! for visit in tree.walk(TraversalOrder::PostOrder) {
//!     println!("{} = {:?}", visit.path, visit.node);
//! }
//! ```

#[cfg(feature = "serde")]
mod json;
mod kind;
mod path;
mod value;
mod walk;

pub use kind::Kind;
pub use path::{Path, Step};
pub use value::{Key, Map, NoValue, Value, NO_VALUE};
pub use walk::{TraversalOrder, Visit, Walker};
