//! Structural explorer for value trees
//!
//! This crate walks a map-rooted tree of maps, lists and scalars, selects
//! nodes with a caller-supplied predicate, reports each selected node with a
//! caller-supplied function, and rebuilds the reports into a new tree that
//! keeps only the branches leading to selected nodes. [`Explorer::diff`]
//! uses the same machinery to select the nodes that differ from another tree.
//!
//! # Example
//!
//! ```
//! use object_explorer::{ExploreOptions, Explorer, Map, Value};
//!
//! let tree = Value::Map(
//!     [("a", Value::Null), ("b", Value::from(vec![Value::from(1), Value::Null]))]
//!         .into_iter()
//!         .collect::<Map>(),
//! );
//! let explorer = Explorer::new(&tree)?;
//!
//! let nulls = explorer.explore(
//!     ExploreOptions::default().select(|node, _path, _parent| Ok(node.is_null())),
//! )?;
//! let expected: Map = [("a", Value::Null), ("b", Value::from(vec![Value::Null]))]
//!     .into_iter()
//!     .collect();
//! assert_eq!(nulls, expected);
//! # Ok::<(), anyhow::Error>(())
//! ```

mod assemble;
mod error;
mod explorer;
mod options;

pub use error::ExplorerError;
pub use explorer::Explorer;
pub use options::{report_node, select_all, DiffOptions, ExploreOptions, ReportFn, SelectFn};
pub use value_tree::{
    Key, Kind, Map, NoValue, Path, Step, TraversalOrder, Value, Visit, Walker, NO_VALUE,
};
