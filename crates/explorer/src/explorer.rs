use anyhow::{Context, Result};
use log::{debug, trace};
use value_tree::{Kind, Map, Path, TraversalOrder, Value, Visit};

use crate::assemble::Assembler;
use crate::error::ExplorerError;
use crate::options::{DiffOptions, ExploreOptions};

/// Selective traversal over a map-rooted value tree
///
/// The explorer borrows its tree and never modifies it; every call to
/// [`explore`](Self::explore) or [`diff`](Self::diff) builds a fresh output.
#[derive(Debug, Clone, Copy)]
pub struct Explorer<'a> {
    tree: &'a Value,
}

impl<'a> Explorer<'a> {
    /// Create an explorer over `tree`
    ///
    /// Fails with [`ExplorerError::InvalidInput`] unless `tree` is a map.
    pub fn new(tree: &'a Value) -> Result<Self, ExplorerError> {
        match tree.kind() {
            Kind::Map => Ok(Self { tree }),
            found => Err(ExplorerError::InvalidInput { found }),
        }
    }

    /// Get the explored tree
    pub fn tree(&self) -> &'a Value {
        self.tree
    }

    /// Walk the tree children-first, report every selected node and
    /// assemble the reports into a tree mirroring their paths
    ///
    /// Nodes whose predicate fails are skipped. A failing report aborts the
    /// walk and is returned with the path it failed at.
    pub fn explore(&self, options: ExploreOptions<'_>) -> Result<Map> {
        let mut assembler = Assembler::new(self.tree, options.preserve_array_indexes);
        let mut selected = 0usize;

        for Visit { node, path, parent } in self.tree.walk(TraversalOrder::PostOrder) {
            if !options.is_selected(node, &path, parent) {
                continue;
            }
            trace!("selected {}", path);

            let report = (options.report)(node, &path, self.tree)
                .with_context(|| format!("failed to report node at {}", path))?;
            assembler.insert(&path, report)?;
            selected += 1;
        }

        debug!("explore selected {} node(s)", selected);
        Ok(assembler.finish())
    }

    /// Explore the nodes whose value differs from the same path in `other`
    ///
    /// A path missing from `other` counts as a difference. The root itself
    /// is never selected.
    pub fn diff(&self, other: &Value, options: DiffOptions<'_>) -> Result<Map> {
        self.explore(options.with_select(|node: &Value, path: &Path, _parent: Option<&Value>| {
            Ok(!path.is_root() && other.get_path(path) != Some(node))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_requires_map() {
        assert!(Explorer::new(&Value::Map(Map::new())).is_ok());
        assert_eq!(
            Explorer::new(&Value::List(vec![])).unwrap_err(),
            ExplorerError::InvalidInput { found: Kind::List }
        );
        assert_eq!(
            Explorer::new(&Value::from(0)).unwrap_err(),
            ExplorerError::InvalidInput { found: Kind::Scalar }
        );
    }

    #[test]
    fn test_invalid_input_message() {
        let err = Explorer::new(&Value::from("a")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid input: expected a map at the root, found a scalar"
        );
    }

    #[test]
    fn test_tree_is_borrowed_not_copied() {
        let tree = Value::Map([("a", 1)].into_iter().collect());
        let explorer = Explorer::new(&tree).unwrap();
        assert!(std::ptr::eq(explorer.tree(), &tree));
    }

    #[test]
    fn test_scalar_reports_never_break_assembly() {
        // { a: { b: [1, { c: 2 }] } }
        let inner: Map = [("c", 2)].into_iter().collect();
        let b = Value::List(vec![Value::from(1), Value::Map(inner)]);
        let a: Map = [("b", b)].into_iter().collect();
        let tree = Value::Map([("a", Value::Map(a))].into_iter().collect());
        let explorer = Explorer::new(&tree).unwrap();

        for preserve in [false, true] {
            let output = explorer
                .explore(
                    ExploreOptions::default()
                        .report(|_, path, _| Ok(Value::from(path.to_string())))
                        .preserve_array_indexes(preserve),
                )
                .unwrap();
            let expected: Map = [("a", "$.a")].into_iter().collect();
            assert_eq!(output, expected);
        }

        let flat = Value::Map([("a", "flat")].into_iter().collect());
        let changed = explorer.diff(&flat, DiffOptions::default()).unwrap();
        assert_eq!(changed.get(&"a".into()), tree.as_map().unwrap().get(&"a".into()));
    }
}
