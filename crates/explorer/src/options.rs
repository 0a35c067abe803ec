use std::fmt;

use anyhow::Result;
use log::debug;
use value_tree::{Path, Value};

/// Selection predicate: `(node, path, parent) -> selected?`
///
/// The root is offered with the empty path and no parent. Returning an error
/// excludes the node without interrupting the traversal.
pub type SelectFn<'a> = Box<dyn Fn(&Value, &Path, Option<&Value>) -> Result<bool> + 'a>;

/// Report function: `(node, path, root) -> value placed in the output`
pub type ReportFn<'a> = Box<dyn Fn(&Value, &Path, &Value) -> Result<Value> + 'a>;

/// The default predicate: selects every node
pub fn select_all(_node: &Value, _path: &Path, _parent: Option<&Value>) -> Result<bool> {
    Ok(true)
}

/// The default report: the node itself
pub fn report_node(node: &Value, _path: &Path, _root: &Value) -> Result<Value> {
    Ok(node.clone())
}

/// Options for [`Explorer::explore`](crate::Explorer::explore)
///
/// ```
/// use object_explorer::ExploreOptions;
///
/// let options = ExploreOptions::default()
///     .select(|node, _path, _parent| Ok(node.is_null()))
///     .preserve_array_indexes(true);
/// ```
pub struct ExploreOptions<'a> {
    pub(crate) select: SelectFn<'a>,
    pub(crate) report: ReportFn<'a>,
    pub(crate) preserve_array_indexes: bool,
}

impl<'a> ExploreOptions<'a> {
    /// Set the selection predicate
    pub fn select<F>(mut self, select: F) -> Self
    where
        F: Fn(&Value, &Path, Option<&Value>) -> Result<bool> + 'a,
    {
        self.select = Box::new(select);
        self
    }

    /// Set the report function
    pub fn report<F>(mut self, report: F) -> Self
    where
        F: Fn(&Value, &Path, &Value) -> Result<Value> + 'a,
    {
        self.report = Box::new(report);
        self
    }

    /// Keep selected list elements at their original indices, padding the
    /// gaps with `NoValue`, instead of packing them from index 0
    pub fn preserve_array_indexes(mut self, preserve: bool) -> Self {
        self.preserve_array_indexes = preserve;
        self
    }

    /// Evaluate the predicate, treating a failure as "not selected"
    pub(crate) fn is_selected(&self, node: &Value, path: &Path, parent: Option<&Value>) -> bool {
        match (self.select)(node, path, parent) {
            Ok(selected) => selected,
            Err(err) => {
                debug!("selection failed at {}, skipping node: {:#}", path, err);
                false
            }
        }
    }
}

impl Default for ExploreOptions<'_> {
    fn default() -> Self {
        Self {
            select: Box::new(select_all),
            report: Box::new(report_node),
            preserve_array_indexes: false,
        }
    }
}

impl fmt::Debug for ExploreOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExploreOptions")
            .field("preserve_array_indexes", &self.preserve_array_indexes)
            .finish_non_exhaustive()
    }
}

/// Options for [`Explorer::diff`](crate::Explorer::diff)
///
/// The same as [`ExploreOptions`] without a predicate: diff selects the
/// nodes that differ.
pub struct DiffOptions<'a> {
    report: ReportFn<'a>,
    preserve_array_indexes: bool,
}

impl<'a> DiffOptions<'a> {
    /// Set the report function
    pub fn report<F>(mut self, report: F) -> Self
    where
        F: Fn(&Value, &Path, &Value) -> Result<Value> + 'a,
    {
        self.report = Box::new(report);
        self
    }

    /// See [`ExploreOptions::preserve_array_indexes`]
    pub fn preserve_array_indexes(mut self, preserve: bool) -> Self {
        self.preserve_array_indexes = preserve;
        self
    }

    pub(crate) fn with_select<F>(self, select: F) -> ExploreOptions<'a>
    where
        F: Fn(&Value, &Path, Option<&Value>) -> Result<bool> + 'a,
    {
        ExploreOptions {
            select: Box::new(select),
            report: self.report,
            preserve_array_indexes: self.preserve_array_indexes,
        }
    }
}

impl Default for DiffOptions<'_> {
    fn default() -> Self {
        Self {
            report: Box::new(report_node),
            preserve_array_indexes: false,
        }
    }
}

impl fmt::Debug for DiffOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiffOptions")
            .field("preserve_array_indexes", &self.preserve_array_indexes)
            .finish_non_exhaustive()
    }
}
