//! Sparse reconstruction of the output tree along selected paths

use std::collections::HashMap;

use log::trace;
use value_tree::{Kind, Map, Path, Step, Value};

use crate::error::ExplorerError;

/// The source element a packed output list last opened a slot for
#[derive(Debug, Clone, Copy)]
struct ListCursor {
    source_index: usize,
    output_index: usize,
}

/// Builds the output tree one selected path at a time
///
/// Every container created along a path takes the kind of the source
/// container at the same position. Writes are last-write-wins: a node that is
/// selected after its descendants replaces whatever they wrote beneath it.
pub(crate) struct Assembler<'a> {
    source: &'a Value,
    preserve_array_indexes: bool,
    output: Value,
    /// Keyed by the source path of each list, unused when indexes are preserved
    cursors: HashMap<Path, ListCursor>,
}

impl<'a> Assembler<'a> {
    pub(crate) fn new(source: &'a Value, preserve_array_indexes: bool) -> Self {
        Self {
            source,
            preserve_array_indexes,
            output: Value::Map(Map::new()),
            cursors: HashMap::new(),
        }
    }

    /// Place `report` at `path`, creating the containers leading to it
    ///
    /// The empty path addresses the root, which is never replaced.
    pub(crate) fn insert(&mut self, path: &Path, report: Value) -> Result<(), ExplorerError> {
        let Some((last, prefix)) = path.split_last() else {
            trace!("root selected, nothing to assemble");
            return Ok(());
        };
        let mismatch = || ExplorerError::PathMismatch { path: path.clone() };
        let preserve = self.preserve_array_indexes;
        let cursors = &mut self.cursors;

        let (_, output, at) = prefix.iter().try_fold(
            (self.source, &mut self.output, Path::root()),
            |(source, output, mut at), step| -> Result<_, ExplorerError> {
                let source = source.get(step).ok_or_else(mismatch)?;
                let slot = slot_mut(output, step, &at, preserve, cursors).ok_or_else(mismatch)?;
                if !ensure_container(slot, source.kind()) {
                    return Err(mismatch());
                }
                at.push(step.clone());
                Ok((source, slot, at))
            },
        )?;

        let slot = slot_mut(output, last, &at, preserve, cursors).ok_or_else(mismatch)?;
        *slot = report;
        trace!("assembled {}", path);
        Ok(())
    }

    pub(crate) fn finish(self) -> Map {
        match self.output {
            Value::Map(map) => map,
            // The root slot is created as a map and never written to.
            _ => Map::new(),
        }
    }
}

/// Find or open the slot `step` addresses inside an output container
///
/// `at` is the source path of `container`. Lists either keep source indices,
/// padding gaps with `NoValue`, or pack slots in the order source elements
/// are first reached.
fn slot_mut<'v>(
    container: &'v mut Value,
    step: &Step,
    at: &Path,
    preserve_array_indexes: bool,
    cursors: &mut HashMap<Path, ListCursor>,
) -> Option<&'v mut Value> {
    match (container, step) {
        (Value::Map(map), Step::Key(key)) => Some(map.get_or_insert_with(key.clone(), || Value::Null)),
        (Value::List(items), Step::Index(index)) => {
            let index = *index;
            let target = if preserve_array_indexes {
                if items.len() <= index {
                    items.resize(index + 1, Value::no_value());
                }
                index
            } else {
                match cursors.get(at) {
                    Some(cursor) if cursor.source_index == index => cursor.output_index,
                    _ => {
                        items.push(Value::no_value());
                        let output_index = items.len() - 1;
                        cursors.insert(
                            at.clone(),
                            ListCursor {
                                source_index: index,
                                output_index,
                            },
                        );
                        output_index
                    }
                }
            };
            items.get_mut(target)
        }
        _ => None,
    }
}

/// Make `slot` an empty container of `kind` unless it already is one
///
/// Returns false when `kind` is not a container kind.
fn ensure_container(slot: &mut Value, kind: Kind) -> bool {
    let current = slot.kind();
    match kind {
        Kind::Scalar => false,
        _ if current == kind => true,
        Kind::Map => {
            *slot = Value::Map(Map::new());
            true
        }
        Kind::List => {
            *slot = Value::List(Vec::new());
            true
        }
    }
}
