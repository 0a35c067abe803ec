//! Depth-first traversal of value trees

use crate::path::{Path, Step};
use crate::value::Value;

/// Traversal order for walking a value tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Visit a node before its children (top-down)
    PreOrder,
    /// Visit children before their node (bottom-up)
    PostOrder,
}

/// A node reached by a [`Walker`]
#[derive(Debug, Clone, PartialEq)]
pub struct Visit<'a> {
    /// The node itself
    pub node: &'a Value,
    /// The route from the walk's start to the node
    pub path: Path,
    /// The container holding the node, `None` for the start node
    pub parent: Option<&'a Value>,
}

/// A pending node; `depth` is the length of its parent's path
struct Frame<'a> {
    node: &'a Value,
    step: Option<Step>,
    depth: usize,
    parent: Option<&'a Value>,
    expanded: bool,
}

/// Iterator visiting every node of a value tree exactly once
///
/// Map entries are visited in insertion order and list elements in index
/// order. The walk keeps an explicit stack holding one step per pending node
/// and a single shared path, so deep trees do not overflow the call stack.
/// Each [`Visit`] still owns a copy of its path.
pub struct Walker<'a> {
    order: TraversalOrder,
    stack: Vec<Frame<'a>>,
    path: Path,
}

impl<'a> Walker<'a> {
    /// Create a new walker starting from `start`
    pub fn new(start: &'a Value, order: TraversalOrder) -> Self {
        Self {
            order,
            stack: vec![Frame {
                node: start,
                step: None,
                depth: 0,
                parent: None,
                expanded: false,
            }],
            path: Path::root(),
        }
    }

    /// Push the children of `node`, last child first so the first is popped first
    fn push_children(&mut self, node: &'a Value) {
        let depth = self.path.len();
        match node {
            Value::Map(map) => {
                for (key, child) in map.iter().rev() {
                    self.stack.push(Frame {
                        node: child,
                        step: Some(Step::Key(key.clone())),
                        depth,
                        parent: Some(node),
                        expanded: false,
                    });
                }
            }
            Value::List(items) => {
                for (index, child) in items.iter().enumerate().rev() {
                    self.stack.push(Frame {
                        node: child,
                        step: Some(Step::Index(index)),
                        depth,
                        parent: Some(node),
                        expanded: false,
                    });
                }
            }
            _ => {}
        }
    }

    fn next_preorder(&mut self) -> Option<Visit<'a>> {
        let current = self.stack.pop()?;
        while self.path.len() > current.depth {
            self.path.pop();
        }
        if let Some(step) = current.step {
            self.path.push(step);
        }
        self.push_children(current.node);
        Some(Visit {
            node: current.node,
            path: self.path.clone(),
            parent: current.parent,
        })
    }

    fn next_postorder(&mut self) -> Option<Visit<'a>> {
        loop {
            let top = self.stack.last_mut()?;
            if top.expanded {
                let done = self.stack.pop()?;
                let visit = Visit {
                    node: done.node,
                    path: self.path.clone(),
                    parent: done.parent,
                };
                if done.step.is_some() {
                    self.path.pop();
                }
                return Some(visit);
            }

            top.expanded = true;
            let node = top.node;
            if let Some(step) = top.step.clone() {
                self.path.push(step);
            }
            self.push_children(node);
        }
    }
}

impl<'a> Iterator for Walker<'a> {
    type Item = Visit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            TraversalOrder::PreOrder => self.next_preorder(),
            TraversalOrder::PostOrder => self.next_postorder(),
        }
    }
}

impl Value {
    /// Walk this node and all of its descendants in the given order
    pub fn walk(&self, order: TraversalOrder) -> Walker<'_> {
        Walker::new(self, order)
    }
}
