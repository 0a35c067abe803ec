use derive_more::Display;
use value_tree::{Kind, Path};

/// Errors raised by the explorer itself
///
/// Failures inside caller-supplied functions are reported through
/// `anyhow::Error` instead.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ExplorerError {
    /// The tree handed to [`Explorer::new`](crate::Explorer::new) is not a map
    #[display(fmt = "invalid input: expected a map at the root, found a {}", found)]
    InvalidInput { found: Kind },

    /// A selected path does not lead through containers of the explored tree
    ///
    /// Paths produced by walking the tree always lead through its containers,
    /// so [`Explorer::explore`](crate::Explorer::explore) and
    /// [`Explorer::diff`](crate::Explorer::diff) never return this; it only
    /// guards output assembly against paths from anywhere else.
    #[display(fmt = "path {} does not match the explored tree", path)]
    PathMismatch { path: Path },
}

impl std::error::Error for ExplorerError {}
