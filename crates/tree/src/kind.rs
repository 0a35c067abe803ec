//! The container/leaf tag traversal dispatches on

use derive_more::Display;

/// The kind of a node in a value tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Kind {
    /// A key-value container - children are addressed by key
    #[display(fmt = "map")]
    Map,
    /// An ordered container - children are addressed by index
    #[display(fmt = "list")]
    List,
    /// A leaf - cannot have children
    #[display(fmt = "scalar")]
    Scalar,
}

impl Kind {
    /// Returns true if this is a map or a list
    pub const fn is_container(self) -> bool {
        matches!(self, Kind::Map | Kind::List)
    }

    /// Returns true if this is a scalar
    pub const fn is_scalar(self) -> bool {
        matches!(self, Kind::Scalar)
    }
}
