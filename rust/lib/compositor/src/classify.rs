use std::collections::HashSet;
use std::fmt;

use crate::key::TypeKey;

/// Which submodel conventions an item's impersonation uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Block,
    Item,
}

impl Kind {
    /// Path segment used in model references.
    pub fn word(self) -> &'static str {
        match self {
            Kind::Block => "block",
            Kind::Item => "item",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word())
    }
}

/// An item is a `Block` iff a block with the exact same identifier exists.
pub fn classify(item: &TypeKey, blocks: &HashSet<String>) -> Kind {
    if blocks.contains(&item.as_string()) {
        Kind::Block
    } else {
        Kind::Item
    }
}
