use serde::{Deserialize, Serialize};

use crate::{node::Node, stylesheet::Stylesheet};

/// A rendered page: the node tree plus the stylesheet its class names refer to.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub node: Node,
    pub stylesheet: Stylesheet,
}

impl Document {
    /// Depth-first search for the node carrying `id`.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.node.find(id)
    }
}
