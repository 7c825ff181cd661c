use ahash::{HashSet, HashSetExt};

use crate::graphs::Vertex;

pub trait VertexExpandedData {
    /// Marks `vertex` as expanded and returns whether it already was.
    fn expand(&mut self, vertex: Vertex) -> bool;

    fn is_expanded(&self, vertex: Vertex) -> bool;
}

pub struct VertexExpandedDataHashSet {
    expanded: HashSet<Vertex>,
}

impl Default for VertexExpandedDataHashSet {
    fn default() -> Self {
        Self::new()
    }
}

impl VertexExpandedDataHashSet {
    pub fn new() -> Self {
        VertexExpandedDataHashSet {
            expanded: HashSet::new(),
        }
    }
}

impl VertexExpandedData for VertexExpandedDataHashSet {
    fn expand(&mut self, vertex: Vertex) -> bool {
        !self.expanded.insert(vertex)
    }

    fn is_expanded(&self, vertex: Vertex) -> bool {
        self.expanded.contains(&vertex)
    }
}
