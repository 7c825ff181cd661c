use serde::{Deserialize, Serialize};

use super::{Distance, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub tail: Vertex,
    pub head: Vertex,
    pub weight: Distance,
}

impl WeightedEdge {
    pub fn new(tail: Vertex, head: Vertex, weight: Distance) -> WeightedEdge {
        WeightedEdge { tail, head, weight }
    }

    /// Builds an edge from a `[tail, head, weight, ..]` row. Rows with fewer
    /// than three fields yield `None`, additional fields are ignored.
    pub fn from_row(row: &[i64]) -> Option<WeightedEdge> {
        match row {
            [tail, head, weight, ..] => Some(WeightedEdge::new(*tail, *head, *weight)),
            _ => None,
        }
    }

    pub fn reversed(&self) -> WeightedEdge {
        WeightedEdge {
            tail: self.head,
            head: self.tail,
            weight: self.weight,
        }
    }

    pub fn remove_tail(&self) -> TaillessEdge {
        TaillessEdge {
            head: self.head,
            weight: self.weight,
        }
    }

    pub fn to_row(&self) -> [i64; 3] {
        [self.tail, self.head, self.weight]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaillessEdge {
    pub head: Vertex,
    pub weight: Distance,
}

impl TaillessEdge {
    pub fn set_tail(&self, tail: Vertex) -> WeightedEdge {
        WeightedEdge {
            tail,
            head: self.head,
            weight: self.weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WeightedEdge;

    #[test]
    fn from_row_needs_three_fields() {
        assert_eq!(WeightedEdge::from_row(&[1, 2]), None);
        assert_eq!(WeightedEdge::from_row(&[]), None);
        assert_eq!(
            WeightedEdge::from_row(&[1, 2, 3, 99]),
            Some(WeightedEdge::new(1, 2, 3))
        );
    }

    #[test]
    fn reversed_keeps_weight() {
        let edge = WeightedEdge::new(4, 7, 11).reversed();
        assert_eq!(edge, WeightedEdge::new(7, 4, 11));
    }
}
