use std::fmt::{Debug, Display};

use crate::Coordinates;

/// An edge is defined by two cells/endpoints.
/// Maze graphs are undirected, so `Edge(u, v)` and `Edge(v, u)` describe the same connection;
/// use [`Edge::normalized`] or [`Edge::connects`] when comparing.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Coordinates, pub Coordinates);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the smaller endpoint comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the smaller endpoint comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns true if the edge joins `u` and `v` in either orientation
    pub fn connects(&self, u: Coordinates, v: Coordinates) -> bool {
        (self.0 == u && self.1 == v) || (self.0 == v && self.1 == u)
    }

    /// Returns the endpoint opposite to `u`, or `None` if `u` is not an endpoint
    pub fn opposite(&self, u: Coordinates) -> Option<Coordinates> {
        if self.0 == u {
            Some(self.1)
        } else if self.1 == u {
            Some(self.0)
        } else {
            None
        }
    }
}

impl<A: Into<Coordinates>, B: Into<Coordinates>> From<(A, B)> for Edge {
    fn from(value: (A, B)) -> Self {
        Edge(value.0.into(), value.1.into())
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge together with its wall flag: `wall == true` blocks the passage between both cells
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WallEdge {
    pub edge: Edge,
    pub wall: bool,
}

impl WallEdge {
    pub fn new(u: Coordinates, v: Coordinates, wall: bool) -> Self {
        Self {
            edge: Edge(u, v),
            wall,
        }
    }

    /// Returns the same record with its edge normalized
    pub fn normalized(&self) -> Self {
        Self {
            edge: self.edge.normalized(),
            wall: self.wall,
        }
    }
}

impl<A: Into<Coordinates>, B: Into<Coordinates>> From<(A, B, bool)> for WallEdge {
    fn from(value: (A, B, bool)) -> Self {
        WallEdge::new(value.0.into(), value.1.into(), value.2)
    }
}

impl From<&WallEdge> for WallEdge {
    fn from(value: &WallEdge) -> Self {
        *value
    }
}

impl Display for WallEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.wall {
            write!(f, "{}|{}", self.edge.0, self.edge.1)
        } else {
            write!(f, "{}", self.edge)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn unordered_queries() {
        let a = Coordinates::new(0, 0);
        let b = Coordinates::new(0, 1);
        let c = Coordinates::new(1, 1);

        let e = Edge(b, a);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), Edge(a, b));
        assert_eq!(e.reverse(), Edge(a, b));
        assert!(e.connects(a, b));
        assert!(e.connects(b, a));
        assert!(!e.connects(a, c));

        assert_eq!(e.opposite(a), Some(b));
        assert_eq!(e.opposite(b), Some(a));
        assert_eq!(e.opposite(c), None);

        assert!(Edge(c, c).is_loop());
        assert_eq!(Edge::from(((1, 1), (0, 1))), Edge(c, b));
    }

    #[test]
    fn display() {
        let w = WallEdge::new(Coordinates::new(0, 0), Coordinates::new(1, 0), true);
        assert_eq!(format!("{w}"), "(0,0)|(1,0)");
        assert_eq!(format!("{}", w.edge), "(0,0)-(1,0)");
        assert_eq!(w.normalized(), w);
    }
}
