/*!
# Graph Hash Digests

This module provides the [`MazeGraphDigest`] trait, which computes **hash-based digests** of maze
graphs that are independent of the storage strategy.

The digest encodes:
- the number of vertices,
- the sorted vertex list, and
- the sorted list of normalized edges, each followed by its wall flag,

before feeding them into a cryptographic hash function.

## Example
```
use mazegraph::{prelude::*, repr::digest::MazeGraphDigest};

let (a, b) = (Coordinates::new(0, 0), Coordinates::new(0, 1));

let mut edge_list = EdgeListGraph::new();
edge_list.add_vertices(&[a, b]);
edge_list.add_edge(a, b, true);

let mut matrix = IncidenceMatrixGraph::new();
matrix.add_vertices(&[b, a]);
matrix.add_edge(b, a, true);

assert_eq!(edge_list.digest_sha256(), matrix.digest_sha256());
assert_eq!(edge_list.digest_sha256().len(), 64);
```
*/

use std::fmt::LowerHex;

use ::digest::{Digest, Output};
use itertools::Itertools;

use super::*;

/// Trait for computing a **canonical hash digest** of a maze graph.
///
/// Digests are
/// - **Representation independent**: works with any [`MazeGraph`]; insertion order and edge
///   orientation do not matter.
/// - **Wall sensitive**: toggling a single wall changes the digest.
pub trait MazeGraphDigest {
    /// Computes a digest of the graph using the provided hash function `D`.
    ///
    /// The result is returned as a **hexadecimal string**.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    ///
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

impl<G> MazeGraphDigest for G
where
    G: MazeGraph + ?Sized,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        let encode = |hasher: &mut D, c: Coordinates| {
            hasher.update(c.row().to_le_bytes());
            hasher.update(c.col().to_le_bytes());
        };

        // first encode the vertex set
        hasher.update(self.number_of_vertices().to_le_bytes());
        for c in self.vertices().iter().copied().sorted_unstable() {
            encode(&mut hasher, c);
        }

        // then append a sorted edge list with wall flags
        let edges = self.edges().map(|e| e.normalized()).sorted_unstable();
        for WallEdge {
            edge: Edge(u, v),
            wall,
        } in edges
        {
            encode(&mut hasher, u);
            encode(&mut hasher, v);
            hasher.update([wall as u8]);
        }

        format!("{:x}", hasher.finalize())
    }
}
