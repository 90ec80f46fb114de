// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use smallvec::SmallVec;

use crate::{
    error::Error,
    geometry::point::Point,
    mesh::{adjacency::VertexCellAdjacency, cell::Cell},
    numeric::scalar::Scalar,
};

use std::{collections::HashSet, sync::Arc};

/// A simplicial mesh: a shared, read-only vertex buffer plus an ordered
/// sequence of cells of uniform dimension.
///
/// Submeshes always reuse the *same* vertex buffer as their source, so
/// vertex indices stay valid for cross-referencing back to the original.
#[derive(Clone, Debug)]
pub struct SimplicialMesh<T: Scalar, const N: usize> {
    vertices: Arc<Vec<Point<T, N>>>,
    cells: Vec<Cell>,
}

impl<T: Scalar, const N: usize> SimplicialMesh<T, N> {
    pub fn new(vertices: Vec<Point<T, N>>, cells: Vec<Cell>) -> Result<Self, Error> {
        Self::from_shared(Arc::new(vertices), cells)
    }

    /// Build a mesh over an already-shared vertex buffer.
    pub fn from_shared(vertices: Arc<Vec<Point<T, N>>>, cells: Vec<Cell>) -> Result<Self, Error> {
        let mut arity = None;
        for (id, cell) in cells.iter().enumerate() {
            if cell.num_vertices() == 0 {
                return Err(Error::EmptyCell { cell: id });
            }
            match arity {
                None => arity = Some(cell.num_vertices()),
                Some(a) if a != cell.num_vertices() => {
                    return Err(Error::MixedCellDimensions {
                        first: a - 1,
                        other: cell.dimension(),
                    });
                }
                _ => {}
            }
            for &v in cell.vertex_indices() {
                if v >= vertices.len() {
                    return Err(Error::VertexIndexOutOfBounds {
                        cell: id,
                        index: v,
                        num_vertices: vertices.len(),
                    });
                }
            }
        }
        Ok(SimplicialMesh { vertices, cells })
    }

    /// Same vertex buffer, different cell list. The cells must already be
    /// valid against this mesh's buffer.
    pub(crate) fn with_cells(&self, cells: Vec<Cell>) -> Self {
        SimplicialMesh {
            vertices: Arc::clone(&self.vertices),
            cells,
        }
    }

    pub fn vertex_buffer(&self) -> &Arc<Vec<Point<T, N>>> {
        &self.vertices
    }

    pub fn vertex(&self, i: usize) -> &Point<T, N> {
        &self.vertices[i]
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, id: usize) -> &Cell {
        &self.cells[id]
    }

    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Topological dimension of the cells, `None` for a zero-cell mesh.
    pub fn dimension(&self) -> Option<usize> {
        self.cells.first().map(Cell::dimension)
    }

    /// Coordinates of one cell's vertices, in cell order.
    pub fn cell_vertices(&self, id: usize) -> SmallVec<[Point<T, N>; 4]> {
        self.cells[id]
            .vertex_indices()
            .iter()
            .map(|&v| self.vertices[v].clone())
            .collect()
    }

    /// All distinct k-dimensional sub-simplices, over the same vertex
    /// buffer. Each sub-simplex is emitted once, at its first encounter,
    /// with vertex order inherited from the owning cell.
    pub fn skeleton(&self, k: usize) -> Result<Self, Error> {
        let Some(dim) = self.dimension() else {
            return Ok(self.with_cells(Vec::new()));
        };
        if k > dim {
            return Err(Error::SkeletonDimension {
                requested: k,
                cell_dimension: dim,
            });
        }
        let choose = index_combinations(dim + 1, k + 1);
        let mut seen: HashSet<SmallVec<[usize; 4]>> = HashSet::new();
        let mut out = Vec::new();
        for cell in &self.cells {
            let vs = cell.vertex_indices();
            for positions in &choose {
                let sub: SmallVec<[usize; 4]> = positions.iter().map(|&p| vs[p]).collect();
                let mut key = sub.clone();
                key.sort_unstable();
                if seen.insert(key) {
                    out.push(Cell::new(sub));
                }
            }
        }
        Ok(self.with_cells(out))
    }

    /// Per-vertex incident-cell table.
    pub fn vertex_to_cell_adjacency(&self) -> VertexCellAdjacency {
        VertexCellAdjacency::build(self.num_vertices(), &self.cells)
    }
}

/// All ascending position tuples of length `k` drawn from `0..arity`.
fn index_combinations(arity: usize, k: usize) -> Vec<SmallVec<[usize; 4]>> {
    fn rec(
        start: usize,
        arity: usize,
        k: usize,
        cur: &mut SmallVec<[usize; 4]>,
        out: &mut Vec<SmallVec<[usize; 4]>>,
    ) {
        if cur.len() == k {
            out.push(cur.clone());
            return;
        }
        for i in start..arity {
            cur.push(i);
            rec(i + 1, arity, k, cur, out);
            cur.pop();
        }
    }

    let mut out = Vec::new();
    let mut cur = SmallVec::new();
    rec(0, arity, k, &mut cur, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::float64::F64;

    fn triangle_pair() -> SimplicialMesh<F64, 2> {
        // two triangles sharing the edge (1, 2)
        let vertices = vec![
            Point::from_vals([0.0, 0.0]),
            Point::from_vals([1.0, 0.0]),
            Point::from_vals([0.0, 1.0]),
            Point::from_vals([1.0, 1.0]),
        ];
        let cells = vec![Cell::from([0, 1, 2]), Cell::from([1, 3, 2])];
        SimplicialMesh::new(vertices, cells).unwrap()
    }

    #[test]
    fn skeleton_edges_are_deduplicated() {
        let mesh = triangle_pair();
        let edges = mesh.skeleton(1).unwrap();
        // 5 distinct edges, not 2 * 3
        assert_eq!(edges.num_cells(), 5);
        assert!(Arc::ptr_eq(edges.vertex_buffer(), mesh.vertex_buffer()));
    }

    #[test]
    fn skeleton_vertices() {
        let mesh = triangle_pair();
        let verts = mesh.skeleton(0).unwrap();
        assert_eq!(verts.num_cells(), 4);
        assert_eq!(verts.dimension(), Some(0));
    }

    #[test]
    fn skeleton_above_dimension_fails() {
        let mesh = triangle_pair();
        assert!(matches!(
            mesh.skeleton(3),
            Err(Error::SkeletonDimension { .. })
        ));
    }

    #[test]
    fn invalid_index_is_rejected() {
        let vertices = vec![Point::<F64, 2>::from_vals([0.0, 0.0])];
        let err = SimplicialMesh::new(vertices, vec![Cell::from([0, 7])]);
        assert!(matches!(err, Err(Error::VertexIndexOutOfBounds { .. })));
    }

    #[test]
    fn mixed_arity_is_rejected() {
        let vertices = vec![
            Point::<F64, 2>::from_vals([0.0, 0.0]),
            Point::from_vals([1.0, 0.0]),
            Point::from_vals([0.0, 1.0]),
        ];
        let err = SimplicialMesh::new(vertices, vec![Cell::from([0, 1, 2]), Cell::from([0, 1])]);
        assert!(matches!(err, Err(Error::MixedCellDimensions { .. })));
    }
}
