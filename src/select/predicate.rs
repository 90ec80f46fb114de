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

//! Per-cell boolean predicates over a reference mesh.
//!
//! The geometric variants pair a broad phase (box query against a
//! bounding-sphere octree built once from the reference mesh) with an exact
//! narrow phase, short-circuiting on the first accepting reference cell.
//! The interior variant is purely combinatorial. All predicates are pure:
//! repeated evaluation of the same cell returns the same answer.

use log::debug;

use crate::{
    error::Error,
    geometry::{
        bounding::{BoundingBox, BoundingSphere},
        octree::Octree,
        point::Point,
    },
    kernel::{closure::simplex_in_closure, overlap::simplex_overlap},
    mesh::{adjacency::VertexCellAdjacency, simplicial::SimplicialMesh},
    numeric::scalar::Scalar,
};

use std::ops::{Add, Div, Mul, Sub};

/// A pure boolean test over one cell of a target mesh.
pub trait CellPredicate<T: Scalar, const N: usize> {
    fn accepts(&self, mesh: &SimplicialMesh<T, N>, cell: usize) -> bool;
}

/// Octree over a reference mesh, shared by the geometric predicates.
/// `None` for a zero-cell reference: indexing nothing is undefined, so the
/// owning predicate degenerates to constant `false`.
struct ReferenceIndex<'r, T: Scalar, const N: usize> {
    reference: &'r SimplicialMesh<T, N>,
    octree: Option<Octree<T, N>>,
}

impl<'r, T: Scalar, const N: usize> ReferenceIndex<'r, T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    fn build(reference: &'r SimplicialMesh<T, N>) -> Result<Self, Error> {
        if reference.num_cells() == 0 {
            return Ok(ReferenceIndex {
                reference,
                octree: None,
            });
        }
        if N > 3 {
            return Err(Error::UnsupportedAmbientDimension(N));
        }
        if let Some(dim) = reference.dimension() {
            if dim > 2 {
                return Err(Error::UnsupportedCellDimension(dim));
            }
        }

        let spheres = (0..reference.num_cells())
            .map(|id| BoundingSphere::of_points(&reference.cell_vertices(id)))
            .collect();
        let octree = Octree::build(spheres);
        debug!("spatial index over {} reference cells", octree.len());

        Ok(ReferenceIndex {
            reference,
            octree: Some(octree),
        })
    }

    /// Broad phase + narrow phase. Returns true on the first reference cell
    /// whose bounding volume meets the candidate's and whose exact test
    /// accepts.
    fn any_hit<F>(&self, candidate: &[Point<T, N>], narrow: F) -> bool
    where
        F: Fn(&[Point<T, N>], &[Point<T, N>]) -> bool,
    {
        let Some(octree) = &self.octree else {
            return false;
        };
        let qbox = BoundingBox::of_points(candidate);
        let mut hits = Vec::new();
        octree.query(|center, halfsize| qbox.overlaps_cube(center, halfsize), &mut hits);
        for id in hits {
            if !octree.sphere(id).overlaps_cube(&qbox.center, &qbox.halfsize) {
                continue;
            }
            if narrow(candidate, &self.reference.cell_vertices(id)) {
                return true;
            }
        }
        false
    }
}

/// True iff the candidate cell intersects some cell of the reference mesh.
pub struct OverlapPredicate<'r, T: Scalar, const N: usize> {
    index: ReferenceIndex<'r, T, N>,
}

impl<'r, T: Scalar, const N: usize> OverlapPredicate<'r, T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn build(reference: &'r SimplicialMesh<T, N>) -> Result<Self, Error> {
        Ok(OverlapPredicate {
            index: ReferenceIndex::build(reference)?,
        })
    }
}

impl<'r, T: Scalar, const N: usize> CellPredicate<T, N> for OverlapPredicate<'r, T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    fn accepts(&self, mesh: &SimplicialMesh<T, N>, cell: usize) -> bool {
        let candidate = mesh.cell_vertices(cell);
        self.index
            .any_hit(&candidate, |cand, reference| simplex_overlap(cand, reference))
    }
}

/// True iff the candidate cell lies in the closure of some reference cell.
pub struct InClosurePredicate<'r, T: Scalar, const N: usize> {
    index: ReferenceIndex<'r, T, N>,
}

impl<'r, T: Scalar, const N: usize> InClosurePredicate<'r, T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    pub fn build(reference: &'r SimplicialMesh<T, N>) -> Result<Self, Error> {
        Ok(InClosurePredicate {
            index: ReferenceIndex::build(reference)?,
        })
    }
}

impl<'r, T: Scalar, const N: usize> CellPredicate<T, N> for InClosurePredicate<'r, T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    fn accepts(&self, mesh: &SimplicialMesh<T, N>, cell: usize) -> bool {
        let candidate = mesh.cell_vertices(cell);
        self.index
            .any_hit(&candidate, |cand, reference| simplex_in_closure(cand, reference))
    }
}

/// Classifies edges of a triangulated surface as interior or boundary.
///
/// An edge is interior iff its two endpoints share exactly two incident
/// triangles. No geometry is consulted; the candidate mesh must index into
/// the same vertex buffer as the surface the predicate was built from.
pub struct InteriorPredicate {
    adjacency: Option<VertexCellAdjacency>,
}

impl InteriorPredicate {
    /// Fails unless `surface` is 2-dimensional. A zero-cell surface yields
    /// the constant-false predicate.
    pub fn build<T: Scalar, const N: usize>(
        surface: &SimplicialMesh<T, N>,
    ) -> Result<Self, Error> {
        if surface.num_cells() == 0 {
            return Ok(InteriorPredicate { adjacency: None });
        }
        if let Some(dim) = surface.dimension() {
            if dim != 2 {
                return Err(Error::DimensionMismatch {
                    expected: 2,
                    found: dim,
                });
            }
        }
        Ok(InteriorPredicate {
            adjacency: Some(surface.vertex_to_cell_adjacency()),
        })
    }
}

impl<T: Scalar, const N: usize> CellPredicate<T, N> for InteriorPredicate {
    fn accepts(&self, mesh: &SimplicialMesh<T, N>, cell: usize) -> bool {
        let Some(adjacency) = &self.adjacency else {
            return false;
        };
        let vs = mesh.cell(cell).vertex_indices();
        assert!(
            vs.len() == 2,
            "interior classification is defined on edge cells"
        );
        shared_count(
            adjacency.incident_cells(vs[0]),
            adjacency.incident_cells(vs[1]),
        ) == 2
    }
}

/// Size of the intersection of two ascending id lists.
fn shared_count(a: &[usize], b: &[usize]) -> usize {
    let (mut i, mut j, mut count) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            count += 1;
            i += 1;
            j += 1;
        } else if a[i] < b[j] {
            i += 1;
        } else {
            j += 1;
        }
    }
    count
}
