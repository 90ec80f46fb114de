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

use log::debug;
use rayon::prelude::*;

use crate::{
    error::Error,
    mesh::simplicial::SimplicialMesh,
    numeric::scalar::Scalar,
    select::predicate::{CellPredicate, InteriorPredicate, OverlapPredicate},
};

use std::ops::{Add, Div, Mul, Sub};

/// Filter a mesh's cells through a predicate.
///
/// Cells are evaluated independently in parallel; the output keeps the
/// input's relative cell order and shares its vertex buffer. An empty
/// result is a valid mesh, not an error.
pub fn extract<T, const N: usize, P>(
    predicate: &P,
    mesh: &SimplicialMesh<T, N>,
) -> SimplicialMesh<T, N>
where
    T: Scalar + Send + Sync,
    P: CellPredicate<T, N> + Sync,
{
    let keep: Vec<bool> = (0..mesh.num_cells())
        .into_par_iter()
        .map(|id| predicate.accepts(mesh, id))
        .collect();

    let cells = mesh
        .cells()
        .iter()
        .zip(&keep)
        .filter(|(_, keep)| **keep)
        .map(|(cell, _)| cell.clone())
        .collect::<Vec<_>>();
    debug!("retained {} of {} cells", cells.len(), mesh.num_cells());

    mesh.with_cells(cells)
}

/// Cells of `target` that intersect some cell of `selection`.
///
/// Both meshes must hold cells of the same dimension; mismatched inputs are
/// rejected at construction.
pub fn extract_by_overlap<T, const N: usize>(
    selection: &SimplicialMesh<T, N>,
    target: &SimplicialMesh<T, N>,
) -> Result<SimplicialMesh<T, N>, Error>
where
    T: Scalar + Send + Sync,
    for<'a> &'a T: Add<&'a T, Output = T>
        + Sub<&'a T, Output = T>
        + Mul<&'a T, Output = T>
        + Div<&'a T, Output = T>,
{
    if let (Some(sel), Some(tgt)) = (selection.dimension(), target.dimension()) {
        if sel != tgt {
            return Err(Error::DimensionMismatch {
                expected: sel,
                found: tgt,
            });
        }
    }
    let predicate = OverlapPredicate::build(selection)?;
    Ok(extract(&predicate, target))
}

/// The interior (non-boundary) edges of a triangulated surface, as a mesh
/// over the same vertex buffer.
pub fn extract_interior_cells<T, const N: usize>(
    surface: &SimplicialMesh<T, N>,
) -> Result<SimplicialMesh<T, N>, Error>
where
    T: Scalar + Send + Sync,
{
    let predicate = InteriorPredicate::build(surface)?;
    if surface.num_cells() == 0 {
        return Ok(surface.with_cells(Vec::new()));
    }
    let edges = surface.skeleton(1)?;
    Ok(extract(&predicate, &edges))
}
