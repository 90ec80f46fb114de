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

use std::sync::Arc;

use submesh::Error;
use submesh::geometry::point::Point;
use submesh::mesh::cell::Cell;
use submesh::mesh::simplicial::SimplicialMesh;
use submesh::numeric::float64::F64;
use submesh::select::{CellPredicate, InteriorPredicate, extract_interior_cells};

fn p3(x: f64, y: f64, z: f64) -> Point<F64, 3> {
    Point::from_vals([x, y, z])
}

/// Closed surface of a tetrahedron: four triangles, six edges, no boundary.
fn tetrahedron_surface() -> SimplicialMesh<F64, 3> {
    let vertices = vec![
        p3(0.0, 0.0, 0.0),
        p3(1.0, 0.0, 0.0),
        p3(0.0, 1.0, 0.0),
        p3(0.0, 0.0, 1.0),
    ];
    let cells = vec![
        Cell::from([0, 1, 2]),
        Cell::from([0, 1, 3]),
        Cell::from([0, 2, 3]),
        Cell::from([1, 2, 3]),
    ];
    SimplicialMesh::new(vertices, cells).unwrap()
}

#[test]
fn closed_surface_has_only_interior_edges() {
    let surface = tetrahedron_surface();
    let interior = extract_interior_cells(&surface).unwrap();

    assert_eq!(interior.num_cells(), 6);
    assert_eq!(interior.dimension(), Some(1));
    assert!(Arc::ptr_eq(interior.vertex_buffer(), surface.vertex_buffer()));
}

#[test]
fn single_triangle_has_no_interior_edges() {
    let surface = SimplicialMesh::new(
        vec![p3(0.0, 0.0, 0.0), p3(1.0, 0.0, 0.0), p3(0.0, 1.0, 0.0)],
        vec![Cell::from([0, 1, 2])],
    )
    .unwrap();

    let interior = extract_interior_cells(&surface).unwrap();
    assert_eq!(interior.num_cells(), 0);
}

#[test]
fn shared_edge_is_the_only_interior_one() {
    // two triangles glued along (1, 2)
    let surface = SimplicialMesh::new(
        vec![
            p3(0.0, 0.0, 0.0),
            p3(1.0, 0.0, 0.0),
            p3(0.0, 1.0, 0.0),
            p3(1.0, 1.0, 0.0),
        ],
        vec![Cell::from([0, 1, 2]), Cell::from([1, 3, 2])],
    )
    .unwrap();

    let interior = extract_interior_cells(&surface).unwrap();
    assert_eq!(interior.num_cells(), 1);
    assert_eq!(interior.cell(0).vertex_indices(), &[1, 2]);
}

#[test]
fn boundary_edges_see_one_incident_cell() {
    let surface = SimplicialMesh::new(
        vec![p3(0.0, 0.0, 0.0), p3(1.0, 0.0, 0.0), p3(0.0, 1.0, 0.0)],
        vec![Cell::from([0, 1, 2])],
    )
    .unwrap();

    let adjacency = surface.vertex_to_cell_adjacency();
    for v in 0..3 {
        assert_eq!(adjacency.incidence_count(v), 1);
    }

    let predicate = InteriorPredicate::build(&surface).unwrap();
    let edges = surface.skeleton(1).unwrap();
    for id in 0..edges.num_cells() {
        assert!(!predicate.accepts(&edges, id));
    }
}

#[test]
fn non_surface_mesh_is_rejected() {
    let curve = SimplicialMesh::<F64, 3>::new(
        vec![p3(0.0, 0.0, 0.0), p3(1.0, 0.0, 0.0)],
        vec![Cell::from([0, 1])],
    )
    .unwrap();

    assert_eq!(
        InteriorPredicate::build(&curve).err(),
        Some(Error::DimensionMismatch {
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn empty_surface_yields_an_empty_edge_mesh() {
    let empty = SimplicialMesh::<F64, 3>::new(Vec::new(), Vec::new()).unwrap();
    let interior = extract_interior_cells(&empty).unwrap();
    assert_eq!(interior.num_cells(), 0);
}
