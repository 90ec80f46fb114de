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

use crate::mesh::cell::Cell;

/// Compressed per-vertex incident-cell table. For each vertex, the ids of
/// the cells touching it, in ascending cell order.
#[derive(Clone, Debug)]
pub struct VertexCellAdjacency {
    offsets: Vec<usize>,
    incident: Vec<usize>,
}

impl VertexCellAdjacency {
    pub(crate) fn build(num_vertices: usize, cells: &[Cell]) -> Self {
        let mut counts = vec![0usize; num_vertices];
        for cell in cells {
            for &v in cell.vertex_indices() {
                counts[v] += 1;
            }
        }

        let mut offsets = Vec::with_capacity(num_vertices + 1);
        let mut total = 0;
        offsets.push(0);
        for c in &counts {
            total += c;
            offsets.push(total);
        }

        let mut cursor = offsets.clone();
        let mut incident = vec![0usize; total];
        for (id, cell) in cells.iter().enumerate() {
            for &v in cell.vertex_indices() {
                incident[cursor[v]] = id;
                cursor[v] += 1;
            }
        }

        VertexCellAdjacency { offsets, incident }
    }

    pub fn incident_cells(&self, vertex: usize) -> &[usize] {
        &self.incident[self.offsets[vertex]..self.offsets[vertex + 1]]
    }

    pub fn incidence_count(&self, vertex: usize) -> usize {
        self.offsets[vertex + 1] - self.offsets[vertex]
    }

    pub fn num_vertices(&self) -> usize {
        self.offsets.len() - 1
    }
}
