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

/// An ordered tuple of vertex indices into some mesh's vertex buffer.
/// A cell of D+1 vertices is a D-simplex. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    indices: SmallVec<[usize; 4]>,
}

impl Cell {
    pub fn new<I>(indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Cell {
            indices: indices.into_iter().collect(),
        }
    }

    pub fn vertex_indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn num_vertices(&self) -> usize {
        self.indices.len()
    }

    /// Topological dimension: one less than the vertex count.
    pub fn dimension(&self) -> usize {
        self.indices.len().saturating_sub(1)
    }
}

impl From<&[usize]> for Cell {
    fn from(indices: &[usize]) -> Self {
        Cell::new(indices.iter().copied())
    }
}

impl<const K: usize> From<[usize; K]> for Cell {
    fn from(indices: [usize; K]) -> Self {
        Cell::new(indices)
    }
}
