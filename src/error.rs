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

use thiserror::Error;

/// Precondition violations surfaced by mesh construction and predicate
/// building. Degenerate-but-legal inputs (an empty mesh, an empty selection
/// result) are not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("cell {cell} references vertex {index}, but the mesh has {num_vertices} vertices")]
    VertexIndexOutOfBounds {
        cell: usize,
        index: usize,
        num_vertices: usize,
    },

    #[error("cell {cell} has no vertices")]
    EmptyCell { cell: usize },

    #[error("mixed cell dimensions in one mesh: {first} and {other}")]
    MixedCellDimensions { first: usize, other: usize },

    #[error("expected cells of dimension {expected}, found dimension {found}")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("cells of dimension {0} are not supported by the geometric kernel")]
    UnsupportedCellDimension(usize),

    #[error("ambient dimension {0} is not supported by the geometric kernel")]
    UnsupportedAmbientDimension(usize),

    #[error("skeleton dimension {requested} exceeds cell dimension {cell_dimension}")]
    SkeletonDimension {
        requested: usize,
        cell_dimension: usize,
    },
}
