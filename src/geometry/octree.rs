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

use crate::{
    geometry::{bounding::BoundingSphere, point::Point},
    numeric::scalar::Scalar,
};

use std::{array, ops::{Add, Mul, Sub}};

const LEAF_CAPACITY: usize = 8;
const MAX_DEPTH: usize = 24;

/// A static octree over one bounding sphere per cell.
///
/// The tree partitions sphere *centers*; a sphere may well poke out of the
/// octant its center falls into, so every node carries the largest radius in
/// its subtree and queries see the node cube inflated by that amount. Built
/// once from a fixed mesh snapshot; there is no incremental update.
pub struct Octree<T: Scalar, const N: usize> {
    center: Point<T, N>,
    halfsize: T,
    root: Node<T>,
    spheres: Vec<BoundingSphere<T, N>>,
}

struct Node<T> {
    max_radius: T,
    kind: NodeKind<T>,
}

enum NodeKind<T> {
    Leaf(Vec<usize>),
    Branch(Vec<Node<T>>),
}

impl<T: Scalar, const N: usize> Octree<T, N>
where
    for<'a> &'a T: Add<&'a T, Output = T> + Sub<&'a T, Output = T> + Mul<&'a T, Output = T>,
{
    /// Build the index. Ids are positions in `spheres`.
    ///
    /// Panics on an empty input; callers must special-case the zero-cell
    /// mesh before asking for an index.
    pub fn build(spheres: Vec<BoundingSphere<T, N>>) -> Self {
        assert!(
            !spheres.is_empty(),
            "cannot build an octree over zero bounding volumes"
        );

        // Root cube enclosing all sphere centers.
        let mut lo: [T; N] = array::from_fn(|i| spheres[0].center[i].clone());
        let mut hi = lo.clone();
        for s in &spheres {
            for i in 0..N {
                if s.center[i] < lo[i] {
                    lo[i] = s.center[i].clone();
                }
                if s.center[i] > hi[i] {
                    hi[i] = s.center[i].clone();
                }
            }
        }
        let half = T::from_num_den(1, 2);
        let center = Point::new(array::from_fn(|i| &(&lo[i] + &hi[i]) * &half));
        let mut halfsize = T::zero();
        for i in 0..N {
            let h = &(&hi[i] - &lo[i]) * &half;
            if h > halfsize {
                halfsize = h;
            }
        }

        let ids: Vec<usize> = (0..spheres.len()).collect();
        let root = Self::build_node(&spheres, ids, &center, &halfsize, 0);
        debug!("octree built over {} bounding spheres", spheres.len());

        Octree {
            center,
            halfsize,
            root,
            spheres,
        }
    }

    fn build_node(
        spheres: &[BoundingSphere<T, N>],
        ids: Vec<usize>,
        center: &Point<T, N>,
        halfsize: &T,
        depth: usize,
    ) -> Node<T> {
        let mut max_radius = T::zero();
        for &id in &ids {
            if spheres[id].radius > max_radius {
                max_radius = spheres[id].radius.clone();
            }
        }

        // Depth cap keeps coincident centers from splitting forever.
        if ids.len() <= LEAF_CAPACITY || depth >= MAX_DEPTH {
            return Node {
                max_radius,
                kind: NodeKind::Leaf(ids),
            };
        }

        let mut buckets: Vec<Vec<usize>> = (0..1usize << N).map(|_| Vec::new()).collect();
        for id in ids {
            let mut oct = 0usize;
            for i in 0..N {
                if spheres[id].center[i] > center[i] {
                    oct |= 1 << i;
                }
            }
            buckets[oct].push(id);
        }

        let half = T::from_num_den(1, 2);
        let quarter = halfsize * &half;
        let children = buckets
            .into_iter()
            .enumerate()
            .map(|(oct, bucket)| {
                let child_center = Point::new(array::from_fn(|i| {
                    if oct >> i & 1 == 1 {
                        &center[i] + &quarter
                    } else {
                        &center[i] - &quarter
                    }
                }));
                Self::build_node(spheres, bucket, &child_center, &quarter, depth + 1)
            })
            .collect();

        Node {
            max_radius,
            kind: NodeKind::Branch(children),
        }
    }

    /// Collect the ids of all leaves whose (inflated) cube passes the
    /// caller-supplied region test. The test decides pruning only; exact
    /// acceptance stays with the caller.
    pub fn query<F>(&self, mut region: F, out: &mut Vec<usize>)
    where
        F: FnMut(&Point<T, N>, &T) -> bool,
    {
        Self::visit(&self.root, &self.center, &self.halfsize, &mut region, out);
    }

    fn visit<F>(
        node: &Node<T>,
        center: &Point<T, N>,
        halfsize: &T,
        region: &mut F,
        out: &mut Vec<usize>,
    ) where
        F: FnMut(&Point<T, N>, &T) -> bool,
    {
        if let NodeKind::Leaf(ids) = &node.kind {
            if ids.is_empty() {
                return;
            }
        }
        let reach = halfsize + &node.max_radius;
        if !region(center, &reach) {
            return;
        }
        match &node.kind {
            NodeKind::Leaf(ids) => out.extend_from_slice(ids),
            NodeKind::Branch(children) => {
                let half = T::from_num_den(1, 2);
                let quarter = halfsize * &half;
                for (oct, child) in children.iter().enumerate() {
                    let child_center = Point::new(array::from_fn(|i| {
                        if oct >> i & 1 == 1 {
                            &center[i] + &quarter
                        } else {
                            &center[i] - &quarter
                        }
                    }));
                    Self::visit(child, &child_center, &quarter, region, out);
                }
            }
        }
    }

    pub fn sphere(&self, id: usize) -> &BoundingSphere<T, N> {
        &self.spheres[id]
    }

    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}
