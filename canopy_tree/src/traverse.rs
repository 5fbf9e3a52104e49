// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy tree walkers.

use smallvec::SmallVec;

use crate::{NodeId, Tree};

/// Depth-first pre-order walker over a node's descendants.
///
/// Created by [`Tree::descendants`]. Yields each descendant of the start node
/// exactly once (the start node itself is not yielded) for an acyclic tree.
///
/// Children of a yielded node are scheduled lazily on the *next* call to
/// [`Iterator::next`], which is what allows [`Descendants::skip_subtree`] to
/// prune the most recently yielded node's subtree.
#[derive(Debug)]
pub struct Descendants<'a, T> {
    tree: &'a Tree<T>,
    stack: SmallVec<[NodeId; 16]>,
    last: Option<NodeId>,
    skip: bool,
}

impl<'a, T> Descendants<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: NodeId) -> Self {
        let mut stack = SmallVec::new();
        stack.extend(tree.children(start).iter().rev().copied());
        Self {
            tree,
            stack,
            last: None,
            skip: false,
        }
    }

    /// Skip the subtree of the most recently yielded node.
    ///
    /// Its descendants will not be visited; its siblings (and the rest of the
    /// tree) still will. Calling this before the first `next`, or more than
    /// once per yielded node, has no additional effect.
    pub fn skip_subtree(&mut self) {
        self.skip = true;
    }
}

impl<T> Iterator for Descendants<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if let Some(last) = self.last.take()
            && !self.skip
        {
            self.stack.extend(self.tree.children(last).iter().rev().copied());
        }
        self.skip = false;
        let next = self.stack.pop()?;
        self.last = Some(next);
        Some(next)
    }
}

/// Lazy walk from a node's immediate parent up to its root.
///
/// Created by [`Tree::ancestors`].
#[derive(Debug)]
pub struct Ancestors<'a, T> {
    tree: &'a Tree<T>,
    next: Option<NodeId>,
}

impl<'a, T> Ancestors<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: Option<NodeId>) -> Self {
        Self { tree, next: start }
    }
}

impl<T> Iterator for Ancestors<'_, T> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next.take()?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
