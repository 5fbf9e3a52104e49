// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Tree: a generational-arena scene hierarchy with pruned traversal.
//!
//! The tree owns its nodes in a slot arena and hands out [`NodeId`] handles.
//! Each node carries a name, an ordered list of children (the owning
//! direction), a non-owning back-reference to its parent, and a caller-chosen
//! payload. The parent↔child invariant is maintained transactionally by
//! [`Tree::set_parent`]: a node is in its parent's child list exactly when its
//! parent field points back at that parent.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_tree::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.insert_named("root", ());
//! let arm = tree.insert_named("arm", ());
//! let hand = tree.insert_named("hand", ());
//! tree.set_parent(arm, Some(root));
//! tree.set_parent(hand, Some(arm));
//!
//! assert_eq!(tree.path(hand), "/root/arm/hand");
//! assert_eq!(tree.root_of(hand), root);
//!
//! // Depth-first pre-order, with caller-driven pruning.
//! let mut walk = tree.descendants(root);
//! while let Some(node) = walk.next() {
//!     if node == arm {
//!         walk.skip_subtree(); // `hand` is skipped
//!     }
//! }
//! ```
//!
//! ## Handles
//!
//! [`NodeId`] is generational: removing a node bumps its slot's generation, so
//! a stale id never aliases a node that later reuses the slot. Indexing with a
//! stale id panics; [`Tree::get`] returns `None` instead.
//!
//! ## Caller contract
//!
//! The tree assumes acyclic structure. [`Tree::set_parent`] rejects a parent
//! drawn from the node's own subtree in debug builds; release builds do not
//! check, and traversal over a cyclic structure is undefined. Structural
//! mutation during an in-progress traversal is prevented by the borrow
//! checker (walkers borrow the tree).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;

mod traverse;

pub use traverse::{Ancestors, Descendants};

/// Default name given to nodes inserted via [`Tree::insert`].
pub const DEFAULT_NAME: &str = "untitled";

/// Generational handle of a node in a [`Tree`].
///
/// Stale ids (handles to removed nodes) never alias a different live node,
/// because the slot generation must match. The generation increments on
/// removal and never decreases; behavior on generation overflow is
/// unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(u32, u32);

impl NodeId {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Node<T> {
    name: String,
    parent: Option<NodeId>,
    children: SmallVec<[NodeId; 4]>,
    value: T,
}

#[derive(Clone, Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// An arena tree of named nodes carrying payloads of type `T`.
///
/// Nodes start detached; [`Tree::set_parent`] and [`Tree::append`] build the
/// hierarchy. A node with no parent is a root; a tree may hold any number of
/// roots (and detached subtrees) at once.
#[derive(Clone, Debug, Default)]
pub struct Tree<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Number of live nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when the tree holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` when `id` refers to a live node.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.slots
            .get(id.idx())
            .is_some_and(|slot| slot.generation == id.1 && slot.node.is_some())
    }

    /// Inserts a detached node named [`DEFAULT_NAME`].
    pub fn insert(&mut self, value: T) -> NodeId {
        self.insert_named(DEFAULT_NAME, value)
    }

    /// Inserts a detached node with the given name.
    pub fn insert_named(&mut self, name: impl Into<String>, value: T) -> NodeId {
        let node = Node {
            name: name.into(),
            parent: None,
            children: SmallVec::new(),
            value,
        };
        self.len += 1;
        if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.node = Some(node);
            NodeId::new(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).expect("arena slot count exceeds u32");
            self.slots.push(Slot {
                generation: 0,
                node: Some(node),
            });
            NodeId::new(idx, 0)
        }
    }

    /// Removes a node, severing parent↔child references symmetrically.
    ///
    /// The node is detached from its parent's child list and each of its
    /// children becomes a detached root. `id` becomes stale.
    pub fn remove(&mut self, id: NodeId) {
        if !self.contains(id) {
            return;
        }
        self.detach_from_parent(id);
        let node = self.free_slot(id);
        for child in node.children {
            self.node_mut(child).parent = None;
        }
    }

    /// Removes a node and its entire subtree.
    pub fn remove_subtree(&mut self, id: NodeId) {
        if !self.contains(id) {
            return;
        }
        let doomed: Vec<NodeId> = self.descendants(id).collect();
        self.detach_from_parent(id);
        self.free_slot(id);
        for node in doomed {
            self.free_slot(node);
        }
    }

    /// The payload of a node, or `None` for a stale id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.slots.get(id.idx()).and_then(|slot| {
            (slot.generation == id.1)
                .then_some(slot.node.as_ref())
                .flatten()
                .map(|node| &node.value)
        })
    }

    /// Mutable payload of a node, or `None` for a stale id.
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut T> {
        self.slots.get_mut(id.idx()).and_then(|slot| {
            (slot.generation == id.1)
                .then_some(slot.node.as_mut())
                .flatten()
                .map(|node| &mut node.value)
        })
    }

    /// The node's name.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    /// Renames a node. Paths are recomputed per call, so the rename is
    /// reflected by every subsequent [`Tree::path`].
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        self.node_mut(id).name = name.into();
    }

    /// The node's parent, or `None` for a root.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    /// The node's children, in order.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Reparents a node transactionally.
    ///
    /// Removes `id` from its current parent's child list (when present) and
    /// appends it to the new parent's (when not already present), so that
    /// afterwards `parent(c) == Some(p)` holds iff `children(p)` contains `c`
    /// exactly once. Passing `None` just detaches. Safe to call repeatedly.
    ///
    /// Reparenting under the same parent moves the node to the end of the
    /// child list.
    ///
    /// # Panics
    ///
    /// Panics if either id is stale. Debug builds additionally panic when the
    /// new parent lies in `id`'s own subtree (which would create a cycle);
    /// release builds do not check.
    pub fn set_parent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        self.detach_from_parent(id);
        match new_parent {
            None => self.node_mut(id).parent = None,
            Some(parent) => {
                #[cfg(debug_assertions)]
                self.debug_check_acyclic(id, parent);
                self.node_mut(id).parent = Some(parent);
                if !self.node(parent).children.contains(&id) {
                    self.node_mut(parent).children.push(id);
                }
            }
        }
    }

    /// Appends nodes as children of `parent`.
    ///
    /// Ids already present as children are filtered out (the call is
    /// idempotent and does not disturb the order of existing children);
    /// the relative order of newly appended ids is preserved.
    pub fn append(&mut self, parent: NodeId, ids: &[NodeId]) {
        for &id in ids {
            if self.node(parent).children.contains(&id) {
                continue;
            }
            self.set_parent(id, Some(parent));
        }
    }

    /// Inserts nodes as children of `parent` starting at `index`.
    ///
    /// Same filtering as [`Tree::append`]. `index` must be at most the
    /// current child count.
    pub fn insert_children(&mut self, parent: NodeId, index: usize, ids: &[NodeId]) {
        let mut at = index;
        for &id in ids {
            if self.node(parent).children.contains(&id) {
                continue;
            }
            #[cfg(debug_assertions)]
            self.debug_check_acyclic(id, parent);
            self.detach_from_parent(id);
            self.node_mut(id).parent = Some(parent);
            self.node_mut(parent).children.insert(at, id);
            at += 1;
        }
    }

    /// Detaches all children of `parent`, emptying its child list.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children = core::mem::take(&mut self.node_mut(parent).children);
        for child in children {
            self.node_mut(child).parent = None;
        }
    }

    /// Walks the parent chain to the node with no parent. O(depth).
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    #[must_use]
    pub fn root_of(&self, id: NodeId) -> NodeId {
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            current = parent;
        }
        current
    }

    /// Root-to-self name sequence joined by `/`, with a leading `/`.
    ///
    /// Recomputed on every call; names are not ids and paths are not unique.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    #[must_use]
    pub fn path(&self, id: NodeId) -> String {
        let mut chain: SmallVec<[NodeId; 16]> = SmallVec::new();
        chain.push(id);
        chain.extend(self.ancestors(id));
        let mut out = String::new();
        for &node in chain.iter().rev() {
            out.push('/');
            out.push_str(&self.node(node).name);
        }
        out
    }

    /// Depth-first pre-order traversal of `id`'s descendants (`id` itself is
    /// not yielded). Fresh traversal state per call.
    ///
    /// The walker exposes [`Descendants::skip_subtree`] to prune the subtree
    /// of the most recently yielded node; its siblings are still visited.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_, T> {
        Descendants::new(self, id)
    }

    /// Lazy walk from the immediate parent up to the root.
    ///
    /// # Panics
    ///
    /// Panics if `id` is stale.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_, T> {
        Ancestors::new(self, self.node(id).parent)
    }

    #[track_caller]
    fn node(&self, id: NodeId) -> &Node<T> {
        self.slots
            .get(id.idx())
            .and_then(|slot| {
                (slot.generation == id.1)
                    .then_some(slot.node.as_ref())
                    .flatten()
            })
            .expect("stale or removed NodeId")
    }

    #[track_caller]
    fn node_mut(&mut self, id: NodeId) -> &mut Node<T> {
        self.slots
            .get_mut(id.idx())
            .and_then(|slot| {
                (slot.generation == id.1)
                    .then_some(slot.node.as_mut())
                    .flatten()
            })
            .expect("stale or removed NodeId")
    }

    fn detach_from_parent(&mut self, id: NodeId) {
        if let Some(parent) = self.node(id).parent
            && self.contains(parent)
        {
            let children = &mut self.node_mut(parent).children;
            if let Some(pos) = children.iter().position(|&c| c == id) {
                children.remove(pos);
            }
        }
    }

    fn free_slot(&mut self, id: NodeId) -> Node<T> {
        let slot = &mut self.slots[id.idx()];
        let node = slot.node.take().expect("freeing an empty slot");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.0);
        self.len -= 1;
        node
    }

    #[cfg(debug_assertions)]
    #[track_caller]
    fn debug_check_acyclic(&self, id: NodeId, new_parent: NodeId) {
        let mut cursor = Some(new_parent);
        while let Some(node) = cursor {
            assert!(
                node != id,
                "reparenting under the node's own subtree would create a cycle"
            );
            cursor = self.node(node).parent;
        }
    }
}

impl<T> core::ops::Index<NodeId> for Tree<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, id: NodeId) -> &T {
        &self.node(id).value
    }
}

impl<T> core::ops::IndexMut<NodeId> for Tree<T> {
    #[track_caller]
    fn index_mut(&mut self, id: NodeId) -> &mut T {
        &mut self.node_mut(id).value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn insert_starts_detached_with_default_name() {
        let mut tree = Tree::new();
        let a = tree.insert(1);
        assert_eq!(tree.name(a), DEFAULT_NAME);
        assert_eq!(tree.parent(a), None);
        assert!(tree.children(a).is_empty());
        assert_eq!(tree[a], 1);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn set_parent_maintains_both_directions() {
        let mut tree = Tree::new();
        let p = tree.insert(());
        let c = tree.insert(());
        tree.set_parent(c, Some(p));
        assert_eq!(tree.parent(c), Some(p));
        assert_eq!(tree.children(p), &[c]);

        tree.set_parent(c, None);
        assert_eq!(tree.parent(c), None);
        assert!(tree.children(p).is_empty());
    }

    #[test]
    fn set_parent_moves_between_parents() {
        let mut tree = Tree::new();
        let a = tree.insert(());
        let b = tree.insert(());
        let c = tree.insert(());
        tree.set_parent(c, Some(a));
        tree.set_parent(c, Some(b));
        assert!(tree.children(a).is_empty());
        assert_eq!(tree.children(b), &[c]);
        assert_eq!(tree.parent(c), Some(b));
    }

    #[test]
    fn set_parent_is_repeat_safe_and_keeps_membership_unique() {
        let mut tree = Tree::new();
        let p = tree.insert(());
        let c = tree.insert(());
        tree.set_parent(c, Some(p));
        tree.set_parent(c, Some(p));
        assert_eq!(tree.children(p), &[c]);
        tree.set_parent(c, None);
        tree.set_parent(c, None);
        assert_eq!(tree.parent(c), None);
    }

    #[test]
    fn append_filters_duplicates_and_preserves_order() {
        let mut tree = Tree::new();
        let p = tree.insert(());
        let a = tree.insert(());
        let b = tree.insert(());
        tree.append(p, &[a]);
        tree.append(p, &[a, b]);
        assert_eq!(tree.children(p), &[a, b]);
        tree.append(p, &[b, a]);
        assert_eq!(tree.children(p), &[a, b]);
    }

    #[test]
    fn insert_children_at_index() {
        let mut tree = Tree::new();
        let p = tree.insert(());
        let a = tree.insert(());
        let b = tree.insert(());
        let c = tree.insert(());
        tree.append(p, &[a]);
        tree.insert_children(p, 0, &[b, c]);
        assert_eq!(tree.children(p), &[b, c, a]);
        assert_eq!(tree.parent(b), Some(p));
        assert_eq!(tree.parent(c), Some(p));

        // Already-present children are filtered, order untouched.
        tree.insert_children(p, 0, &[a]);
        assert_eq!(tree.children(p), &[b, c, a]);
    }

    #[test]
    fn clear_children_detaches_symmetrically() {
        let mut tree = Tree::new();
        let p = tree.insert(());
        let a = tree.insert(());
        let b = tree.insert(());
        tree.append(p, &[a, b]);
        tree.clear_children(p);
        assert!(tree.children(p).is_empty());
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.parent(b), None);
    }

    #[test]
    fn root_walks_to_parentless_node() {
        let mut tree = Tree::new();
        let a = tree.insert(());
        let b = tree.insert(());
        let c = tree.insert(());
        tree.set_parent(b, Some(a));
        tree.set_parent(c, Some(b));
        assert_eq!(tree.root_of(c), a);
        assert_eq!(tree.root_of(b), a);
        assert_eq!(tree.root_of(a), a);
    }

    #[test]
    fn path_reflects_renames() {
        let mut tree = Tree::new();
        let a = tree.insert_named("a", ());
        let b = tree.insert_named("b", ());
        let c = tree.insert_named("c", ());
        tree.set_parent(b, Some(a));
        tree.set_parent(c, Some(b));
        assert_eq!(tree.path(a), "/a");
        assert_eq!(tree.path(c), "/a/b/c");

        tree.set_name(b, "branch");
        assert_eq!(tree.path(c), "/a/branch/c");
    }

    #[test]
    fn descendants_pre_order() {
        let mut tree = Tree::new();
        let root = tree.insert(());
        let a = tree.insert(());
        let b = tree.insert(());
        let a1 = tree.insert(());
        tree.append(root, &[a, b]);
        tree.append(a, &[a1]);

        let order: Vec<NodeId> = tree.descendants(root).collect();
        assert_eq!(order, vec![a, a1, b]);
    }

    #[test]
    fn descendants_visits_each_node_once() {
        let mut tree = Tree::new();
        let root = tree.insert(());
        let mut expected = 0usize;
        let mut parents = vec![root];
        for depth in 0..3 {
            let mut next = Vec::new();
            for &p in &parents {
                for _ in 0..(3 - depth) {
                    let c = tree.insert(());
                    tree.set_parent(c, Some(p));
                    next.push(c);
                    expected += 1;
                }
            }
            parents = next;
        }
        assert_eq!(tree.descendants(root).count(), expected);
    }

    #[test]
    fn skip_subtree_prunes_descendants_not_siblings() {
        let mut tree = Tree::new();
        let root = tree.insert(());
        let a = tree.insert(());
        let a1 = tree.insert(());
        let a2 = tree.insert(());
        let b = tree.insert(());
        tree.append(root, &[a, b]);
        tree.append(a, &[a1, a2]);

        let mut seen = Vec::new();
        let mut walk = tree.descendants(root);
        while let Some(node) = walk.next() {
            seen.push(node);
            if node == a {
                walk.skip_subtree();
            }
        }
        assert_eq!(seen, vec![a, b]);
    }

    #[test]
    fn traversal_is_restartable() {
        let mut tree = Tree::new();
        let root = tree.insert(());
        let a = tree.insert(());
        tree.set_parent(a, Some(root));
        let first: Vec<NodeId> = tree.descendants(root).collect();
        let second: Vec<NodeId> = tree.descendants(root).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn ancestors_walks_to_root() {
        let mut tree = Tree::new();
        let a = tree.insert(());
        let b = tree.insert(());
        let c = tree.insert(());
        tree.set_parent(b, Some(a));
        tree.set_parent(c, Some(b));
        let chain: Vec<NodeId> = tree.ancestors(c).collect();
        assert_eq!(chain, vec![b, a]);
        assert!(tree.ancestors(a).next().is_none());
    }

    #[test]
    fn remove_severs_both_directions() {
        let mut tree = Tree::new();
        let p = tree.insert(());
        let c = tree.insert(());
        let gc = tree.insert(());
        tree.set_parent(c, Some(p));
        tree.set_parent(gc, Some(c));

        tree.remove(c);
        assert!(!tree.contains(c));
        assert!(tree.children(p).is_empty());
        // The orphaned grandchild becomes a detached root.
        assert_eq!(tree.parent(gc), None);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn remove_subtree_frees_all_descendants() {
        let mut tree = Tree::new();
        let root = tree.insert(());
        let a = tree.insert(());
        let a1 = tree.insert(());
        tree.set_parent(a, Some(root));
        tree.set_parent(a1, Some(a));

        tree.remove_subtree(a);
        assert!(tree.contains(root));
        assert!(!tree.contains(a));
        assert!(!tree.contains(a1));
        assert_eq!(tree.len(), 1);
        assert!(tree.children(root).is_empty());
    }

    #[test]
    fn stale_ids_do_not_alias_reused_slots() {
        let mut tree = Tree::new();
        let a = tree.insert(1);
        tree.remove(a);
        let b = tree.insert(2);
        // Slot is reused but the generation differs.
        assert!(!tree.contains(a));
        assert_eq!(tree.get(a), None);
        assert_eq!(tree[b], 2);
    }

    #[test]
    #[should_panic(expected = "stale or removed NodeId")]
    fn indexing_a_stale_id_panics() {
        let mut tree = Tree::new();
        let a = tree.insert(());
        tree.remove(a);
        let _ = &tree[a];
    }

    #[test]
    #[should_panic(expected = "stale or removed NodeId")]
    fn hierarchy_queries_panic_on_stale_ids() {
        let mut tree = Tree::new();
        let a = tree.insert(());
        tree.remove(a);
        let _ = tree.parent(a);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "cycle")]
    fn debug_build_rejects_cyclic_reparenting() {
        let mut tree = Tree::new();
        let a = tree.insert(());
        let b = tree.insert(());
        tree.set_parent(b, Some(a));
        tree.set_parent(a, Some(b));
    }
}
