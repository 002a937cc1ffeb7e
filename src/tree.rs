//! A plain, unbalanced BST that owns its nodes through `Box`es.
//!
//! # Examples
//!
//! ```
//! use plain_bst::{Order, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.find(&1).is_none());
//!
//! tree.insert(2).unwrap();
//! tree.insert(1).unwrap();
//! tree.insert(3).unwrap();
//! assert_eq!(tree.len(), 3);
//!
//! // Equal elements are refused.
//! assert!(tree.insert(2).is_err());
//!
//! let mut visited = Vec::new();
//! tree.traverse(Order::PostOrder, |node| visited.push(*node.data()));
//! assert_eq!(visited, [1, 3, 2]);
//!
//! // Deleting a node returns its element.
//! assert_eq!(tree.delete(&2), Some(2));
//! assert_eq!(tree.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::compare::{Compare, Natural};
use crate::error::InsertError;
use crate::node::{self, Link, Node};
use crate::pretty::Sideways;
use crate::traverse::{Iter, Order, Traversal};

/// An unbalanced Binary Search Tree. Elements are positioned by the comparator `C` and no two
/// elements comparing equal are ever stored together.
///
/// There is no rebalancing: inserting sorted input produces a tree shaped like a linked list and
/// every operation degrades to `O(n)`.
pub struct Tree<T, C = Natural> {
    root: Link<T>,
    len: usize,
    compare: C,
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        node::release(self.root.take());
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty `Tree` ordered by `compare`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
    /// tree.insert(1).unwrap();
    /// tree.insert(3).unwrap();
    /// tree.insert(2).unwrap();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    pub fn with_comparator(compare: C) -> Self {
        Self {
            root: None,
            len: 0,
            compare,
        }
    }

    /// The number of elements in the tree. This is tracked as elements come and go, not counted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no elements.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Releases every node and leaves the tree empty. Children are released before their
    /// parent.
    pub fn clear(&mut self) {
        let released = node::release(self.root.take());
        debug_assert_eq!(released, self.len);
        log::debug!("cleared tree, released {} nodes", released);
        self.len = 0;
    }

    /// Calls `visitor` once for every node, in `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{Order, Tree};
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse(Order::PreOrder, |node| visited.push(*node.data()));
    /// assert_eq!(visited, [2, 1, 3]);
    /// ```
    pub fn traverse<F>(&self, order: Order, mut visitor: F)
    where
        F: FnMut(&Node<T>),
    {
        for node in self.traversal(order) {
            visitor(node);
        }
    }

    /// An iterator over the nodes in `order`.
    pub fn traversal(&self, order: Order) -> Traversal<'_, T> {
        Traversal::new(self.root(), order)
    }

    /// An iterator over the elements in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root(), self.len)
    }

    /// A [`Display`][fmt::Display]able drawing of the tree's shape, root on the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    /// print!("{}", tree.sideways());
    /// ```
    pub fn sideways(&self) -> Sideways<'_, T> {
        Sideways::new(self.root())
    }
}

impl<T, C> Tree<T, C>
where
    C: Compare<T>,
{
    /// Inserts `element` as a new leaf. If an equal element is already present the tree is left
    /// alone and `element` comes back inside [`InsertError::Duplicate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::{InsertError, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.insert(1), Ok(()));
    /// assert_eq!(tree.insert(1), Err(InsertError::Duplicate(1)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, element: T) -> Result<(), InsertError<T>> {
        let link = search(&mut self.root, &element, &self.compare);
        if link.is_some() {
            log::trace!("insert refused, equal element present");
            return Err(InsertError::Duplicate(element));
        }

        *link = Some(Node::try_new_boxed(element).map_err(InsertError::AllocationFailed)?);
        self.len += 1;
        log::trace!("inserted element, tree now holds {}", self.len);

        Ok(())
    }

    /// Deletes the element comparing equal to `key` and returns it. If there is no such element,
    /// nothing happens.
    ///
    /// A node with two children keeps its place in the tree: it takes over the element of its
    /// in-order predecessor (the largest element of its left subtree) and the predecessor's node
    /// is removed instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let mut tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&5), Some(5));
    /// assert_eq!(tree.root().map(|n| *n.data()), Some(4));
    /// assert_eq!(tree.delete(&5), None);
    /// ```
    pub fn delete(&mut self, key: &T) -> Option<T> {
        let link = search(&mut self.root, key, &self.compare);

        let matched = link.as_mut()?;
        if matched.right.is_some() {
            if let Some(predecessor) = node::take_max(&mut matched.left) {
                self.len -= 1;
                log::trace!("deleted element via predecessor, tree now holds {}", self.len);
                return Some(mem::replace(&mut matched.data, predecessor.data));
            }
        }

        // At most one child - it takes this node's place.
        let mut removed = link.take()?;
        *link = removed.left.take().or_else(|| removed.right.take());
        self.len -= 1;
        log::trace!("deleted element, tree now holds {}", self.len);

        Some(removed.data)
    }

    /// Finds the node holding the element comparing equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::Tree;
    ///
    /// let tree: Tree<i32> = [2, 1, 3].into_iter().collect();
    ///
    /// assert_eq!(tree.find(&3).map(|n| n.data()), Some(&3));
    /// assert!(tree.find(&42).is_none());
    /// ```
    pub fn find(&self, key: &T) -> Option<&Node<T>> {
        let mut node = self.root()?;
        loop {
            node = match self.compare.compare(key, &node.data) {
                Ordering::Less => node.left()?,
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right()?,
            };
        }
    }

    /// Finds the stored element comparing equal to `key`.
    pub fn get(&self, key: &T) -> Option<&T> {
        self.find(key).map(Node::data)
    }

    /// Whether an element comparing equal to `key` is stored.
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }
}

/// Walks down from `link` and returns the link holding the element equal to `key`, or the empty
/// link where it would be inserted. The returned link is the parent's child slot (or the tree's
/// root), so callers can relink it directly.
fn search<'a, T, C>(mut link: &'a mut Link<T>, key: &T, compare: &C) -> &'a mut Link<T>
where
    C: Compare<T>,
{
    loop {
        let ordering = match link.as_deref() {
            Some(node) => compare.compare(key, &node.data),
            None => return link,
        };
        // Moving `link` into the match lets the `Equal` arm hand it back out.
        link = match (ordering, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Compare<T>,
{
    /// Inserts each element in turn. Elements that are refused are dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            let _ = self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
