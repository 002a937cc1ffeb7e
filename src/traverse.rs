//! Depth-first walks over a tree. Everything here runs on an explicit stack instead of the call
//! stack so a tree built from sorted input (i.e. a linked list) can be walked no matter how long
//! it is.

use crate::node::Node;

/// Where a node is visited relative to its subtrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// Node, then left subtree, then right subtree.
    PreOrder,
    /// Left subtree, then node, then right subtree. Visits elements in ascending order.
    InOrder,
    /// Left subtree, then right subtree, then node. Children are always visited before their
    /// parent.
    PostOrder,
}

enum Frame<'a, T> {
    /// The whole subtree rooted here still needs visiting.
    Expand(&'a Node<T>),
    /// Only the node itself is left to visit.
    Visit(&'a Node<T>),
}

/// An iterator over the nodes of a tree in a given [`Order`]. Created by
/// [`Tree::traversal`][crate::Tree::traversal].
pub struct Traversal<'a, T> {
    order: Order,
    stack: Vec<Frame<'a, T>>,
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, order: Order) -> Self {
        Self {
            order,
            stack: root.map(Frame::Expand).into_iter().collect(),
        }
    }

    /// Pushes the frames for `node` so they pop off in `self.order`.
    fn expand(&mut self, node: &'a Node<T>) {
        let left = node.left().map(Frame::Expand);
        let right = node.right().map(Frame::Expand);

        match self.order {
            Order::PreOrder => {
                self.stack.extend(right);
                self.stack.extend(left);
                self.stack.push(Frame::Visit(node));
            }
            Order::InOrder => {
                self.stack.extend(right);
                self.stack.push(Frame::Visit(node));
                self.stack.extend(left);
            }
            Order::PostOrder => {
                self.stack.push(Frame::Visit(node));
                self.stack.extend(right);
                self.stack.extend(left);
            }
        }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Frame::Visit(node) => return Some(node),
                Frame::Expand(node) => self.expand(node),
            }
        }
    }
}

/// An iterator over the elements of a tree in ascending order. Created by
/// [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    nodes: Traversal<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        Self {
            nodes: Traversal::new(root, Order::InOrder),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}
