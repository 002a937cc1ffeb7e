//! Sideways text rendering of a tree's shape, for debugging.

use std::fmt;

use crate::node::Node;

/// Columns added per level of depth.
const INDENT: usize = 6;

#[derive(Clone, Copy)]
enum Side {
    Root,
    Left,
    Right,
}

enum Frame<'a, T> {
    Expand(&'a Node<T>, usize, Side),
    Emit(&'a Node<T>, usize, Side),
}

/// Renders a tree rotated a quarter turn counter-clockwise: the root sits at the left margin, the
/// right subtree above it and the left subtree below it. Created by
/// [`Tree::sideways`][crate::Tree::sideways].
///
/// ```text
///       ---3
///       |
/// ---2
///       |
///       ---1
/// ```
pub struct Sideways<'a, T> {
    root: Option<&'a Node<T>>,
}

impl<'a, T> Sideways<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self { root }
    }
}

impl<T> fmt::Display for Sideways<'_, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<_> = self
            .root
            .map(|root| Frame::Expand(root, 0, Side::Root))
            .into_iter()
            .collect();

        // Reverse in-order so the largest element ends up on the first line.
        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Expand(node, depth, side) => {
                    stack.extend(node.left().map(|l| Frame::Expand(l, depth + 1, Side::Left)));
                    stack.push(Frame::Emit(node, depth, side));
                    stack.extend(node.right().map(|r| Frame::Expand(r, depth + 1, Side::Right)));
                }
                Frame::Emit(node, depth, side) => {
                    let pad = depth * INDENT;
                    match side {
                        Side::Root => writeln!(f, "---{}", node.data())?,
                        Side::Right => {
                            writeln!(f, "{:pad$}---{}", "", node.data())?;
                            writeln!(f, "{:pad$}|", "")?;
                        }
                        Side::Left => {
                            writeln!(f, "{:pad$}|", "")?;
                            writeln!(f, "{:pad$}---{}", "", node.data())?;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
