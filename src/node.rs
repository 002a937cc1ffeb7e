use std::alloc::{self, Layout};
#[cfg(test)]
use std::cell::Cell;
use std::fmt;
use std::ptr::NonNull;

#[cfg(test)]
thread_local! {
    /// When set, every node allocation on this thread comes back null.
    static FAIL_ALLOCATIONS: Cell<bool> = Cell::new(false);
}

/// Makes node allocations on the current thread fail (or succeed again).
#[cfg(test)]
pub(crate) fn fail_allocations(fail: bool) {
    FAIL_ALLOCATIONS.with(|f| f.set(fail));
}

/// Asks the global allocator for `layout`.
///
/// # Safety
///
/// `layout` must not be zero sized.
unsafe fn allocate(layout: Layout) -> *mut u8 {
    #[cfg(test)]
    if FAIL_ALLOCATIONS.with(Cell::get) {
        return std::ptr::null_mut();
    }
    alloc::alloc(layout)
}

/// An owning, possibly empty, reference to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single element of a [`Tree`][crate::Tree] along with the two subtrees hanging off it.
///
/// Nodes are only ever handed out by shared reference (from [`Tree::find`][crate::Tree::find],
/// [`Tree::root`][crate::Tree::root] or a traversal) so they can be inspected but never relinked
/// from outside the tree. There is no parent pointer.
pub struct Node<T> {
    pub(crate) data: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a childless node holding `data`. If the allocator comes back empty handed,
    /// `data` is returned untouched.
    pub(crate) fn try_new_boxed(data: T) -> Result<Box<Self>, T> {
        let layout = Layout::new::<Self>();
        // SAFETY: A `Node` always holds two `Option<Box<_>>`s so its layout is never zero sized,
        // which is the only precondition of `allocate`.
        let Some(ptr) = NonNull::new(unsafe { allocate(layout) }.cast::<Self>()) else {
            return Err(data);
        };
        // SAFETY: `ptr` is non-null and was just allocated by the global allocator with the
        // layout of `Self`, so it is valid for a write of `Self` and the resulting `Box` will
        // free it with the same layout.
        unsafe {
            ptr.as_ptr().write(Node {
                data,
                left: None,
                right: None,
            });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// The element stored in this node.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The root of the left subtree, if any. Every element in it compares less than
    /// [`data`][Node::data].
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any. Every element in it compares greater than
    /// [`data`][Node::data].
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Only the element - printing the children would recurse through the whole subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("data", &self.data)
            .field("is_leaf", &self.is_leaf())
            .finish()
    }
}

/// Detaches and returns the largest node of the subtree rooted at `link`, splicing its left
/// child into the spot it occupied. The largest node never has a right child, so nothing else
/// needs relinking.
pub(crate) fn take_max<T>(mut link: &mut Link<T>) -> Option<Box<Node<T>>> {
    while link.as_ref()?.right.is_some() {
        link = &mut link.as_mut()?.right;
    }

    let mut max = link.take()?;
    *link = max.left.take();
    Some(max)
}

/// Releases every node reachable from `link` using an explicit stack, children before their
/// parent. Returns how many nodes were released.
pub(crate) fn release<T>(link: Link<T>) -> usize {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    let mut released = 0;

    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
        // `node` is childless now so dropping it can't recurse.
        drop(node);
        released += 1;
    }

    released
}
