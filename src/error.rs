/// Errors returned by [`Tree::insert`][crate::Tree::insert].
///
/// Both variants hand the rejected element back to the caller. In either case the tree is left
/// exactly as it was before the call.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InsertError<T> {
    /// An element comparing equal to this one is already in the tree.
    #[error("an equal element is already present in the tree")]
    Duplicate(T),
    /// The allocator could not provide memory for a new node.
    #[error("failed to allocate a tree node")]
    AllocationFailed(T),
}

impl<T> InsertError<T> {
    /// Returns the element that could not be inserted.
    pub fn into_inner(self) -> T {
        match self {
            Self::Duplicate(element) | Self::AllocationFailed(element) => element,
        }
    }
}
