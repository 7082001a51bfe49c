use alloc::boxed::Box;
use core::alloc::Layout;
use core::ptr::NonNull;

use crate::error::LinkedListError;

pub(crate) type Link<T> = Option<NonNull<Node<T>>>;

/// One element of the chain with its neighbour links
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) previous: Link<T>,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates an unlinked node holding `value`.
    ///
    /// # Errors
    ///
    /// Returns `LinkedListError::AllocationFailure` if the allocator returns null.
    /// `value` is dropped in that case.
    #[allow(unsafe_code)]
    pub(crate) fn allocate(value: T) -> Result<NonNull<Self>, LinkedListError> {
        let layout = Layout::new::<Self>();
        // Safe: a node always holds two links, so the layout is never zero-sized
        let raw = unsafe { alloc::alloc::alloc(layout) }.cast::<Self>();
        let node = NonNull::new(raw).ok_or(LinkedListError::AllocationFailure)?;

        // Safe: `node` is freshly allocated with the layout of `Self`
        unsafe {
            node.as_ptr().write(Self {
                value,
                previous: None,
                next: None,
            });
        }
        Ok(node)
    }

    /// Frees a node and hands back its contents.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::allocate`], must not be freed twice, and
    /// no reference into it may outlive this call.
    #[allow(unsafe_code)]
    pub(crate) unsafe fn release(node: NonNull<Self>) -> Self {
        // Safe: `allocate` uses the global allocator with `Layout::new::<Self>()`,
        // which is the layout `Box<Self>` expects
        let boxed = unsafe { Box::from_raw(node.as_ptr()) };
        *boxed
    }
}
