use std::rc::Rc;
use std::sync::Arc;

/// Find the position of the first element equal to `element`.
///
/// Uses value equality. Returns `None` when no element matches.
///
/// # Examples
///
/// ```
/// use plain_util::array::find_index;
///
/// assert_eq!(find_index(&[1, 2, 3, 4, 5], &3), Some(2));
/// assert_eq!(find_index(&[1, 2, 3, 4, 5], &6), None);
/// ```
pub fn find_index<T: PartialEq>(arr: &[T], element: &T) -> Option<usize> {
    arr.iter().position(|item| item == element)
}

/// Find the position of `element` by identity.
///
/// Matches only when `element` points at an item stored in `arr`; a
/// structurally equal value living elsewhere is not found.
///
/// # Examples
///
/// ```
/// use plain_util::array::find_index_by_identity;
///
/// let records = vec![vec![1], vec![2], vec![3]];
/// let copy = vec![2];
///
/// assert_eq!(find_index_by_identity(&records, &records[1]), Some(1));
/// assert_eq!(find_index_by_identity(&records, &copy), None);
/// ```
pub fn find_index_by_identity<T>(arr: &[T], element: &T) -> Option<usize> {
    arr.iter().position(|item| std::ptr::eq(item, element))
}

/// Find the position of the first handle sharing `element`'s allocation.
pub fn find_index_rc<T: ?Sized>(arr: &[Rc<T>], element: &Rc<T>) -> Option<usize> {
    arr.iter().position(|item| Rc::ptr_eq(item, element))
}

/// Thread-safe counterpart of [`find_index_rc`].
pub fn find_index_arc<T: ?Sized>(arr: &[Arc<T>], element: &Arc<T>) -> Option<usize> {
    arr.iter().position(|item| Arc::ptr_eq(item, element))
}
