use indexmap::IndexSet;
use std::hash::Hash;

/// Remove duplicated values, keeping the first occurrence of each.
///
/// Returns a new vector; the input is not modified. Equality is value
/// equality, so this is meant for primitives such as integers, chars and
/// strings.
///
/// # Examples
///
/// ```
/// use plain_util::array::remove_duplicated;
///
/// let arr = ["a", "b", "c", "e", "a", "b", "f"];
/// assert_eq!(remove_duplicated(&arr), vec!["a", "b", "c", "e", "f"]);
/// ```
pub fn remove_duplicated<T>(arr: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    arr.iter().cloned().collect::<IndexSet<T>>().into_iter().collect()
}
