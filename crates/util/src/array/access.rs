use std::fmt::Display;

/// Get the first element of a slice.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use plain_util::array::first;
///
/// assert_eq!(first(&["a", "b", "c"]), Some(&"a"));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
pub fn first<T>(arr: &[T]) -> Option<&T> {
    arr.first()
}

/// Get the last element of a slice.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```
/// use plain_util::array::last;
///
/// assert_eq!(last(&[1, 0, 3, 6, 9, 8]), Some(&8));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
pub fn last<T>(arr: &[T]) -> Option<&T> {
    arr.last()
}

/// Join the `Display` form of every element with a comma.
///
/// An empty slice yields an empty string.
///
/// # Examples
///
/// ```
/// use plain_util::array::arr_to_string;
///
/// assert_eq!(arr_to_string(&["hello", "world"]), "hello,world");
/// assert_eq!(arr_to_string(&[1, 2, 3]), "1,2,3");
/// assert_eq!(arr_to_string::<&str>(&[]), "");
/// ```
pub fn arr_to_string<T: Display>(arr: &[T]) -> String {
    arr.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
