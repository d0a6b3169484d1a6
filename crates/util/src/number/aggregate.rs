use std::cmp::Ordering;

/// Find the largest value in a slice.
///
/// Returns `None` for an empty slice. A value that is not comparable with
/// itself (a float NaN) wins immediately, so any NaN in the input yields NaN.
/// Ties keep the earliest element: `find_max(&[-0.0, 0.0])` is `-0.0`.
///
/// # Examples
///
/// ```
/// use plain_util::number::find_max;
///
/// assert_eq!(find_max(&[1, 0, 3, 6, 9, 8]), Some(9));
/// assert_eq!(find_max::<f64>(&[]), None);
/// assert!(find_max(&[1.0, f64::NAN]).unwrap().is_nan());
/// ```
pub fn find_max<T: PartialOrd + Copy>(arr: &[T]) -> Option<T> {
    extreme(arr, Ordering::Greater)
}

/// Find the smallest value in a slice.
///
/// Same rules as [`find_max`]; `find_min(&[0.0, -0.0])` is `0.0`.
///
/// # Examples
///
/// ```
/// use plain_util::number::find_min;
///
/// assert_eq!(find_min(&[4.5, -2.0, 3.0]), Some(-2.0));
/// assert_eq!(find_min::<i32>(&[]), None);
/// ```
pub fn find_min<T: PartialOrd + Copy>(arr: &[T]) -> Option<T> {
    extreme(arr, Ordering::Less)
}

fn extreme<T: PartialOrd + Copy>(arr: &[T], wins: Ordering) -> Option<T> {
    let mut iter = arr.iter().copied();
    let mut best = iter.next()?;
    if best.partial_cmp(&best).is_none() {
        return Some(best);
    }
    for item in iter {
        match item.partial_cmp(&best) {
            None => return Some(item),
            Some(ord) if ord == wins => best = item,
            Some(_) => {}
        }
    }
    Some(best)
}

/// Arithmetic mean of a slice.
///
/// An empty slice yields NaN; check for emptiness first if a finite result
/// is required.
///
/// # Examples
///
/// ```
/// use plain_util::number::average;
///
/// assert_eq!(average(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// assert!(average(&[]).is_nan());
/// ```
pub fn average(arr: &[f64]) -> f64 {
    arr.iter().sum::<f64>() / arr.len() as f64
}
