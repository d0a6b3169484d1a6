use std::cmp::Ordering;

/// Return a copy of `arr` sorted in ascending numeric order.
///
/// The input slice is left untouched. Numbers are ordered by
/// [`f64::total_cmp`], so `-0.0` sorts before `0.0`. Every NaN sorts last,
/// whatever its sign bit.
///
/// # Examples
///
/// ```
/// use plain_util::number::sort_num_asc;
///
/// let arr = [5.0, 3.0, 8.0, 1.0];
/// assert_eq!(sort_num_asc(&arr), vec![1.0, 3.0, 5.0, 8.0]);
/// assert_eq!(arr, [5.0, 3.0, 8.0, 1.0]);
/// ```
pub fn sort_num_asc(arr: &[f64]) -> Vec<f64> {
    let mut sorted = arr.to_vec();
    sorted.sort_by(|a, b| nan_last(a, b).then_with(|| a.total_cmp(b)));
    sorted
}

/// Return a copy of `arr` sorted in descending numeric order.
///
/// The input slice is left untouched. Every NaN sorts first, whatever its
/// sign bit.
///
/// # Examples
///
/// ```
/// use plain_util::number::sort_num_desc;
///
/// assert_eq!(sort_num_desc(&[5.0, 3.0, 8.0, 1.0]), vec![8.0, 5.0, 3.0, 1.0]);
/// ```
pub fn sort_num_desc(arr: &[f64]) -> Vec<f64> {
    let mut sorted = arr.to_vec();
    sorted.sort_by(|a, b| nan_last(b, a).then_with(|| b.total_cmp(a)));
    sorted
}

/// Orders NaN after every number; two NaNs, or two numbers, are equal here.
fn nan_last(a: &f64, b: &f64) -> Ordering {
    a.is_nan().cmp(&b.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_num_asc_does_not_mutate() {
        let arr = vec![5.0, 3.0, 8.0, 1.0];
        assert_eq!(sort_num_asc(&arr), vec![1.0, 3.0, 5.0, 8.0]);
        assert_eq!(arr, vec![5.0, 3.0, 8.0, 1.0]);
    }

    #[test]
    fn test_sort_num_desc_does_not_mutate() {
        let arr = vec![5.0, 3.0, 8.0, 1.0];
        assert_eq!(sort_num_desc(&arr), vec![8.0, 5.0, 3.0, 1.0]);
        assert_eq!(arr, vec![5.0, 3.0, 8.0, 1.0]);
    }

    #[test]
    fn test_sort_numeric_not_lexicographic() {
        assert_eq!(sort_num_asc(&[10.0, 9.0, 100.0]), vec![9.0, 10.0, 100.0]);
    }

    #[test]
    fn test_sort_with_duplicates_and_negatives() {
        assert_eq!(
            sort_num_asc(&[2.0, -1.0, 2.0, 0.5]),
            vec![-1.0, 0.5, 2.0, 2.0]
        );
        assert_eq!(
            sort_num_desc(&[2.0, -1.0, 2.0, 0.5]),
            vec![2.0, 2.0, 0.5, -1.0]
        );
    }

    #[test]
    fn test_sort_empty() {
        assert!(sort_num_asc(&[]).is_empty());
        assert!(sort_num_desc(&[]).is_empty());
    }

    #[test]
    fn test_nan_placement() {
        let asc = sort_num_asc(&[f64::NAN, 1.0, 0.0]);
        assert_eq!(&asc[..2], &[0.0, 1.0]);
        assert!(asc[2].is_nan());

        let desc = sort_num_desc(&[1.0, f64::NAN, 0.0]);
        assert!(desc[0].is_nan());
        assert_eq!(&desc[1..], &[1.0, 0.0]);
    }

    #[test]
    fn test_negative_nan_placement() {
        let asc = sort_num_asc(&[1.0, -f64::NAN, 0.0, f64::NAN]);
        assert_eq!(&asc[..2], &[0.0, 1.0]);
        assert!(asc[2..].iter().all(|x| x.is_nan()));

        let desc = sort_num_desc(&[1.0, -f64::NAN, 0.0]);
        assert!(desc[0].is_nan());
        assert_eq!(&desc[1..], &[1.0, 0.0]);
    }

    #[test]
    fn test_nan_from_empty_average_sorts_last() {
        let nan = crate::number::average(&[]);
        let asc = sort_num_asc(&[2.0, nan, -1.0]);
        assert_eq!(&asc[..2], &[-1.0, 2.0]);
        assert!(asc[2].is_nan());

        let desc = sort_num_desc(&[2.0, nan, -1.0]);
        assert!(desc[0].is_nan());
        assert_eq!(&desc[1..], &[2.0, -1.0]);
    }
}
