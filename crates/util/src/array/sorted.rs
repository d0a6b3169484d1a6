use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Direction of a sortedness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortOrder {
    /// The ordering every element must have against its predecessor.
    fn expected(self) -> Ordering {
        match self {
            SortOrder::Ascending => Ordering::Greater,
            SortOrder::Descending => Ordering::Less,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Ascending => f.write_str("asc"),
            SortOrder::Descending => f.write_str("desc"),
        }
    }
}

/// Returned when a string names no known [`SortOrder`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sort order `{0}`")]
pub struct ParseSortOrderError(String);

impl FromStr for SortOrder {
    type Err = ParseSortOrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            _ => Err(ParseSortOrderError(s.to_string())),
        }
    }
}

/// Check whether a slice is strictly sorted in the given order.
///
/// Every element after the first must be strictly greater (ascending) or
/// strictly less (descending) than the one before it, so equal neighbours
/// fail the check. Incomparable neighbours such as NaN also fail. Slices
/// with fewer than two elements are sorted.
///
/// # Examples
///
/// ```
/// use plain_util::array::{is_sorted, SortOrder};
///
/// assert!(is_sorted(&[1, 2, 3], SortOrder::Ascending));
/// assert!(!is_sorted(&[3, 2, 1], SortOrder::Ascending));
/// assert!(is_sorted(&["c", "b", "a"], SortOrder::Descending));
/// ```
pub fn is_sorted<T: PartialOrd>(arr: &[T], order: SortOrder) -> bool {
    let expected = order.expected();
    arr.windows(2)
        .all(|pair| pair[1].partial_cmp(&pair[0]) == Some(expected))
}
