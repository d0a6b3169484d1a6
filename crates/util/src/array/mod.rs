//! Sequence utilities.
//!
//! Provides element access, deduplication, linear search, joining and
//! sortedness checks over slices.

mod access;
mod dedup;
mod search;
mod sorted;

pub use access::{arr_to_string, first, last};
pub use dedup::remove_duplicated;
pub use search::{find_index, find_index_arc, find_index_by_identity, find_index_rc};
pub use sorted::{is_sorted, ParseSortOrderError, SortOrder};
