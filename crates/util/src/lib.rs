//! plain-util - Small utility functions for sequences, numbers and plain records
//!
//! Three independent groups of pure functions:
//!
//! - [`array`]: element access, deduplication, search, joining and sortedness.
//! - [`number`]: min/max, sorting, random integers, unit conversion, averaging
//!   and binary parsing.
//! - [`object`]: own-property checks, emptiness and property-based sorting of
//!   string-keyed records.
//!
//! Edge cases are reported through sentinel values (`None`, NaN). The only
//! errors are the ones listed in [`UtilError`].

pub mod array;
pub mod error;
pub mod number;
pub mod object;

// Re-exports for convenience
pub use array::{
    arr_to_string, find_index, find_index_arc, find_index_by_identity, find_index_rc, first,
    is_sorted, last, remove_duplicated, ParseSortOrderError, SortOrder,
};
pub use error::{Result, UtilError};
pub use number::{
    average, binary_to_decimal, find_max, find_min, mins_to_hours_and_mins, random_num,
    random_num_with, sort_num_asc, sort_num_desc, BinaryDigits, HoursAndMinutes, SeededRandom,
};
pub use object::{has_property, is_empty_object, sort_by_property, Record, SortKey};

/// Items intended for glob-import: `use plain_util::prelude::*;`
pub mod prelude {
    pub use crate::array::*;
    pub use crate::error::UtilError;
    pub use crate::number::*;
    pub use crate::object::*;
}
