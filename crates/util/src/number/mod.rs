//! Number utilities.
//!
//! Provides extrema, averaging, copy-then-sort helpers, random integers and
//! conversions (minutes to hours, binary digits to integers).

mod aggregate;
mod convert;
mod random;
mod sort;

pub use aggregate::{average, find_max, find_min};
pub use convert::{binary_to_decimal, mins_to_hours_and_mins, BinaryDigits, HoursAndMinutes};
pub use random::{random_num, random_num_with, SeededRandom};
pub use sort::{sort_num_asc, sort_num_desc};
