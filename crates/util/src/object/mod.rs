//! Record utilities.
//!
//! Records are string-keyed maps of JSON values. Every helper here works
//! through the [`Record`] trait, so `serde_json::Map`, `BTreeMap`, `HashMap`
//! and `serde_json::Value` can be used interchangeably.

mod record;
mod sort;

pub use record::{has_property, is_empty_object, Record};
pub use sort::{sort_by_property, SortKey};
