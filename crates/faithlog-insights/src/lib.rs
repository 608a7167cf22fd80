//! Pure, side-effect-free views over a full entry collection.
//!
//! Every function takes the complete list and derives its result from
//! scratch; nothing here keeps state between calls.

pub mod dashboard;
pub mod date_range;
pub mod filter;
pub mod sort;

pub use dashboard::{Dashboard, InsightsGenerator, Summary};
pub use date_range::DateRange;
pub use filter::{parse_all_or, EntryFilter};
pub use sort::{SortConfig, SortDirection, SortKey};
