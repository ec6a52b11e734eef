//! Static lookup tables backing the selection flow.
//!
//! Every table is a `static` array; declaration order is an observable
//! contract because it determines quick-reply button order. Nothing here is
//! mutated after process start.

pub mod occupations;
pub mod prefectures;

pub use occupations::{occupation, occupations, OccupationEntry};
pub use prefectures::{
    prefecture, prefectures, prefectures_in, regions, Region, PrefectureEntry,
};
