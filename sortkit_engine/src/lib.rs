//! # Introduction
//!
//! Generic comparison sorts: insertion, selection, shell, merge and quick sort over slices, a
//! merge sort that relinks the nodes of an owned singly-linked list, and quick select for order
//! statistics.
//!
//! Every operation is a plain function generic over the element type. The default variants
//! only ever use `<`; the `*_by` variants take an `is_less` predicate instead. None of them
//! keep state between calls or touch anything but the data handed to them.
//!
//! Equal elements are not guaranteed to keep their relative order by any algorithm here.
//!
//! # Example
//!
//! ```
//! use sortkit_engine::{merge_sort, quick_select, quick_sort};
//!
//! let input = vec![8, 79, 6, 56, 2, 0, 5, 44, 29, 31, 157];
//!
//! let mut slice = input.clone();
//! quick_sort(&mut slice);
//! assert_eq!(slice, [0, 2, 5, 6, 8, 29, 31, 44, 56, 79, 157]);
//!
//! let mut slice = input.clone();
//! merge_sort(&mut slice);
//! assert_eq!(slice, [0, 2, 5, 6, 8, 29, 31, 44, 56, 79, 157]);
//!
//! let mut slice = input;
//! quick_select(&mut slice, 10);
//! assert_eq!(slice[10], 157);
//! ```
//!
//! # Features
//!
//! - `bench` (default): the comparison counting benchmark behind `sortkit bench`, along with
//!   its command line arguments. Disable default features for a dependency free library.

#[cfg(feature = "bench")]
pub mod benchmark;
mod error;
pub mod list;
mod select;
mod sorters;

#[cfg(feature = "bench")]
pub use benchmark::BenchArgs;
pub use error::{Error, Result};
pub use list::{merge_sort_list, merge_sort_list_by, List, ListNode};
pub use select::{quick_select, quick_select_by, try_quick_select, try_quick_select_by};
pub use sorters::insertion_sorter::{insertion_sort, insertion_sort_by, InsertionSorter};
pub use sorters::merge_sorter::{merge_sort, merge_sort_by, MergeSorter};
pub use sorters::quick_sorter::{quick_sort, quick_sort_by, QuickSorter};
pub use sorters::selection_sorter::{selection_sort, selection_sort_by, SelectionSorter};
pub use sorters::shell_sorter::{shell_sort, shell_sort_by, ShellSorter};
pub use sorters::{Algorithm, Sorter};
