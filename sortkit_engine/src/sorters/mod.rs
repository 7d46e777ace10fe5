//! In-place comparison sorts over slices.
//!
//! Every algorithm is available three ways: as a free function (`quick_sort`, `quick_sort_by`,
//! ...), as a unit struct implementing [`Sorter`], and as a variant of [`Algorithm`].
//!
//! # Example
//!
//! ```
//! use sortkit_engine::{QuickSorter, Sorter};
//!
//! let mut slice = vec![1, 3, 2, 5, 4];
//! QuickSorter.sort(&mut slice);
//! assert_eq!(vec![1, 2, 3, 4, 5], slice);
//! ```

pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod selection_sorter;
pub mod shell_sorter;

use insertion_sorter::insertion_sort_by;
use merge_sorter::merge_sort_by;
use quick_sorter::quick_sort_by;
use selection_sorter::selection_sort_by;
use shell_sorter::shell_sort_by;

/// The sorting algorithm must implement the trait `Sorter`.
///
/// `is_less` must describe a strict weak ordering. If it does not, the slice ends up in an
/// unspecified order, but it is still a permutation of the input.
pub trait Sorter<T> {
    fn sort_by<F>(&self, slice: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool;

    /// Sorts with `<`. Equality is never consulted.
    #[inline]
    fn sort(&self, slice: &mut [T])
    where
        T: Ord,
    {
        self.sort_by(slice, |a, b| a < b)
    }
}

/// The five slice sorting strategies of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "bench", derive(clap::ValueEnum))]
pub enum Algorithm {
    Insertion,
    Selection,
    Shell,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Shell,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Shell => "Shell Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
        }
    }

    /// Quadratic algorithms get too slow to run on big inputs.
    pub fn is_quadratic(self) -> bool {
        matches!(self, Algorithm::Insertion | Algorithm::Selection)
    }

    pub fn sort<T: Ord + Clone>(self, slice: &mut [T]) {
        self.sort_by(slice, |a, b| a < b)
    }

    pub fn sort_by<T, F>(self, slice: &mut [T], is_less: F)
    where
        T: Clone,
        F: FnMut(&T, &T) -> bool,
    {
        match self {
            Algorithm::Insertion => insertion_sort_by(slice, is_less),
            Algorithm::Selection => selection_sort_by(slice, is_less),
            Algorithm::Shell => shell_sort_by(slice, is_less),
            Algorithm::Merge => merge_sort_by(slice, is_less),
            Algorithm::Quick => quick_sort_by(slice, is_less),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
