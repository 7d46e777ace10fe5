use crate::sorters::Sorter;

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
///
/// # Explanation
///
/// Insertion sort is a simple sorting algorithm that builds the final sorted array (or list) one
/// item at a time
///
/// Insertion sort iterates, consuming one input element each repetition, and grows a sorted output
/// list. At each iteration, insertion sort removes one element from the input data, finds the
/// location it belongs within the sorted list, and inserts it there. It repeats until no input
/// elements remain.
///
/// At each array-position, it checks the value there against the largest value in the sorted
/// prefix (which happens to be next to it). If it is not smaller, the element stays in place.
/// If smaller, the prefix is walked backwards to the insertion point and the larger values are
/// shifted up by one to make space for it.
///
/// `O(n²)` comparisons in the worst and average case, `O(1)` extra space.
///
/// # Usage
///```
/// use sortkit_engine::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Debug, Default, Clone, Copy)]
pub struct InsertionSorter;

impl<T> Sorter<T> for InsertionSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        insertion_sort_by(slice, is_less)
    }
}

/// Sorts `slice` in non-descending order with insertion sort.
pub fn insertion_sort<T: Ord>(slice: &mut [T]) {
    insertion_sort_by(slice, |a, b| a < b)
}

/// Sorts `slice` with insertion sort, using `is_less` as the strict ordering.
pub fn insertion_sort_by<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    insert_each(slice, &mut is_less)
}

// Shared with the small-range fallback of quick sort and quick select.
pub(crate) fn insert_each<T, F>(slice: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for unsorted in 1..slice.len() {
        if !is_less(&slice[unsorted], &slice[unsorted - 1]) {
            continue;
        }

        let mut hole = unsorted - 1;
        while hole > 0 && is_less(&slice[unsorted], &slice[hole - 1]) {
            hole -= 1;
        }
        // Shift [hole, unsorted) one slot right and drop the element into the hole.
        slice[hole..=unsorted].rotate_right(1);
    }
}
