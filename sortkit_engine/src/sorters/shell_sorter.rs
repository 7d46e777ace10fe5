use crate::sorters::Sorter;

/// An implementation of [Shell Sort](https://en.wikipedia.org/wiki/Shellsort)
///
/// # Usage
///```
/// use sortkit_engine::{ShellSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// ShellSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
///
/// # Explanation
///
/// Shell sort generalises insertion sort by first sorting elements that are far apart and then
/// progressively reducing the gap between the compared elements. Elements that are badly out of
/// place travel long distances in a few moves instead of one slot at a time.
///
/// This implementation uses Shell's original gap sequence: `n / 2`, halved on every pass down to
/// `1`. The last pass is a plain insertion sort over an almost sorted slice.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellSorter;

impl<T> Sorter<T> for ShellSorter {
    #[inline]
    fn sort_by<F>(&self, slice: &mut [T], is_less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        shell_sort_by(slice, is_less)
    }
}

pub fn shell_sort<T: Ord>(slice: &mut [T]) {
    shell_sort_by(slice, |a, b| a < b)
}

pub fn shell_sort_by<T, F>(slice: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut gap = slice.len() / 2;

    while gap > 0 {
        for unsorted in gap..slice.len() {
            let mut j = unsorted;
            while j >= gap && is_less(&slice[j], &slice[j - gap]) {
                slice.swap(j, j - gap);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        ShellSorter.sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn sorted_array() {
        let mut slice = (1..10).collect::<Vec<_>>();
        ShellSorter.sort(&mut slice);
        assert_eq!(slice, (1..10).collect::<Vec<_>>());
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        shell_sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn simple_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        ShellSorter.sort(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![1];
        ShellSorter.sort(&mut one);
        assert_eq!(one, vec![1]);

        let mut two = vec![2, 1];
        ShellSorter.sort(&mut two);
        assert_eq!(two, vec![1, 2]);

        let mut three = vec![3, 1, 2];
        ShellSorter.sort(&mut three);
        assert_eq!(three, vec![1, 2, 3]);
    }

    #[test]
    fn gaps_halve_down_to_one() {
        // With 8 elements the passes use gaps 4, 2 and 1. A sorted input needs exactly one
        // comparison per position per pass: 4 + 6 + 7.
        let mut comparisons = 0;
        let mut slice = (0..8).collect::<Vec<_>>();
        shell_sort_by(&mut slice, |a, b| {
            comparisons += 1;
            a < b
        });
        assert_eq!(comparisons, 17);
    }
}
