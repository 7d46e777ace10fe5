use super::{Link, ListNode};

/// Sorts the chain starting at `head` with top-down merge sort and returns the new head.
///
/// The chain is split at its midpoint with a slow/fast walk, both halves are sorted
/// recursively and then merged. No node is allocated or freed: the boxes of the input chain
/// are the boxes of the output chain. When two heads compare equal, the head of the second
/// half is linked first.
///
/// Recursion depth is `O(log n)`; merging is iterative.
///
/// ```
/// use sortkit_engine::list::{merge_sort_list, List};
///
/// let list: List<_> = [3, 1, 2].into_iter().collect();
/// let sorted = List::from_head(merge_sort_list(list.into_head()));
/// assert_eq!(sorted.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
/// ```
pub fn merge_sort_list<T: Ord>(head: Link<T>) -> Link<T> {
    merge_sort_list_by(head, |a, b| a < b)
}

pub fn merge_sort_list_by<T, F>(head: Link<T>, mut is_less: F) -> Link<T>
where
    F: FnMut(&T, &T) -> bool,
{
    sort(head, &mut is_less)
}

fn sort<T, F>(head: Link<T>, is_less: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut first = match head {
        Some(node) if node.next.is_some() => node,
        short => return short,
    };

    let second = split_off_back_half(&mut first);
    let first = sort(Some(first), is_less);
    let second = sort(second, is_less);
    merge(first, second, is_less)
}

/// Cuts the chain after its middle node and returns the back half. With `n` nodes the front
/// keeps `ceil(n / 2)` of them.
fn split_off_back_half<T>(head: &mut ListNode<T>) -> Link<T> {
    // `slow` advances once for every two steps of `fast`; only the step count is kept so the
    // cut can be made with a single mutable walk afterwards.
    let mut steps = 0;
    let mut fast = head.next.as_deref();
    while let Some(node) = fast {
        match node.next.as_deref() {
            Some(after) => {
                steps += 1;
                fast = after.next.as_deref();
            }
            None => break,
        }
    }

    let mut cut = &mut head.next;
    for _ in 0..steps {
        match cut {
            Some(node) => cut = &mut node.next,
            None => break,
        }
    }
    cut.take()
}

/// Merges two sorted chains. Takes from `b` unless `a`'s head is strictly less.
fn merge<T, F>(mut a: Link<T>, mut b: Link<T>, is_less: &mut F) -> Link<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut merged = None;
    let mut tail = &mut merged;

    while let (Some(x), Some(y)) = (a.as_deref(), b.as_deref()) {
        let take_a = is_less(&x.val, &y.val);
        let source = if take_a { &mut a } else { &mut b };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }

    // One side ran out; the rest of the other is already sorted.
    *tail = a.or(b);
    merged
}
