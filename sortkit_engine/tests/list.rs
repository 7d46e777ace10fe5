use sortkit_engine::list::{merge_sort_list, merge_sort_list_by, List, ListNode};
use utilities::*;

fn node_addresses<T>(list: &List<T>) -> Vec<usize> {
    let mut addresses = Vec::new();
    let mut cursor = list.head();
    while let Some(node) = cursor {
        addresses.push(node as *const ListNode<T> as usize);
        cursor = node.next.as_deref();
    }
    addresses
}

#[test]
fn round_trip() {
    let list: List<_> = [3, 1, 2].into_iter().collect();
    let sorted = List::from_head(merge_sort_list(list.into_head()));

    assert_eq!(sorted.len(), 3);
    assert_eq!(sorted.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn relinks_without_reallocating() {
    let mut list: List<_> = random_vec(&mut rng(5), 257, 20).into_iter().collect();

    let mut before = node_addresses(&list);
    list.merge_sort();
    let mut after = node_addresses(&list);

    assert_eq!(after.len(), 257);
    before.sort_unstable();
    after.sort_unstable();
    assert_eq!(before, after);
}

#[test]
fn empty_and_single() {
    assert!(merge_sort_list::<i32>(None).is_none());

    let single = Some(Box::new(ListNode::new(9)));
    let sorted = List::from_head(merge_sort_list(single));
    assert_eq!(sorted.into_iter().collect::<Vec<_>>(), [9]);
}

#[test]
fn sorts_every_pattern() {
    for len in (0..=33).chain([100, 1000]) {
        for (name, input) in patterns(len, 17) {
            let mut list: List<_> = input.iter().copied().collect();
            list.merge_sort();
            let output = list.into_iter().collect::<Vec<_>>();

            assert!(is_sorted(&output), "{name} / {len}");
            assert!(same_multiset(&output, &input), "{name} / {len}");
        }
    }
}

#[test]
fn descending_by_predicate() {
    let list: List<_> = SCENARIO.into_iter().collect();
    let head = merge_sort_list_by(list.into_head(), |a, b| b < a);
    let output = List::from_head(head).into_iter().collect::<Vec<_>>();

    let mut expected = SCENARIO_SORTED.to_vec();
    expected.reverse();
    assert_eq!(output, expected);
}

#[test]
fn long_list() {
    let mut list: List<_> = (0..200_000).rev().collect();
    list.merge_sort();
    assert_eq!(list.len(), 200_000);
    assert!(list.iter().zip(0..).all(|(value, expected)| *value == expected));
}
