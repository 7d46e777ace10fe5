use sortkit_engine::*;
use utilities::*;

fn sorted_copy(input: &[i32]) -> Vec<i32> {
    let mut expected = input.to_vec();
    expected.sort_unstable();
    expected
}

mod properties {
    use super::*;

    #[test]
    fn sorts_every_pattern() {
        for algorithm in Algorithm::ALL {
            for len in (0..=40).chain([63, 64, 65, 500]) {
                for (name, input) in patterns(len, len as u64) {
                    let mut slice = input.clone();
                    algorithm.sort(&mut slice);

                    assert!(is_sorted(&slice), "{algorithm} / {name} / {len}");
                    assert!(same_multiset(&slice, &input), "{algorithm} / {name} / {len}");
                }
            }
        }
    }

    #[test]
    fn matches_std_on_random_input() {
        let mut random = rng(0x5eed);
        for algorithm in Algorithm::ALL {
            for _ in 0..50 {
                let len = rand::Rng::gen_range(&mut random, 0..300);
                let input = random_vec(&mut random, len, 100);
                let mut slice = input.clone();
                algorithm.sort(&mut slice);
                assert_eq!(slice, sorted_copy(&input), "{algorithm}");
            }
        }
    }

    #[test]
    fn idempotent() {
        for algorithm in Algorithm::ALL {
            let mut slice = sorted_copy(&random_vec(&mut rng(3), 200, 50));
            let once = slice.clone();
            algorithm.sort(&mut slice);
            assert_eq!(slice, once, "{algorithm}");
        }
    }

    #[test]
    fn sorters_agree_with_free_functions() {
        let input = random_vec(&mut rng(11), 120, 1000);
        let expected = sorted_copy(&input);

        let mut slice = input.clone();
        InsertionSorter.sort(&mut slice);
        assert_eq!(slice, expected);

        let mut slice = input.clone();
        SelectionSorter.sort(&mut slice);
        assert_eq!(slice, expected);

        let mut slice = input.clone();
        ShellSorter.sort(&mut slice);
        assert_eq!(slice, expected);

        let mut slice = input.clone();
        MergeSorter.sort(&mut slice);
        assert_eq!(slice, expected);

        let mut slice = input;
        QuickSorter.sort(&mut slice);
        assert_eq!(slice, expected);
    }
}

mod boundaries {
    use super::*;

    #[test]
    fn empty_and_single() {
        for algorithm in Algorithm::ALL {
            let mut empty: Vec<i32> = vec![];
            algorithm.sort(&mut empty);
            assert!(empty.is_empty());

            let mut one = vec![42];
            algorithm.sort(&mut one);
            assert_eq!(one, [42]);
        }
    }

    #[test]
    fn around_the_quick_sort_cutoff() {
        for len in 9..=13 {
            for (name, input) in patterns(len, 99) {
                let mut slice = input.clone();
                quick_sort(&mut slice);
                assert_eq!(slice, sorted_copy(&input), "{name} / {len}");
            }
        }
    }

    #[test]
    fn scenario() {
        for algorithm in Algorithm::ALL {
            let mut slice = SCENARIO;
            algorithm.sort(&mut slice);
            assert_eq!(slice, SCENARIO_SORTED, "{algorithm}");

            let mut ten = SCENARIO[..10].to_vec();
            algorithm.sort(&mut ten);
            assert_eq!(ten, sorted_copy(&SCENARIO[..10]), "{algorithm}");
        }
    }
}

mod orderings {
    use super::*;

    #[test]
    fn custom_predicate() {
        let words = ["kiwi", "fig", "banana", "apple", "cherry"];
        for algorithm in Algorithm::ALL {
            let mut slice = words;
            algorithm.sort_by(&mut slice, |a, b| {
                a.len() < b.len() || (a.len() == b.len() && a < b)
            });
            assert_eq!(
                slice,
                ["fig", "kiwi", "apple", "banana", "cherry"],
                "{algorithm}"
            );
        }
    }

    #[test]
    fn floats_without_nan() {
        let mut slice = [2.5, -1.0, 0.0, 10.25, 3.0, -7.5, 0.5, 1.0, 8.0, 4.0, 6.5, 2.0];
        quick_sort_by(&mut slice, |a, b| a < b);
        assert_eq!(
            slice,
            [-7.5, -1.0, 0.0, 0.5, 1.0, 2.0, 2.5, 3.0, 4.0, 6.5, 8.0, 10.25]
        );
    }

    #[test]
    fn equal_keys_are_kept() {
        let input = tag(&[3, 1, 3, 2, 1, 3, 2, 2, 1, 3, 3, 1, 2]);
        for algorithm in Algorithm::ALL {
            let mut slice = input.clone();
            algorithm.sort(&mut slice);

            assert!(is_sorted(&slice), "{algorithm}");
            let mut seen = origins(&slice);
            seen.sort_unstable();
            assert_eq!(seen, (0..input.len()).collect::<Vec<_>>(), "{algorithm}");
        }
    }
}
