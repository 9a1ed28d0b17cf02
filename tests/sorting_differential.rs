//! Differential tests: every sort must agree with the standard library's
//! sort on the same inputs, across random vectors and the usual boundary
//! shapes.

use dsakit::sorting::{
    bubble_sort, heap_sort, insertion_sort, merge_sort, quick_sort, selection_sort,
};
use paste::paste;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn reference_sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort();
    values
}

macro_rules! differential_sort_tests {
    ($($sort:ident),* $(,)?) => {
        $(
            paste! {
                #[test]
                fn [<$sort _matches_reference_on_random_input>]() {
                    let mut rng = StdRng::seed_from_u64(0x5EED);
                    for len in [0usize, 1, 2, 3, 7, 10, 50, 100, 250] {
                        let input: Vec<i32> =
                            (0..len).map(|_| rng.gen_range(-1_000..1_000)).collect();
                        assert_eq!(
                            $sort(input.clone()),
                            reference_sorted(input.clone()),
                            "{} disagreed with the reference on {:?}",
                            stringify!($sort),
                            input,
                        );
                    }
                }

                #[test]
                fn [<$sort _handles_boundary_shapes>]() {
                    assert_eq!($sort(Vec::<i32>::new()), Vec::<i32>::new());
                    assert_eq!($sort(vec![5]), vec![5]);

                    let sorted: Vec<i32> = (0..20).collect();
                    assert_eq!($sort(sorted.clone()), sorted);

                    let reversed: Vec<i32> = (0..20).rev().collect();
                    assert_eq!($sort(reversed), (0..20).collect::<Vec<i32>>());

                    let duplicates = vec![3, 3, 3, 1, 1, 2];
                    assert_eq!($sort(duplicates), vec![1, 1, 2, 3, 3, 3]);
                }
            }
        )*
    };
}

differential_sort_tests!(
    bubble_sort,
    selection_sort,
    insertion_sort,
    merge_sort,
    quick_sort,
    heap_sort,
);

#[test]
fn sorts_agree_with_each_other() {
    let mut rng = StdRng::seed_from_u64(42);
    let input: Vec<i32> = (0..200).map(|_| rng.gen_range(-50..50)).collect();
    let expected = reference_sorted(input.clone());

    assert_eq!(bubble_sort(input.clone()), expected);
    assert_eq!(selection_sort(input.clone()), expected);
    assert_eq!(insertion_sort(input.clone()), expected);
    assert_eq!(merge_sort(input.clone()), expected);
    assert_eq!(quick_sort(input.clone()), expected);
    assert_eq!(heap_sort(input), expected);
}
