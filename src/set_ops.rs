//! Pure set algebra over in-memory sequences

use rand::Rng;

/// Intersection of many lists
///
/// Returns the elements of the first list that appear in every other list,
/// preserving the first list's relative order; duplicates in the first list
/// survive if they pass the membership test. Callers guard the empty case
/// (an empty selection is handled one layer up); an empty `lists` slice
/// yields an empty vector.
pub fn intersect<T: PartialEq + Clone>(lists: &[Vec<T>]) -> Vec<T> {
    let Some((first, rest)) = lists.split_first() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for candidate in first {
        if rest.iter().all(|list| list.contains(candidate)) {
            out.push(candidate.clone());
        }
    }
    out
}

/// Unbiased in-place permutation (Durstenfeld variant of Fisher-Yates)
///
/// For each index i from the back down to 1, swaps i with a uniformly
/// random j in [0, i]. Linear time; every permutation is equally likely
/// given a uniform random source.
pub fn shuffle<T, R: Rng + ?Sized>(list: &mut [T], rng: &mut R) {
    for i in (1..list.len()).rev() {
        let j = rng.gen_range(0..=i);
        list.swap(i, j);
    }
}

/// Uniform random choice from a list; `None` when the list is empty
pub fn pick<'a, T, R: Rng + ?Sized>(list: &'a [T], rng: &mut R) -> Option<&'a T> {
    if list.is_empty() {
        return None;
    }
    Some(&list[rng.gen_range(0..list.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn intersect_keeps_first_list_order() {
        let lists = vec![
            vec!["c", "a", "b", "d"],
            vec!["d", "b", "c"],
            vec!["b", "c", "d", "e"],
        ];
        assert_eq!(intersect(&lists), vec!["c", "b", "d"]);
    }

    #[test]
    fn intersect_single_list_is_identity() {
        let lists = vec![vec![1, 2, 3]];
        assert_eq!(intersect(&lists), vec![1, 2, 3]);
    }

    #[test]
    fn intersect_disjoint_lists_is_empty() {
        let lists = vec![vec!["a", "b"], vec!["c", "d"]];
        assert!(intersect(&lists).is_empty());
    }

    #[test]
    fn intersect_keeps_first_list_duplicates() {
        let lists = vec![vec![1, 2, 1, 3], vec![1, 3]];
        assert_eq!(intersect(&lists), vec![1, 1, 3]);
    }

    #[test]
    fn intersect_of_nothing_is_empty() {
        let lists: Vec<Vec<u8>> = vec![];
        assert!(intersect(&lists).is_empty());
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut list: Vec<u32> = (0..50).collect();
        shuffle(&mut list, &mut rng);

        let mut sorted = list.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u32>>());
    }

    #[test]
    fn shuffle_is_reproducible_given_a_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b: Vec<u32> = (0..20).collect();
        shuffle(&mut a, &mut StdRng::seed_from_u64(42));
        shuffle(&mut b, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffle_handles_degenerate_sizes() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![9]);
    }

    #[test]
    fn shuffle_positions_are_roughly_uniform() {
        // Statistical check: over many trials on [0, 1, 2, 3], element 0
        // should land in each position about a quarter of the time.
        const TRIALS: usize = 8000;
        let mut rng = StdRng::seed_from_u64(1234);
        let mut position_counts = [0usize; 4];

        for _ in 0..TRIALS {
            let mut list = [0, 1, 2, 3];
            shuffle(&mut list, &mut rng);
            let position = list.iter().position(|&x| x == 0).unwrap();
            position_counts[position] += 1;
        }

        for count in position_counts {
            let frequency = count as f64 / TRIALS as f64;
            assert!(
                (0.20..=0.30).contains(&frequency),
                "position frequency {} outside tolerance",
                frequency
            );
        }
    }

    #[test]
    fn pick_on_empty_is_none() {
        let mut rng = StdRng::seed_from_u64(0);
        let empty: Vec<u8> = vec![];
        assert_eq!(pick(&empty, &mut rng), None);
    }

    #[test]
    fn pick_on_singleton_is_that_element() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(pick(&[42], &mut rng), Some(&42));
    }

    #[test]
    fn pick_always_returns_a_member() {
        let mut rng = StdRng::seed_from_u64(99);
        let list = ["a", "b", "c"];
        for _ in 0..100 {
            let chosen = pick(&list, &mut rng).unwrap();
            assert!(list.contains(chosen));
        }
    }
}
