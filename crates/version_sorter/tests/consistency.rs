// randomized checks that the comparator is a total order and that sorting
// behaves, on strings built from the characters versions are made of

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use version_sorter::{HyphenMode, Sorter, Tokenizer, compare};

const ALPHABET: &[u8] = b"0123456789abAB.-+_";

fn random_version(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..10);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

fn random_batch(seed: u64, count: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| random_version(&mut rng)).collect()
}

#[test]
fn antisymmetric() {
    for tk in [Tokenizer::new(HyphenMode::Separator), Tokenizer::new(HyphenMode::PreRelease)] {
        let batch = random_batch(1, 200);
        for a in &batch {
            for b in &batch {
                assert_eq!(tk.compare(a, b), tk.compare(b, a).reverse(), "{a:?} vs {b:?}");
            }
        }
    }
}

#[test]
fn transitive() {
    let batch = random_batch(2, 50);
    for a in &batch {
        for b in &batch {
            for c in &batch {
                let ab = compare(a, b);
                let bc = compare(b, c);
                if ab == bc || bc == Ordering::Equal {
                    assert_eq!(compare(a, c), ab, "{a:?} {b:?} {c:?}");
                } else if ab == Ordering::Equal {
                    assert_eq!(compare(a, c), bc, "{a:?} {b:?} {c:?}");
                }
            }
        }
    }
}

#[test]
fn sorted_output_is_ordered() {
    for seed in 0..20 {
        let batch = random_batch(100 + seed, 100);

        let asc = Sorter::new().sorted(&batch);
        for w in asc.windows(2) {
            assert_ne!(compare(&w[0], &w[1]), Ordering::Greater, "{:?} {:?}", w[0], w[1]);
        }

        let desc = Sorter::new().descending(true).sorted(&batch);
        for w in desc.windows(2) {
            assert_ne!(compare(&w[0], &w[1]), Ordering::Less, "{:?} {:?}", w[0], w[1]);
        }

        // sorting again changes nothing
        assert_eq!(Sorter::new().sorted(&asc), asc);
    }
}

#[test]
fn reverse_is_inverse_without_ties() {
    let mut rng = StdRng::seed_from_u64(3);

    let mut batch = random_batch(4, 300);
    batch.sort_by(|a, b| compare(a, b));
    batch.dedup_by(|a, b| compare(a, b) == Ordering::Equal);
    batch.shuffle(&mut rng);

    let mut asc = version_sorter::sort(&batch);
    let desc = version_sorter::rsort(&batch);
    asc.reverse();
    assert_eq!(asc, desc);
}

#[test]
fn ties_keep_input_order() {
    // every one of these is the version 1.2
    let same = ["1.2", "1.02", "1-2", "1_2", "01.2", "1..2"];
    let mut batch: Vec<&str> = same.to_vec();
    batch.insert(3, "1.10");
    batch.insert(0, "0.9");

    let asc = version_sorter::sort(&batch);
    assert_eq!(asc, ["0.9", "1.2", "1.02", "1-2", "1_2", "01.2", "1..2", "1.10"]);

    let desc = version_sorter::rsort(&batch);
    assert_eq!(desc, ["1.10", "1.2", "1.02", "1-2", "1_2", "01.2", "1..2", "0.9"]);
}

#[test]
fn indices_are_a_permutation() {
    let batch = random_batch(5, 500);
    let mut idx = version_sorter::sort_indices(&batch);
    idx.sort_unstable();
    assert_eq!(idx, (0..batch.len()).collect::<Vec<_>>());
}

#[test]
fn in_place_matches_copy() {
    for seed in 0..10 {
        let batch = random_batch(200 + seed, 64);
        let copy = version_sorter::sort(&batch);
        let mut in_place = batch.clone();
        version_sorter::sort_mut(&mut in_place);
        assert_eq!(copy, in_place);
    }
}
