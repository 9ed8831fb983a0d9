// Property checks for the step tracer over many small arrays

use bsearch_viz::tracer::{trace, Outcome, SearchResult, Trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Sorted arrays of every length up to 40, some with duplicates
fn sample_arrays() -> Vec<Vec<i64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut arrays = Vec::new();
    for n in 1..=40 {
        arrays.push((0..n as i64).map(|i| i * 2).collect());
        let mut random: Vec<i64> = (0..n).map(|_| rng.gen_range(-20..20)).collect();
        random.sort_unstable();
        arrays.push(random);
    }
    arrays
}

fn check_windows_shrink(trace: &Trace) {
    for pair in trace.steps().windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(!prev.found(), "found step must be last");
        assert!(next.low >= prev.low, "low moved left: {:?}", trace);
        assert!(next.high <= prev.high, "high moved right: {:?}", trace);
        let prev_width = prev.high - prev.low;
        let next_width = next.high - next.low;
        assert!(next_width < prev_width, "window did not shrink: {:?}", trace);
    }
}

#[test]
fn test_present_targets_are_found() {
    for array in sample_arrays() {
        for &target in &array {
            let trace = trace(&array, target).expect("non-empty array");
            let last = trace.last().unwrap();

            assert!(last.found());
            let index = last.found_index().unwrap();
            assert_eq!(array[index], target);
            assert_eq!(
                trace.result(),
                SearchResult::Found {
                    index,
                    steps: trace.len()
                }
            );
            check_windows_shrink(&trace);
        }
    }
}

#[test]
fn test_absent_targets_end_exhausted() {
    for array in sample_arrays() {
        let min = *array.first().unwrap();
        let max = *array.last().unwrap();
        for target in (min - 3)..=(max + 3) {
            if array.contains(&target) {
                continue;
            }
            let trace = trace(&array, target).unwrap();
            let last = trace.last().unwrap();

            assert_eq!(last.outcome, Outcome::Exhausted);
            assert_eq!(last.mid_or_sentinel(), -1);
            assert!(!last.found());
            assert!(last.low > last.high);
            assert!(trace.steps().iter().all(|s| !s.found()));
            check_windows_shrink(&trace);
        }
    }
}

#[test]
fn test_length_bound() {
    for array in sample_arrays() {
        let bound = ceil_log2(array.len()) + 2;
        let min = *array.first().unwrap();
        let max = *array.last().unwrap();
        for target in (min - 1)..=(max + 1) {
            let trace = trace(&array, target).unwrap();
            assert!(
                trace.len() <= bound,
                "{} steps for n = {} (bound {})",
                trace.len(),
                array.len(),
                bound
            );
        }
    }
}

#[test]
fn test_deterministic() {
    let array = [3, 8, 8, 15, 21, 34, 55];
    assert_eq!(trace(&array, 21), trace(&array, 21));
    assert_eq!(trace(&array, 4), trace(&array, 4));
}

#[test]
fn test_duplicates_report_first_probed_index() {
    // mid = 2 hits a 5 straight away, not the first occurrence at index 1
    let array = [1, 5, 5, 5, 9];
    let trace = trace(&array, 5).unwrap();

    assert_eq!(trace.len(), 1);
    assert_eq!(trace.result(), SearchResult::Found { index: 2, steps: 1 });
}

#[test]
fn test_documented_examples() {
    let found = trace(&[1, 3, 5, 7, 9], 7).unwrap();
    let mids: Vec<_> = found.steps().iter().map(|s| s.mid).collect();
    assert_eq!(mids, vec![Some(2), Some(3)]);
    assert_eq!(found.result(), SearchResult::Found { index: 3, steps: 2 });

    let missing = trace(&[2, 4, 6], 5).unwrap();
    let outcomes: Vec<_> = missing.steps().iter().map(|s| s.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            Outcome::Right { new_low: 2 },
            Outcome::Left { new_high: 1 },
            Outcome::Exhausted,
        ]
    );
    assert_eq!(missing.result(), SearchResult::NotFound { steps: 3 });
}

#[test]
fn test_empty_array() {
    assert_eq!(trace(&[], 0), None);
}
