use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// One scored entry during top-k selection.
///
/// Ordering: higher score wins; equal scores order by *ascending* item so
/// the total order is deterministic across runs.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    score: f64,
    item: u32,
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // total_cmp keeps the order total even for degenerate float input
        self.score
            .total_cmp(&other.score)
            .then_with(|| other.item.cmp(&self.item))
    }
}

/// Select the k highest scores without sorting the whole slice.
///
/// Keeps a bounded min-heap of size k (O(n log k)); the slice index is the
/// item id. Returns (item, score) sorted by descending score, ties by
/// ascending item.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(u32, f64)> {
    let k = k.min(scores.len());
    if k == 0 {
        return Vec::new();
    }
    // Reverse puts the currently-worst candidate on top for cheap eviction.
    let mut heap: BinaryHeap<Reverse<Candidate>> = BinaryHeap::with_capacity(k);
    for (i, &score) in scores.iter().enumerate() {
        let cand = Candidate {
            score,
            item: i as u32,
        };
        if heap.len() < k {
            heap.push(Reverse(cand));
        } else if let Some(Reverse(worst)) = heap.peek() {
            if cand > *worst {
                heap.pop();
                heap.push(Reverse(cand));
            }
        }
    }
    heap.into_sorted_vec()
        .into_iter()
        .map(|Reverse(c)| (c.item, c.score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full-sort baseline with the same total order.
    fn baseline(scores: &[f64], k: usize) -> Vec<(u32, f64)> {
        let mut all: Vec<(u32, f64)> = scores
            .iter()
            .copied()
            .enumerate()
            .map(|(i, s)| (i as u32, s))
            .collect();
        all.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        all.truncate(k);
        all
    }

    /// tiny deterministic PRNG (xorshift32)
    struct Rng(u32);
    impl Rng {
        fn new(seed: u32) -> Self {
            Self(seed)
        }
        fn next_u32(&mut self) -> u32 {
            let mut x = self.0;
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            self.0 = x;
            x
        }
    }

    #[test]
    fn handles_empty_and_k_zero() {
        assert!(top_k(&[], 5).is_empty());
        assert!(top_k(&[0.3, 0.1], 0).is_empty());
    }

    #[test]
    fn k_larger_than_input_returns_everything() {
        let got = top_k(&[0.2, 0.9, 0.5], 10);
        assert_eq!(got, vec![(1, 0.9), (2, 0.5), (0, 0.2)]);
    }

    #[test]
    fn ties_resolve_to_ascending_item() {
        let got = top_k(&[0.5, 0.7, 0.5, 0.7, 0.1], 4);
        assert_eq!(got, vec![(1, 0.7), (3, 0.7), (0, 0.5), (2, 0.5)]);
    }

    #[test]
    fn all_equal_scores_come_back_in_item_order() {
        let got = top_k(&[0.0, 0.0, 0.0, 0.0], 3);
        assert_eq!(got, vec![(0, 0.0), (1, 0.0), (2, 0.0)]);
    }

    #[test]
    fn matches_baseline_many_sizes() {
        let mut rng = Rng::new(0x1234_5678);
        for &n in &[1usize, 2, 3, 7, 8, 16, 33, 100, 257] {
            for &k in &[1usize, 2, 5, 16, 64] {
                // coarse buckets so score ties are common
                let scores: Vec<f64> = (0..n)
                    .map(|_| f64::from(rng.next_u32() % 8) / 8.0)
                    .collect();
                assert_eq!(
                    top_k(&scores, k),
                    baseline(&scores, k),
                    "mismatch at n={n} k={k}"
                );
            }
        }
    }
}
