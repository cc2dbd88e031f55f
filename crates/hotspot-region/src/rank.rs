//! Component ranking and top-K selection
//!
//! Orders component records by descending size and picks out the labels
//! of the largest ones.

use crate::aggregate::ComponentRecord;

/// Default number of top components to keep.
pub const DEFAULT_TOP_K: usize = 2;

/// Order `records` by descending size.
///
/// The sort is stable: among equal sizes the input order is preserved,
/// so for records straight out of
/// [`component_sizes`](crate::component_sizes) the smaller label comes
/// first.
pub fn rank_by_size(records: &[ComponentRecord]) -> Vec<ComponentRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by_key(|r| std::cmp::Reverse(r.size));
    ranked
}

/// Take the labels of the first `k` records of a ranked list.
///
/// Returns fewer than `k` labels if fewer components exist, and an empty
/// list for an empty input.
pub fn top_k_labels(ranked: &[ComponentRecord], k: usize) -> Vec<u32> {
    ranked.iter().take(k).map(|r| r.label).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(pairs: &[(u32, usize)]) -> Vec<ComponentRecord> {
        pairs
            .iter()
            .map(|&(label, size)| ComponentRecord::new(label, size))
            .collect()
    }

    #[test]
    fn test_descending_by_size() {
        let ranked = rank_by_size(&records(&[(1, 2), (2, 7), (3, 4)]));
        let sizes: Vec<usize> = ranked.iter().map(|r| r.size).collect();
        assert_eq!(sizes, vec![7, 4, 2]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Sizes 5, 3, 3: the two 3s keep label order 2 before 3.
        let ranked = rank_by_size(&records(&[(1, 5), (2, 3), (3, 3)]));
        let labels: Vec<u32> = ranked.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![1, 2, 3]);
    }

    #[test]
    fn test_all_equal_sizes_keep_order() {
        let ranked = rank_by_size(&records(&[(4, 1), (1, 1), (9, 1)]));
        let labels: Vec<u32> = ranked.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec![4, 1, 9]);
    }

    #[test]
    fn test_top_k() {
        let ranked = rank_by_size(&records(&[(1, 5), (2, 3), (3, 3)]));
        assert_eq!(top_k_labels(&ranked, 2), vec![1, 2]);
        assert_eq!(top_k_labels(&ranked, DEFAULT_TOP_K), vec![1, 2]);
    }

    #[test]
    fn test_top_k_with_fewer_components() {
        let ranked = rank_by_size(&records(&[(1, 5)]));
        assert_eq!(top_k_labels(&ranked, 3), vec![1]);
        assert!(top_k_labels(&[], 2).is_empty());
        assert!(top_k_labels(&ranked, 0).is_empty());
    }
}
