//! Occurrence statistics over an identifier multiset.

use std::collections::{HashMap, HashSet};

/// Count how many times each distinct identifier appears.
pub fn count_occurrences(ids: &[String]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for id in ids {
        *counts.entry(id.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Identifiers that appear exactly `target` times, deduplicated, in
/// first-seen order. `target == 0` always yields an empty list.
pub fn ids_with_multiplicity(ids: &[String], target: usize) -> Vec<String> {
    let counts = count_occurrences(ids);
    let mut seen = HashSet::new();
    ids.iter()
        .filter(|id| counts[id.as_str()] == target && seen.insert(id.as_str()))
        .cloned()
        .collect()
}

/// For each occurrence count observed, how many distinct identifiers have
/// exactly that count.
pub fn occurrence_distribution(ids: &[String]) -> HashMap<usize, usize> {
    let mut distribution = HashMap::new();
    for count in count_occurrences(ids).into_values() {
        *distribution.entry(count).or_insert(0) += 1;
    }
    distribution
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ids_with_multiplicity() {
        let ids = ids(&["A", "A", "A", "B", "B", "C"]);
        assert_eq!(ids_with_multiplicity(&ids, 3), vec!["A"]);
        assert_eq!(ids_with_multiplicity(&ids, 2), vec!["B"]);
        assert_eq!(ids_with_multiplicity(&ids, 1), vec!["C"]);
        assert!(ids_with_multiplicity(&ids, 4).is_empty());
    }

    #[test]
    fn test_multiplicity_zero_is_empty() {
        let ids = ids(&["A", "B"]);
        assert!(ids_with_multiplicity(&ids, 0).is_empty());
    }

    #[test]
    fn test_first_seen_order() {
        let ids = ids(&["B", "A", "B", "A", "C", "C"]);
        assert_eq!(ids_with_multiplicity(&ids, 2), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_occurrence_distribution() {
        let ids = ids(&["A", "A", "A", "B", "B", "C"]);
        let dist = occurrence_distribution(&ids);
        assert_eq!(dist.len(), 3);
        assert_eq!(dist[&3], 1);
        assert_eq!(dist[&2], 1);
        assert_eq!(dist[&1], 1);
    }

    #[test]
    fn test_distribution_invariants() {
        let ids = ids(&["x", "y", "x", "z", "x", "y", "w"]);
        let dist = occurrence_distribution(&ids);

        let total: usize = dist.iter().map(|(count, tally)| count * tally).sum();
        assert_eq!(total, ids.len());

        let distinct: usize = dist.values().sum();
        assert_eq!(distinct, 4);
    }

    #[test]
    fn test_empty_input() {
        assert!(ids_with_multiplicity(&[], 3).is_empty());
        assert!(occurrence_distribution(&[]).is_empty());
    }
}
