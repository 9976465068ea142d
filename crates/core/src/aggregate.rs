use crate::result::{Distribution, ItemResult, MorphologyAnalysisResult};

/// How the per-arbor results of one metric are collapsed into the single
/// morphology-level result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Sum over every present arbor result.
    Total,
    /// The whole result object with the smallest value, so the identity of
    /// the winning arbor survives.
    Minimum,
    /// The whole result object with the largest value.
    Maximum,
    /// Arbor-level mean: sum of values divided by the number of arbor
    /// results, not by sections or samples.
    Average,
}

/// Fills `result.morphology` from the per-arbor slots. Absent arbors are
/// skipped; with no arbor results at all the morphology slot stays `None`
/// (average in particular never divides by zero).
pub fn aggregate(result: &mut MorphologyAnalysisResult, policy: Aggregation) {
    let arbor_results = result.arbor_results();
    if arbor_results.is_empty() {
        result.morphology = None;
        return;
    }
    result.morphology = Some(match policy {
        Aggregation::Total => {
            let total: f32 = arbor_results.iter().map(|r| r.value).sum();
            ItemResult::scalar(total)
        }
        Aggregation::Minimum => {
            let mut minimum = ItemResult::scalar(f32::INFINITY);
            for candidate in arbor_results {
                if candidate.value < minimum.value {
                    minimum = *candidate;
                }
            }
            minimum
        }
        Aggregation::Maximum => {
            let mut maximum = ItemResult::scalar(f32::NEG_INFINITY);
            for candidate in arbor_results {
                if candidate.value > maximum.value {
                    maximum = *candidate;
                }
            }
            maximum
        }
        Aggregation::Average => {
            let total: f32 = arbor_results.iter().map(|r| r.value).sum();
            ItemResult::scalar(total / arbor_results.len() as f32)
        }
    });
}

/// Morphology-level histogram for distribution-valued kernels: one slot per
/// branching order up to the whole-cell maximum, each initialized to
/// `(order, 0)`, then per-arbor entries added into their order's slot.
pub fn aggregate_distribution_total(result: &mut MorphologyAnalysisResult<Distribution>) {
    let arbor_results = result.arbor_results();
    if arbor_results.is_empty() {
        result.morphology = None;
        return;
    }
    let maximum_order = arbor_results
        .iter()
        .flat_map(|distribution| distribution.iter().map(|(order, _)| *order))
        .max()
        .unwrap_or(0);
    let mut histogram: Distribution = (1..=maximum_order).map(|order| (order, 0.0)).collect();
    for distribution in arbor_results {
        for (order, value) in distribution {
            histogram[*order as usize - 1].1 += value;
        }
    }
    result.morphology = Some(histogram);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_arbor_result() -> MorphologyAnalysisResult {
        MorphologyAnalysisResult {
            axon: Some(ItemResult::scalar(10.0)),
            apical_dendrite: None,
            basal_dendrites: vec![ItemResult::scalar(4.0), ItemResult::scalar(6.0)],
            morphology: None,
        }
    }

    #[test]
    fn total_sums_present_arbors() {
        let mut result = three_arbor_result();
        aggregate(&mut result, Aggregation::Total);
        assert_eq!(result.morphology.unwrap().value, 20.0);
    }

    #[test]
    fn total_is_idempotent() {
        let mut result = three_arbor_result();
        aggregate(&mut result, Aggregation::Total);
        let first = result.morphology;
        aggregate(&mut result, Aggregation::Total);
        assert_eq!(result.morphology, first);
    }

    #[test]
    fn maximum_keeps_winning_result_object() {
        let mut result = three_arbor_result();
        result.axon = Some(ItemResult::at_order(10.0, 7));
        aggregate(&mut result, Aggregation::Maximum);
        let winner = result.morphology.unwrap();
        assert_eq!(winner.value, 10.0);
        assert_eq!(winner.branching_order, Some(7));
    }

    #[test]
    fn average_divides_by_arbor_count() {
        let mut result = three_arbor_result();
        aggregate(&mut result, Aggregation::Average);
        let average = result.morphology.unwrap().value;
        assert!((average - 20.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn min_average_max_are_ordered() {
        let mut min_result = three_arbor_result();
        let mut avg_result = three_arbor_result();
        let mut max_result = three_arbor_result();
        aggregate(&mut min_result, Aggregation::Minimum);
        aggregate(&mut avg_result, Aggregation::Average);
        aggregate(&mut max_result, Aggregation::Maximum);
        let minimum = min_result.morphology.unwrap().value;
        let average = avg_result.morphology.unwrap().value;
        let maximum = max_result.morphology.unwrap().value;
        assert!(minimum <= average && average <= maximum);
        assert_eq!(minimum, 4.0);
        assert_eq!(maximum, 10.0);
    }

    #[test]
    fn zero_arbors_aggregate_to_none() {
        let mut result = MorphologyAnalysisResult::default();
        aggregate(&mut result, Aggregation::Average);
        assert!(result.morphology.is_none());
        aggregate(&mut result, Aggregation::Minimum);
        assert!(result.morphology.is_none());
    }

    #[test]
    fn distribution_total_builds_dense_histogram() {
        let mut result: MorphologyAnalysisResult<Distribution> = MorphologyAnalysisResult {
            axon: Some(vec![(1, 2.0), (3, 1.0)]),
            apical_dendrite: None,
            basal_dendrites: vec![vec![(1, 1.0), (2, 4.0)]],
            morphology: None,
        };
        aggregate_distribution_total(&mut result);
        assert_eq!(
            result.morphology.unwrap(),
            vec![(1, 3.0), (2, 4.0), (3, 1.0)]
        );
    }
}
