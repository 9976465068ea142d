use arbora_skeleton::{Morphology, SectionId};
use tracing::debug;

use crate::aggregate::{aggregate, aggregate_distribution_total, Aggregation};
use crate::result::{Distribution, ItemResult, MorphologyAnalysisResult};

/// A metric kernel: pure function over one arbor, addressed by its root.
pub type ArborKernel<T> = fn(&Morphology, SectionId) -> T;

/// Applies `kernel` to every present arbor and returns the filled per-arbor
/// slots. Absent arbor classes are skipped, never invoked.
pub fn apply_to_arbors<T>(
    morphology: &Morphology,
    kernel: ArborKernel<T>,
) -> MorphologyAnalysisResult<T> {
    let mut result = MorphologyAnalysisResult::default();
    if let Some(apical) = &morphology.apical_dendrite {
        result.apical_dendrite = Some(kernel(morphology, apical.root));
    }
    for dendrite in &morphology.basal_dendrites {
        result.basal_dendrites.push(kernel(morphology, dendrite.root));
    }
    if let Some(axon) = &morphology.axon {
        result.axon = Some(kernel(morphology, axon.root));
    }
    result
}

/// Runs one scalar kernel across the morphology and threads the per-arbor
/// results through the aggregation policy.
pub fn invoke_kernel(
    morphology: &Morphology,
    kernel: ArborKernel<ItemResult>,
    policy: Aggregation,
) -> MorphologyAnalysisResult {
    debug!(label = %morphology.label, ?policy, "invoking analysis kernel");
    let mut result = apply_to_arbors(morphology, kernel);
    aggregate(&mut result, policy);
    result
}

/// Distribution sibling of `invoke_kernel`: returns the raw nested per-arbor
/// histograms with the whole-morphology histogram in the morphology slot.
pub fn analysis_distributions(
    morphology: &Morphology,
    kernel: ArborKernel<Distribution>,
) -> MorphologyAnalysisResult<Distribution> {
    let mut result = apply_to_arbors(morphology, kernel);
    aggregate_distribution_total(&mut result);
    result
}

/// Writes the per-arbor maximum branching orders computed by the analysis
/// back onto the morphology's arbor records, where layout and rendering read
/// them without recomputing. An explicit step so the kernel layer stays
/// pure.
pub fn apply_branching_order_cache(
    morphology: &mut Morphology,
    result: &MorphologyAnalysisResult,
) {
    if let (Some(arbor), Some(item)) = (&mut morphology.axon, &result.axon) {
        arbor.maximum_branching_order = Some(item.value as u32);
    }
    if let (Some(arbor), Some(item)) = (&mut morphology.apical_dendrite, &result.apical_dendrite) {
        arbor.maximum_branching_order = Some(item.value as u32);
    }
    for (arbor, item) in morphology
        .basal_dendrites
        .iter_mut()
        .zip(&result.basal_dendrites)
    {
        arbor.maximum_branching_order = Some(item.value as u32);
    }
}
