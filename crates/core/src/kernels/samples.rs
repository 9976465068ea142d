use arbora_skeleton::{Morphology, SectionId};

use super::{fold_distribution, ZERO_EPSILON};
use crate::result::{Distribution, ItemResult};

/// Total number of digitized points of the arbor. Counted as the sum of
/// per-section segment counts plus the root sample, so a sample shared by a
/// parent and its children at a branching point contributes once.
pub fn total_samples(morphology: &Morphology, root: SectionId) -> ItemResult {
    let segments: usize = morphology
        .sections_of(root)
        .iter()
        .map(|id| morphology.section(*id).segment_count())
        .sum();
    ItemResult::scalar((segments + 1) as f32)
}

pub fn minimum_samples_per_section(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut minimum = ItemResult::scalar(f32::INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let count = section.samples.len() as f32;
        if count < minimum.value {
            minimum = ItemResult::at_order(count, section.branching_order);
        }
    }
    minimum
}

pub fn maximum_samples_per_section(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut maximum = ItemResult::scalar(f32::NEG_INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let count = section.samples.len() as f32;
        if count > maximum.value {
            maximum = ItemResult::at_order(count, section.branching_order);
        }
    }
    maximum
}

/// Arbor-level mean sample count per section, truncated to a whole number of
/// samples.
pub fn average_samples_per_section(morphology: &Morphology, root: SectionId) -> ItemResult {
    let sections = morphology.sections_of(root);
    let total: usize = sections
        .iter()
        .map(|id| morphology.section(*id).samples.len())
        .sum();
    ItemResult::scalar((total / sections.len()) as f32)
}

pub fn minimum_sample_radius(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut minimum = ItemResult::scalar(f32::INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        for sample in &section.samples {
            if sample.radius < minimum.value {
                minimum = ItemResult {
                    value: sample.radius,
                    branching_order: Some(section.branching_order),
                    radial_distance: Some(sample.radial_distance()),
                };
            }
        }
    }
    minimum
}

pub fn maximum_sample_radius(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut maximum = ItemResult::scalar(f32::NEG_INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        for sample in &section.samples {
            if sample.radius > maximum.value {
                maximum = ItemResult {
                    value: sample.radius,
                    branching_order: Some(section.branching_order),
                    radial_distance: Some(sample.radial_distance()),
                };
            }
        }
    }
    maximum
}

/// Mean of the per-section mean radii, not a flat per-sample mean.
pub fn average_sample_radius(morphology: &Morphology, root: SectionId) -> ItemResult {
    let sections = morphology.sections_of(root);
    let mut total = 0.0;
    for id in &sections {
        let section = morphology.section(*id);
        let radii: f32 = section.samples.iter().map(|sample| sample.radius).sum();
        total += radii / section.samples.len() as f32;
    }
    ItemResult::scalar(total / sections.len() as f32)
}

/// Count of samples whose radius collapsed to zero in the tracing.
pub fn zero_radius_samples(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut count = 0usize;
    for id in morphology.sections_of(root) {
        for sample in &morphology.section(id).samples {
            if sample.radius < ZERO_EPSILON {
                count += 1;
            }
        }
    }
    ItemResult::scalar(count as f32)
}

/// Samples per branching order, one bin per order present in the arbor.
pub fn samples_per_order_distribution(morphology: &Morphology, root: SectionId) -> Distribution {
    fold_distribution(morphology.sections_of(root).into_iter().map(|id| {
        let section = morphology.section(id);
        (section.branching_order, section.samples.len() as f32)
    }))
}
