use arbora_skeleton::{Morphology, SectionId};

use super::fold_distribution;
use crate::result::{Distribution, ItemResult};

pub fn total_sections(morphology: &Morphology, root: SectionId) -> ItemResult {
    ItemResult::scalar(morphology.sections_of(root).len() as f32)
}

/// Sections with exactly two children.
pub fn total_bifurcations(morphology: &Morphology, root: SectionId) -> ItemResult {
    let count = morphology
        .sections_of(root)
        .iter()
        .filter(|id| morphology.section(**id).children.len() == 2)
        .count();
    ItemResult::scalar(count as f32)
}

/// Sections with exactly three children.
pub fn total_trifurcations(morphology: &Morphology, root: SectionId) -> ItemResult {
    let count = morphology
        .sections_of(root)
        .iter()
        .filter(|id| morphology.section(**id).children.len() == 3)
        .count();
    ItemResult::scalar(count as f32)
}

pub fn total_terminal_tips(morphology: &Morphology, root: SectionId) -> ItemResult {
    ItemResult::scalar(morphology.leaves_of(root).len() as f32)
}

/// Deepest branching order reached by the arbor. Only leaves need to be
/// inspected; a single-section arbor yields 1.
pub fn maximum_branching_order(morphology: &Morphology, root: SectionId) -> ItemResult {
    let order = morphology
        .leaves_of(root)
        .iter()
        .map(|id| morphology.section(*id).branching_order)
        .max()
        .unwrap_or(1);
    ItemResult::at_order(order as f32, order)
}

/// Section count per branching order.
pub fn sections_per_order_distribution(morphology: &Morphology, root: SectionId) -> Distribution {
    fold_distribution(
        morphology
            .sections_of(root)
            .into_iter()
            .map(|id| (morphology.section(id).branching_order, 1.0)),
    )
}

/// Terminal tip count per branching order.
pub fn tips_per_order_distribution(morphology: &Morphology, root: SectionId) -> Distribution {
    fold_distribution(
        morphology
            .leaves_of(root)
            .into_iter()
            .map(|id| (morphology.section(id).branching_order, 1.0)),
    )
}
