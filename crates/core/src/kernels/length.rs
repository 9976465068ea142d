use arbora_skeleton::{Morphology, Section, SectionId};

use super::{segments, ZERO_EPSILON};
use crate::result::ItemResult;

/// Sum of Euclidean distances between consecutive samples.
pub fn section_length(section: &Section) -> f32 {
    segments(section)
        .map(|(a, b)| a.position.distance(b.position))
        .sum()
}

pub fn total_length(morphology: &Morphology, root: SectionId) -> ItemResult {
    let total: f32 = morphology
        .sections_of(root)
        .iter()
        .map(|id| section_length(morphology.section(*id)))
        .sum();
    ItemResult::scalar(total)
}

pub fn minimum_section_length(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut minimum = ItemResult::scalar(f32::INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let length = section_length(section);
        if length < minimum.value {
            minimum = ItemResult::at_order(length, section.branching_order);
        }
    }
    minimum
}

pub fn maximum_section_length(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut maximum = ItemResult::scalar(f32::NEG_INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let length = section_length(section);
        if length > maximum.value {
            maximum = ItemResult::at_order(length, section.branching_order);
        }
    }
    maximum
}

pub fn average_section_length(morphology: &Morphology, root: SectionId) -> ItemResult {
    let sections = morphology.sections_of(root);
    let total: f32 = sections
        .iter()
        .map(|id| section_length(morphology.section(*id)))
        .sum();
    ItemResult::scalar(total / sections.len() as f32)
}

pub fn minimum_segment_length(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut minimum = ItemResult::scalar(f32::INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        for (a, b) in segments(section) {
            let length = a.position.distance(b.position);
            if length < minimum.value {
                minimum = ItemResult::at_order(length, section.branching_order);
            }
        }
    }
    minimum
}

pub fn maximum_segment_length(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut maximum = ItemResult::scalar(f32::NEG_INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        for (a, b) in segments(section) {
            let length = a.position.distance(b.position);
            if length > maximum.value {
                maximum = ItemResult::at_order(length, section.branching_order);
            }
        }
    }
    maximum
}

/// Flat mean over every segment of the arbor.
pub fn average_segment_length(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut total = 0.0;
    let mut count = 0usize;
    for id in morphology.sections_of(root) {
        for (a, b) in segments(morphology.section(id)) {
            total += a.position.distance(b.position);
            count += 1;
        }
    }
    ItemResult::scalar(total / count as f32)
}

/// Duplicate-sample artifacts: segments whose endpoints coincide.
pub fn zero_length_segments(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut count = 0usize;
    for id in morphology.sections_of(root) {
        for (a, b) in segments(morphology.section(id)) {
            if a.position.distance(b.position) < ZERO_EPSILON {
                count += 1;
            }
        }
    }
    ItemResult::scalar(count as f32)
}

/// Sections shorter than the sum of the radii of their terminal samples.
pub fn short_sections(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut count = 0usize;
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let terminal_radii = section.first_sample().radius + section.last_sample().radius;
        if section_length(section) < terminal_radii {
            count += 1;
        }
    }
    ItemResult::scalar(count as f32)
}

/// Maximum cumulative length from the arbor root to any leaf. Iterative with
/// an explicit stack that carries the path length accumulated above each
/// section.
pub fn maximum_path_distance(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut maximum = ItemResult::scalar(f32::NEG_INFINITY);
    let mut stack = vec![(root, 0.0f32)];
    while let Some((id, upstream)) = stack.pop() {
        let section = morphology.section(id);
        let path = upstream + section_length(section);
        if section.is_leaf() {
            if path > maximum.value {
                maximum = ItemResult::at_order(path, section.branching_order);
            }
        } else {
            for child in &section.children {
                stack.push((*child, path));
            }
        }
    }
    maximum
}
