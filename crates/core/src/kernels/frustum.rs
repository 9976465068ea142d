use std::f32::consts::PI;

use arbora_skeleton::{Morphology, Sample, Section, SectionId};

use super::segments;
use crate::result::ItemResult;

/// Lateral surface area of the truncated cone spanned by one segment:
/// pi * (r1 + r2) * slant, with the slant length measured along the cone
/// wall.
pub fn segment_surface_area(a: &Sample, b: &Sample) -> f32 {
    let height = a.position.distance(b.position);
    let slant = (height * height + (a.radius - b.radius) * (a.radius - b.radius)).sqrt();
    PI * (a.radius + b.radius) * slant
}

/// Frustum volume of one segment: (pi * h / 3) * (r1^2 + r1 r2 + r2^2).
pub fn segment_volume(a: &Sample, b: &Sample) -> f32 {
    let height = a.position.distance(b.position);
    PI * height / 3.0 * (a.radius * a.radius + a.radius * b.radius + b.radius * b.radius)
}

pub fn section_surface_area(section: &Section) -> f32 {
    segments(section)
        .map(|(a, b)| segment_surface_area(a, b))
        .sum()
}

pub fn section_volume(section: &Section) -> f32 {
    segments(section).map(|(a, b)| segment_volume(a, b)).sum()
}

pub fn total_surface_area(morphology: &Morphology, root: SectionId) -> ItemResult {
    let total: f32 = morphology
        .sections_of(root)
        .iter()
        .map(|id| section_surface_area(morphology.section(*id)))
        .sum();
    ItemResult::scalar(total)
}

pub fn minimum_section_surface_area(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut minimum = ItemResult::scalar(f32::INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let area = section_surface_area(section);
        if area < minimum.value {
            minimum = ItemResult::at_order(area, section.branching_order);
        }
    }
    minimum
}

pub fn maximum_section_surface_area(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut maximum = ItemResult::scalar(f32::NEG_INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let area = section_surface_area(section);
        if area > maximum.value {
            maximum = ItemResult::at_order(area, section.branching_order);
        }
    }
    maximum
}

pub fn average_section_surface_area(morphology: &Morphology, root: SectionId) -> ItemResult {
    let sections = morphology.sections_of(root);
    let total: f32 = sections
        .iter()
        .map(|id| section_surface_area(morphology.section(*id)))
        .sum();
    ItemResult::scalar(total / sections.len() as f32)
}

pub fn total_volume(morphology: &Morphology, root: SectionId) -> ItemResult {
    let total: f32 = morphology
        .sections_of(root)
        .iter()
        .map(|id| section_volume(morphology.section(*id)))
        .sum();
    ItemResult::scalar(total)
}

pub fn minimum_section_volume(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut minimum = ItemResult::scalar(f32::INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let volume = section_volume(section);
        if volume < minimum.value {
            minimum = ItemResult::at_order(volume, section.branching_order);
        }
    }
    minimum
}

pub fn maximum_section_volume(morphology: &Morphology, root: SectionId) -> ItemResult {
    let mut maximum = ItemResult::scalar(f32::NEG_INFINITY);
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let volume = section_volume(section);
        if volume > maximum.value {
            maximum = ItemResult::at_order(volume, section.branching_order);
        }
    }
    maximum
}

pub fn average_section_volume(morphology: &Morphology, root: SectionId) -> ItemResult {
    let sections = morphology.sections_of(root);
    let total: f32 = sections
        .iter()
        .map(|id| section_volume(morphology.section(*id)))
        .sum();
    ItemResult::scalar(total / sections.len() as f32)
}
