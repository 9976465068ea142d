use arbora_skeleton::{Morphology, SectionId};
use glam::Vec3;

use crate::result::ItemResult;

/// Direction of a child branch for the local angle: from its first sample
/// toward its second.
fn local_direction(morphology: &Morphology, id: SectionId) -> Vec3 {
    let section = morphology.section(id);
    section.samples[1].position - section.samples[0].position
}

/// Direction for the global angle: from the child's first sample toward its
/// last.
fn global_direction(morphology: &Morphology, id: SectionId) -> Vec3 {
    let section = morphology.section(id);
    section.last_sample().position - section.first_sample().position
}

/// Angle in degrees between the first two child branches of every
/// bifurcation, paired with the bifurcation's branching order. Sections
/// with fewer than two children contribute nothing.
fn bifurcation_angles(
    morphology: &Morphology,
    root: SectionId,
    direction: fn(&Morphology, SectionId) -> Vec3,
) -> Vec<(f32, u32)> {
    let mut angles = Vec::new();
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        if section.children.len() < 2 {
            continue;
        }
        let a = direction(morphology, section.children[0]);
        let b = direction(morphology, section.children[1]);
        angles.push((a.angle_between(b).to_degrees(), section.branching_order));
    }
    angles
}

fn minimum_angle(angles: Vec<(f32, u32)>) -> ItemResult {
    let mut minimum = ItemResult::scalar(f32::INFINITY);
    for (angle, order) in angles {
        if angle < minimum.value {
            minimum = ItemResult::at_order(angle, order);
        }
    }
    if minimum.value.is_infinite() {
        return ItemResult::scalar(0.0);
    }
    minimum
}

fn maximum_angle(angles: Vec<(f32, u32)>) -> ItemResult {
    let mut maximum = ItemResult::scalar(f32::NEG_INFINITY);
    for (angle, order) in angles {
        if angle > maximum.value {
            maximum = ItemResult::at_order(angle, order);
        }
    }
    if maximum.value.is_infinite() {
        return ItemResult::scalar(0.0);
    }
    maximum
}

fn average_angle(angles: Vec<(f32, u32)>) -> ItemResult {
    if angles.is_empty() {
        return ItemResult::scalar(0.0);
    }
    let total: f32 = angles.iter().map(|(angle, _)| angle).sum();
    ItemResult::scalar(total / angles.len() as f32)
}

pub fn minimum_local_bifurcation_angle(morphology: &Morphology, root: SectionId) -> ItemResult {
    minimum_angle(bifurcation_angles(morphology, root, local_direction))
}

pub fn maximum_local_bifurcation_angle(morphology: &Morphology, root: SectionId) -> ItemResult {
    maximum_angle(bifurcation_angles(morphology, root, local_direction))
}

pub fn average_local_bifurcation_angle(morphology: &Morphology, root: SectionId) -> ItemResult {
    average_angle(bifurcation_angles(morphology, root, local_direction))
}

pub fn minimum_global_bifurcation_angle(morphology: &Morphology, root: SectionId) -> ItemResult {
    minimum_angle(bifurcation_angles(morphology, root, global_direction))
}

pub fn maximum_global_bifurcation_angle(morphology: &Morphology, root: SectionId) -> ItemResult {
    maximum_angle(bifurcation_angles(morphology, root, global_direction))
}

pub fn average_global_bifurcation_angle(morphology: &Morphology, root: SectionId) -> ItemResult {
    average_angle(bifurcation_angles(morphology, root, global_direction))
}
