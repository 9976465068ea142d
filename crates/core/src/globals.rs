use std::f32::consts::PI;

use arbora_skeleton::Morphology;

use crate::items::{DataFormat, Unit};
use crate::result::ItemResult;

/// Whole-cell kernel: computed once per morphology, not per arbor. Returns
/// `None` when the morphology lacks the data (for example soma metrics on a
/// somaless file).
pub type GlobalKernel = fn(&Morphology) -> Option<ItemResult>;

#[derive(Debug, Clone, Copy)]
pub struct GlobalItem {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub format: DataFormat,
    pub unit: Unit,
    pub kernel: GlobalKernel,
}

impl GlobalItem {
    pub fn evaluate(&self, morphology: &Morphology) -> Option<ItemResult> {
        (self.kernel)(morphology)
    }
}

fn soma_reported_radius(morphology: &Morphology) -> Option<ItemResult> {
    morphology
        .soma
        .as_ref()
        .map(|soma| ItemResult::scalar(soma.mean_radius))
}

/// Candidate radii for the soma extent: reported profile points and the
/// first sample of every arbor root, all measured from the centroid.
fn soma_candidate_radii(morphology: &Morphology) -> Option<Vec<f32>> {
    let soma = morphology.soma.as_ref()?;
    let mut radii: Vec<f32> = soma
        .profile_points
        .iter()
        .map(|point| point.distance(soma.centroid))
        .collect();
    for arbor in morphology.arbors() {
        let root_sample = morphology.section(arbor.root).first_sample();
        radii.push(root_sample.position.distance(soma.centroid));
    }
    if radii.is_empty() {
        radii.push(soma.mean_radius);
    }
    Some(radii)
}

fn soma_minimum_radius(morphology: &Morphology) -> Option<ItemResult> {
    let radii = soma_candidate_radii(morphology)?;
    let minimum = radii.iter().copied().fold(f32::INFINITY, f32::min);
    Some(ItemResult::scalar(minimum))
}

fn soma_maximum_radius(morphology: &Morphology) -> Option<ItemResult> {
    let radii = soma_candidate_radii(morphology)?;
    let maximum = radii.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    Some(ItemResult::scalar(maximum))
}

fn soma_surface_area(morphology: &Morphology) -> Option<ItemResult> {
    morphology.soma.as_ref().map(|soma| {
        ItemResult::scalar(4.0 * PI * soma.mean_radius * soma.mean_radius)
    })
}

fn soma_volume(morphology: &Morphology) -> Option<ItemResult> {
    morphology.soma.as_ref().map(|soma| {
        ItemResult::scalar(4.0 / 3.0 * PI * soma.mean_radius.powi(3))
    })
}

fn soma_profile_points(morphology: &Morphology) -> Option<ItemResult> {
    morphology
        .soma
        .as_ref()
        .map(|soma| ItemResult::scalar(soma.profile_points.len() as f32))
}

fn number_apical_dendrites(morphology: &Morphology) -> Option<ItemResult> {
    Some(ItemResult::scalar(
        morphology.apical_dendrite.is_some() as u32 as f32,
    ))
}

fn number_basal_dendrites(morphology: &Morphology) -> Option<ItemResult> {
    Some(ItemResult::scalar(morphology.basal_dendrites.len() as f32))
}

fn number_axons(morphology: &Morphology) -> Option<ItemResult> {
    Some(ItemResult::scalar(morphology.axon.is_some() as u32 as f32))
}

fn number_neurites(morphology: &Morphology) -> Option<ItemResult> {
    Some(ItemResult::scalar(morphology.arbor_count() as f32))
}

/// Arbors that emanate from the soma. An arbor counts as a stem when its
/// root sample lies within twice the reported soma radius of the centroid;
/// without a soma every arbor counts.
fn number_stems(morphology: &Morphology) -> Option<ItemResult> {
    let count = match &morphology.soma {
        Some(soma) => morphology
            .arbors()
            .filter(|arbor| {
                let root_sample = morphology.section(arbor.root).first_sample();
                root_sample.position.distance(soma.centroid) <= soma.mean_radius * 2.0
            })
            .count(),
        None => morphology.arbor_count(),
    };
    Some(ItemResult::scalar(count as f32))
}

pub fn global_items() -> Vec<GlobalItem> {
    vec![
        GlobalItem {
            name: "SomaReportedRadius",
            label: "Soma Reported Radius",
            description: "The radius of the soma as reported in the morphology file",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: soma_reported_radius,
        },
        GlobalItem {
            name: "SomaMinimumRadius",
            label: "Soma Min. Radius",
            description: "The minimum soma radius based on the profile points and arbor stems",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: soma_minimum_radius,
        },
        GlobalItem {
            name: "SomaMaximumRadius",
            label: "Soma Max. Radius",
            description: "The maximum soma radius based on the profile points and arbor stems",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: soma_maximum_radius,
        },
        GlobalItem {
            name: "ReportedSomaSurfaceArea",
            label: "Soma Surface Area",
            description: "The surface area of the soma sphere of reported radius",
            format: DataFormat::Float,
            unit: Unit::Area,
            kernel: soma_surface_area,
        },
        GlobalItem {
            name: "ReportedSomaVolume",
            label: "Soma Volume",
            description: "The volume of the soma sphere of reported radius",
            format: DataFormat::Float,
            unit: Unit::Volume,
            kernel: soma_volume,
        },
        GlobalItem {
            name: "NumberProfilePoints",
            label: "# Profile Points",
            description: "The number of soma profile points reported in the morphology file",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: soma_profile_points,
        },
        GlobalItem {
            name: "NumberApicalDendrites",
            label: "Apical Dendrites",
            description: "The total number of apical dendrites in the morphology",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: number_apical_dendrites,
        },
        GlobalItem {
            name: "NumberBasalDendrites",
            label: "Basal Dendrites",
            description: "The total number of basal dendrites in the morphology",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: number_basal_dendrites,
        },
        GlobalItem {
            name: "NumberAxons",
            label: "Axons",
            description: "The total number of axons in the morphology",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: number_axons,
        },
        GlobalItem {
            name: "NumberNeurites",
            label: "Total # Neurites",
            description: "The total number of arbors, connected to the soma or not",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: number_neurites,
        },
        GlobalItem {
            name: "NumberStems",
            label: "Total # Stems",
            description: "The number of arbors that emanate from the soma",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: number_stems,
        },
    ]
}

pub fn global_item_by_name(name: &str) -> Option<GlobalItem> {
    global_items().into_iter().find(|item| item.name == name)
}

#[cfg(test)]
mod tests {
    use arbora_skeleton::Soma;
    use glam::Vec3;

    use super::*;
    use crate::fixtures::two_arbor_morphology;

    #[test]
    fn soma_items_are_absent_without_a_soma() {
        let morphology = two_arbor_morphology();
        assert!(global_item_by_name("SomaReportedRadius")
            .unwrap()
            .evaluate(&morphology)
            .is_none());
    }

    #[test]
    fn census_counts_arbors() {
        let morphology = two_arbor_morphology();
        let neurites = global_item_by_name("NumberNeurites")
            .unwrap()
            .evaluate(&morphology)
            .unwrap();
        assert_eq!(neurites.value, 2.0);
        let axons = global_item_by_name("NumberAxons")
            .unwrap()
            .evaluate(&morphology)
            .unwrap();
        assert_eq!(axons.value, 1.0);
    }

    #[test]
    fn soma_radii_cover_profile_points_and_stems() {
        let mut morphology = two_arbor_morphology();
        morphology.soma = Some(Soma {
            centroid: Vec3::ZERO,
            mean_radius: 1.0,
            profile_points: vec![Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0)],
        });
        let minimum = global_item_by_name("SomaMinimumRadius")
            .unwrap()
            .evaluate(&morphology)
            .unwrap();
        let maximum = global_item_by_name("SomaMaximumRadius")
            .unwrap()
            .evaluate(&morphology)
            .unwrap();
        assert!(minimum.value <= maximum.value);
        assert!((maximum.value - 3.0).abs() < 1e-5);
    }
}
