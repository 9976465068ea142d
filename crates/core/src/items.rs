use arbora_skeleton::Morphology;
use serde::Serialize;

use crate::aggregate::Aggregation;
use crate::dispatch::{analysis_distributions, invoke_kernel, ArborKernel};
use crate::kernels;
use crate::result::{Distribution, ItemResult, MorphologyAnalysisResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataFormat {
    Int,
    Float,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Unit {
    None,
    Length,
    Area,
    Volume,
    Rotation,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::None => "",
            Unit::Length => " um",
            Unit::Area => " um2",
            Unit::Volume => " um3",
            Unit::Rotation => " deg",
        }
    }
}

/// Declarative binding of a named metric to its per-arbor kernel, display
/// metadata and the aggregation policy that folds the per-arbor results into
/// the whole-cell value. Defined once, looked up by name.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisItem {
    pub name: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub format: DataFormat,
    pub unit: Unit,
    pub kernel: ArborKernel<ItemResult>,
    pub aggregation: Aggregation,
}

impl AnalysisItem {
    pub fn evaluate(&self, morphology: &Morphology) -> MorphologyAnalysisResult {
        invoke_kernel(morphology, self.kernel, self.aggregation)
    }
}

/// A named distribution metric: per-arbor histograms over branching order.
#[derive(Debug, Clone, Copy)]
pub struct DistributionItem {
    pub name: &'static str,
    pub label: &'static str,
    pub kernel: ArborKernel<Distribution>,
}

impl DistributionItem {
    pub fn evaluate(&self, morphology: &Morphology) -> MorphologyAnalysisResult<Distribution> {
        analysis_distributions(morphology, self.kernel)
    }
}

pub fn per_arbor_items() -> Vec<AnalysisItem> {
    vec![
        AnalysisItem {
            name: "NumberTips",
            label: "Total # Tips",
            description: "The total number of terminal tips",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::total_terminal_tips,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "TotalNumberSamples",
            label: "Total # Samples",
            description: "The total number of samples (or digitized points)",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::total_samples,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "MinNumberSamplePerSection",
            label: "Min. # Samples / Section",
            description: "The lowest number of samples a section has",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::minimum_samples_per_section,
            aggregation: Aggregation::Minimum,
        },
        AnalysisItem {
            name: "MaxNumberSamplePerSection",
            label: "Max. # Samples / Section",
            description: "The largest number of samples a section has",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::maximum_samples_per_section,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "AvgNumberSamplePerSection",
            label: "Avg. # Samples / Section",
            description: "The average number of samples per section",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::average_samples_per_section,
            aggregation: Aggregation::Average,
        },
        AnalysisItem {
            name: "MinSampleRadius",
            label: "Min. Sample Radius",
            description: "The radius of the smallest sample",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::minimum_sample_radius,
            aggregation: Aggregation::Minimum,
        },
        AnalysisItem {
            name: "MaxSampleRadius",
            label: "Max. Sample Radius",
            description: "The radius of the largest sample",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::maximum_sample_radius,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "AvgSampleRadius",
            label: "Avg. Sample Radius",
            description: "The average sample radius",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::average_sample_radius,
            aggregation: Aggregation::Average,
        },
        AnalysisItem {
            name: "ZeroRadiiSamples",
            label: "Zero-radius Samples",
            description: "The total number of zero-radius samples",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::zero_radius_samples,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "MinimumLocalBifurcationAngle",
            label: "Min. Local Bifurcation Angle",
            description: "The minimum local bifurcation angle (computed from the first two samples along the section)",
            format: DataFormat::Float,
            unit: Unit::Rotation,
            kernel: kernels::minimum_local_bifurcation_angle,
            aggregation: Aggregation::Minimum,
        },
        AnalysisItem {
            name: "MaximumLocalBifurcationAngle",
            label: "Max. Local Bifurcation Angle",
            description: "The maximum local bifurcation angle (computed from the first two samples along the section)",
            format: DataFormat::Float,
            unit: Unit::Rotation,
            kernel: kernels::maximum_local_bifurcation_angle,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "AverageLocalBifurcationAngle",
            label: "Avg. Local Bifurcation Angle",
            description: "The average local bifurcation angle (computed from the first two samples along the section)",
            format: DataFormat::Float,
            unit: Unit::Rotation,
            kernel: kernels::average_local_bifurcation_angle,
            aggregation: Aggregation::Average,
        },
        AnalysisItem {
            name: "MinimumGlobalBifurcationAngle",
            label: "Min. Global Bifurcation Angle",
            description: "The minimum global bifurcation angle (computed from the first and last samples of the section)",
            format: DataFormat::Float,
            unit: Unit::Rotation,
            kernel: kernels::minimum_global_bifurcation_angle,
            aggregation: Aggregation::Minimum,
        },
        AnalysisItem {
            name: "MaximumGlobalBifurcationAngle",
            label: "Max. Global Bifurcation Angle",
            description: "The maximum global bifurcation angle (computed from the first and last samples of the section)",
            format: DataFormat::Float,
            unit: Unit::Rotation,
            kernel: kernels::maximum_global_bifurcation_angle,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "AverageGlobalBifurcationAngle",
            label: "Avg. Global Bifurcation Angle",
            description: "The average global bifurcation angle (computed from the first and last samples of the section)",
            format: DataFormat::Float,
            unit: Unit::Rotation,
            kernel: kernels::average_global_bifurcation_angle,
            aggregation: Aggregation::Average,
        },
        AnalysisItem {
            name: "TotalNumberSections",
            label: "Total # Sections",
            description: "The total number of sections (or branches)",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::total_sections,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "TotalNumberBifurcations",
            label: "Total # Bifurcations",
            description: "The total number of bifurcations",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::total_bifurcations,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "TotalNumberTrifurcations",
            label: "Total # Trifurcations",
            description: "The total number of trifurcations (sections with three children)",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::total_trifurcations,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "MaximumBranchingOrder",
            label: "Max. Branching Order",
            description: "The maximum branching order",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::maximum_branching_order,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "MaximumPathDistance",
            label: "Max. Path Distance",
            description: "The maximum distance along an arbor from its root to its most far leaf",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::maximum_path_distance,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "TotalLength",
            label: "Total Length",
            description: "The total length",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::total_length,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "MinSectionLength",
            label: "Min. Section Length",
            description: "The minimum section length",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::minimum_section_length,
            aggregation: Aggregation::Minimum,
        },
        AnalysisItem {
            name: "MaxSectionLength",
            label: "Max. Section Length",
            description: "The maximum section length",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::maximum_section_length,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "AvgSectionLength",
            label: "Avg. Section Length",
            description: "The average section length",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::average_section_length,
            aggregation: Aggregation::Average,
        },
        AnalysisItem {
            name: "MinSegmentLength",
            label: "Min. Segment Length",
            description: "The minimum segment length",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::minimum_segment_length,
            aggregation: Aggregation::Minimum,
        },
        AnalysisItem {
            name: "MaxSegmentLength",
            label: "Max. Segment Length",
            description: "The maximum segment length",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::maximum_segment_length,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "AvgSegmentLength",
            label: "Avg. Segment Length",
            description: "The average segment length",
            format: DataFormat::Float,
            unit: Unit::Length,
            kernel: kernels::average_segment_length,
            aggregation: Aggregation::Average,
        },
        AnalysisItem {
            name: "ZeroLengthSegments",
            label: "Zero-length Segments",
            description: "The total number of zero-length segments (or duplicate samples)",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::zero_length_segments,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "ShortSections",
            label: "Short Sections",
            description: "Sections shorter than the sum of their terminal sample radii",
            format: DataFormat::Int,
            unit: Unit::None,
            kernel: kernels::short_sections,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "TotalSurfaceArea",
            label: "Total Surface Area",
            description: "The total surface area",
            format: DataFormat::Float,
            unit: Unit::Area,
            kernel: kernels::total_surface_area,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "MinSectionSurfaceArea",
            label: "Min. Section Surface Area",
            description: "The minimum section surface area",
            format: DataFormat::Float,
            unit: Unit::Area,
            kernel: kernels::minimum_section_surface_area,
            aggregation: Aggregation::Minimum,
        },
        AnalysisItem {
            name: "MaxSectionSurfaceArea",
            label: "Max. Section Surface Area",
            description: "The maximum section surface area",
            format: DataFormat::Float,
            unit: Unit::Area,
            kernel: kernels::maximum_section_surface_area,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "AvgSectionSurfaceArea",
            label: "Avg. Section Surface Area",
            description: "The average section surface area",
            format: DataFormat::Float,
            unit: Unit::Area,
            kernel: kernels::average_section_surface_area,
            aggregation: Aggregation::Average,
        },
        AnalysisItem {
            name: "TotalVolume",
            label: "Total Volume",
            description: "The total volume",
            format: DataFormat::Float,
            unit: Unit::Volume,
            kernel: kernels::total_volume,
            aggregation: Aggregation::Total,
        },
        AnalysisItem {
            name: "MinSectionVolume",
            label: "Min. Section Volume",
            description: "The minimum section volume",
            format: DataFormat::Float,
            unit: Unit::Volume,
            kernel: kernels::minimum_section_volume,
            aggregation: Aggregation::Minimum,
        },
        AnalysisItem {
            name: "MaxSectionVolume",
            label: "Max. Section Volume",
            description: "The maximum section volume",
            format: DataFormat::Float,
            unit: Unit::Volume,
            kernel: kernels::maximum_section_volume,
            aggregation: Aggregation::Maximum,
        },
        AnalysisItem {
            name: "AvgSectionVolume",
            label: "Avg. Section Volume",
            description: "The average section volume",
            format: DataFormat::Float,
            unit: Unit::Volume,
            kernel: kernels::average_section_volume,
            aggregation: Aggregation::Average,
        },
    ]
}

pub fn distribution_items() -> Vec<DistributionItem> {
    vec![
        DistributionItem {
            name: "SamplesPerOrder",
            label: "Samples / Branching Order",
            kernel: kernels::samples_per_order_distribution,
        },
        DistributionItem {
            name: "SectionsPerOrder",
            label: "Sections / Branching Order",
            kernel: kernels::sections_per_order_distribution,
        },
        DistributionItem {
            name: "TipsPerOrder",
            label: "Terminal Tips / Branching Order",
            kernel: kernels::tips_per_order_distribution,
        },
    ]
}

pub fn item_by_name(name: &str) -> Option<AnalysisItem> {
    per_arbor_items().into_iter().find(|item| item.name == name)
}

pub fn distribution_item_by_name(name: &str) -> Option<DistributionItem> {
    distribution_items()
        .into_iter()
        .find(|item| item.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::two_section_arbor_morphology;

    #[test]
    fn items_are_found_by_name() {
        let item = item_by_name("TotalLength").unwrap();
        assert_eq!(item.label, "Total Length");
        assert_eq!(item.unit, Unit::Length);
        assert!(item_by_name("NoSuchItem").is_none());
        assert!(distribution_item_by_name("SectionsPerOrder").is_some());
    }

    #[test]
    fn item_names_are_unique() {
        let items = per_arbor_items();
        for (i, a) in items.iter().enumerate() {
            for b in &items[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn evaluate_runs_kernel_and_aggregation() {
        let morphology = two_section_arbor_morphology();
        let item = item_by_name("TotalLength").unwrap();
        let result = item.evaluate(&morphology);
        assert!((result.morphology.unwrap().value - 5.0).abs() < 1e-5);
    }
}
