mod aggregate;
mod dendrogram;
mod dispatch;
mod globals;
mod items;
mod kernels;
mod report;
mod result;
mod swc;

#[cfg(test)]
pub(crate) mod fixtures;

pub use aggregate::{aggregate, aggregate_distribution_total, Aggregation};
pub use dendrogram::{
    layout_arbor, DendrogramConnector, DendrogramLayout, DendrogramSegment, DENDROGRAM_DELTA,
};
pub use dispatch::{
    analysis_distributions, apply_branching_order_cache, apply_to_arbors, invoke_kernel,
    ArborKernel,
};
pub use globals::{global_item_by_name, global_items, GlobalItem, GlobalKernel};
pub use items::{
    distribution_item_by_name, distribution_items, item_by_name, per_arbor_items, AnalysisItem,
    DataFormat, DistributionItem, Unit,
};
pub use kernels::{
    average_global_bifurcation_angle, average_local_bifurcation_angle, average_sample_radius,
    average_samples_per_section, average_section_length,
    average_section_surface_area, average_section_volume, average_segment_length,
    maximum_branching_order, maximum_global_bifurcation_angle, maximum_local_bifurcation_angle,
    maximum_path_distance, maximum_sample_radius, maximum_samples_per_section,
    maximum_section_length, maximum_section_surface_area, maximum_section_volume,
    maximum_segment_length, minimum_global_bifurcation_angle, minimum_local_bifurcation_angle,
    minimum_sample_radius, minimum_samples_per_section, minimum_section_length,
    minimum_section_surface_area, minimum_section_volume, minimum_segment_length,
    samples_per_order_distribution,
    section_length, section_surface_area, section_volume, sections_per_order_distribution,
    segment_surface_area, segment_volume, short_sections, tips_per_order_distribution,
    total_bifurcations, total_length, total_samples, total_sections, total_surface_area,
    total_terminal_tips, total_trifurcations, total_volume, zero_length_segments,
    zero_radius_samples, ZERO_EPSILON,
};
pub use report::{
    build_report, render_text, report_to_json, GlobalReport, ItemReport, MorphologyReport,
};
pub use result::{Distribution, ItemResult, MorphologyAnalysisResult};
pub use swc::{parse_swc, SwcError};
