use std::collections::BTreeMap;

use arbora_skeleton::{Sample, Section};

use crate::result::Distribution;

mod angles;
mod frustum;
mod length;
mod samples;
mod structure;
#[cfg(test)]
mod tests;

pub use angles::{
    average_global_bifurcation_angle, average_local_bifurcation_angle,
    maximum_global_bifurcation_angle, maximum_local_bifurcation_angle,
    minimum_global_bifurcation_angle, minimum_local_bifurcation_angle,
};
pub use frustum::{
    average_section_surface_area, average_section_volume, maximum_section_surface_area,
    maximum_section_volume, minimum_section_surface_area, minimum_section_volume,
    section_surface_area, section_volume, segment_surface_area, segment_volume,
    total_surface_area, total_volume,
};
pub use length::{
    average_section_length, average_segment_length, maximum_path_distance,
    maximum_section_length, maximum_segment_length, minimum_section_length,
    minimum_segment_length, section_length, short_sections, total_length, zero_length_segments,
};
pub use samples::{
    average_sample_radius, average_samples_per_section, maximum_sample_radius,
    maximum_samples_per_section, minimum_sample_radius, minimum_samples_per_section,
    samples_per_order_distribution, total_samples, zero_radius_samples,
};
pub use structure::{
    maximum_branching_order, sections_per_order_distribution, tips_per_order_distribution,
    total_bifurcations, total_sections, total_terminal_tips, total_trifurcations,
};

/// Degenerate-tracing threshold: radii and segment lengths below this are
/// treated as exact zeros.
pub const ZERO_EPSILON: f32 = 1e-6;

/// Consecutive sample pairs of a section.
pub(crate) fn segments(section: &Section) -> impl Iterator<Item = (&Sample, &Sample)> {
    section.samples.windows(2).map(|pair| (&pair[0], &pair[1]))
}

pub(crate) fn fold_distribution(entries: impl Iterator<Item = (u32, f32)>) -> Distribution {
    let mut bins: BTreeMap<u32, f32> = BTreeMap::new();
    for (order, value) in entries {
        *bins.entry(order).or_insert(0.0) += value;
    }
    bins.into_iter().collect()
}
