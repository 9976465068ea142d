use std::f32::consts::PI;

use super::*;
use crate::aggregate::Aggregation;
use crate::dispatch::invoke_kernel;
use crate::fixtures::{
    branched_arbor_morphology, sample, three_arbor_morphology, two_section_arbor_morphology,
};
use arbora_skeleton::Morphology;

fn single_section_morphology() -> Morphology {
    let mut morphology = Morphology::new("single");
    let root = morphology
        .add_section(
            vec![sample(0.0, 0.0, 0.0, 1.0, 0), sample(0.0, 0.0, 2.0, 1.0, 1)],
            None,
        )
        .unwrap();
    morphology.set_axon(root).unwrap();
    morphology
}

#[test]
fn two_section_arbor_scenario() {
    let morphology = two_section_arbor_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    assert!((total_length(&morphology, root).value - 5.0).abs() < 1e-5);
    assert_eq!(maximum_branching_order(&morphology, root).value, 2.0);
    assert_eq!(total_terminal_tips(&morphology, root).value, 1.0);
    // Two segments on the root, one on the leaf, plus the root sample.
    assert_eq!(total_samples(&morphology, root).value, 4.0);
    assert_eq!(minimum_samples_per_section(&morphology, root).value, 2.0);
    assert_eq!(maximum_samples_per_section(&morphology, root).value, 3.0);
    assert_eq!(average_samples_per_section(&morphology, root).value, 2.0);
}

#[test]
fn single_section_arbor_boundary_values() {
    let morphology = single_section_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    assert_eq!(total_bifurcations(&morphology, root).value, 0.0);
    assert_eq!(total_trifurcations(&morphology, root).value, 0.0);
    assert_eq!(total_terminal_tips(&morphology, root).value, 1.0);
    assert_eq!(maximum_branching_order(&morphology, root).value, 1.0);
    assert_eq!(total_sections(&morphology, root).value, 1.0);
}

#[test]
fn branched_arbor_counts_nodes() {
    let morphology = branched_arbor_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    assert_eq!(total_sections(&morphology, root).value, 3.0);
    assert_eq!(total_bifurcations(&morphology, root).value, 1.0);
    assert_eq!(total_trifurcations(&morphology, root).value, 0.0);
    assert_eq!(total_terminal_tips(&morphology, root).value, 2.0);
}

#[test]
fn total_length_matches_per_section_sum() {
    let morphology = branched_arbor_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    let direct: f32 = morphology
        .sections_of(root)
        .iter()
        .map(|id| section_length(morphology.section(*id)))
        .sum();
    assert!((total_length(&morphology, root).value - direct).abs() < 1e-5);
}

#[test]
fn maximum_path_distance_matches_leaf_walk() {
    let morphology = branched_arbor_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    // Walk each leaf's ancestry by hand.
    let mut best = 0.0f32;
    for leaf in morphology.leaves_of(root) {
        let mut path = 0.0;
        let mut current = Some(leaf);
        while let Some(id) = current {
            path += section_length(morphology.section(id));
            current = morphology.section(id).parent;
        }
        best = best.max(path);
    }
    assert!((maximum_path_distance(&morphology, root).value - best).abs() < 1e-5);
}

#[test]
fn segment_extrema_and_zero_lengths() {
    let mut morphology = Morphology::new("degenerate");
    let root = morphology
        .add_section(
            vec![
                sample(0.0, 0.0, 0.0, 1.0, 0),
                sample(0.0, 0.0, 1.0, 1.0, 1),
                sample(0.0, 0.0, 1.0, 1.0, 2),
                sample(0.0, 0.0, 4.0, 1.0, 3),
            ],
            None,
        )
        .unwrap();
    morphology.set_axon(root).unwrap();

    assert_eq!(zero_length_segments(&morphology, root).value, 1.0);
    assert_eq!(minimum_segment_length(&morphology, root).value, 0.0);
    assert_eq!(maximum_segment_length(&morphology, root).value, 3.0);
    let average = average_segment_length(&morphology, root).value;
    assert!((average - 4.0 / 3.0).abs() < 1e-5);
}

#[test]
fn frustum_area_and_volume_of_a_cylinder() {
    let a = sample(0.0, 0.0, 0.0, 1.0, 0);
    let b = sample(0.0, 0.0, 2.0, 1.0, 1);
    assert!((segment_surface_area(&a, &b) - 4.0 * PI).abs() < 1e-4);
    assert!((segment_volume(&a, &b) - 2.0 * PI).abs() < 1e-4);
}

#[test]
fn arbor_surface_area_and_volume_sum_sections() {
    let morphology = two_section_arbor_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    // Unit radius throughout: lateral area 2*pi*length, volume pi*length.
    assert!((total_surface_area(&morphology, root).value - 2.0 * PI * 5.0).abs() < 1e-3);
    assert!((total_volume(&morphology, root).value - PI * 5.0).abs() < 1e-3);
    assert!(
        (minimum_section_surface_area(&morphology, root).value - 2.0 * PI * 2.0).abs() < 1e-3
    );
    assert!(
        (maximum_section_surface_area(&morphology, root).value - 2.0 * PI * 3.0).abs() < 1e-3
    );
    assert!(
        (average_section_volume(&morphology, root).value - PI * 2.5).abs() < 1e-3
    );
}

#[test]
fn radius_kernels_track_the_winning_sample() {
    let morphology = branched_arbor_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    let minimum = minimum_sample_radius(&morphology, root);
    assert_eq!(minimum.value, 0.5);
    assert_eq!(minimum.branching_order, Some(2));
    assert!(minimum.radial_distance.is_some());

    let maximum = maximum_sample_radius(&morphology, root);
    assert_eq!(maximum.value, 1.0);
    assert_eq!(maximum.branching_order, Some(1));

    let average = average_sample_radius(&morphology, root).value;
    // Section means: 1.0, 0.75, 0.75.
    assert!((average - (1.0 + 0.75 + 0.75) / 3.0).abs() < 1e-5);
}

#[test]
fn zero_radius_samples_are_counted() {
    let mut morphology = Morphology::new("zero-radius");
    let root = morphology
        .add_section(
            vec![sample(0.0, 0.0, 0.0, 0.0, 0), sample(0.0, 0.0, 1.0, 1.0, 1)],
            None,
        )
        .unwrap();
    morphology.set_axon(root).unwrap();
    assert_eq!(zero_radius_samples(&morphology, root).value, 1.0);
}

#[test]
fn short_sections_compare_length_to_terminal_radii() {
    let mut morphology = Morphology::new("short");
    // Length 1 but terminal radii sum to 2.4.
    let root = morphology
        .add_section(
            vec![sample(0.0, 0.0, 0.0, 1.2, 0), sample(0.0, 0.0, 1.0, 1.2, 1)],
            None,
        )
        .unwrap();
    morphology.set_axon(root).unwrap();
    assert_eq!(short_sections(&morphology, root).value, 1.0);
}

#[test]
fn bifurcation_angles_measure_child_directions() {
    let morphology = branched_arbor_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    // Child directions (1,0,2) and (-1,0,3) make a 45 degree angle, and with
    // two-sample children the local and global variants coincide.
    let local = average_local_bifurcation_angle(&morphology, root).value;
    let global = average_global_bifurcation_angle(&morphology, root).value;
    assert!((local - 45.0).abs() < 1e-3);
    assert!((global - 45.0).abs() < 1e-3);

    let minimum = minimum_local_bifurcation_angle(&morphology, root);
    let maximum = maximum_local_bifurcation_angle(&morphology, root);
    assert_eq!(minimum.value, maximum.value);
    assert_eq!(minimum.branching_order, Some(1));
}

#[test]
fn local_and_global_angles_diverge_on_bent_branches() {
    let mut morphology = Morphology::new("bent");
    let root = morphology
        .add_section(
            vec![sample(0.0, 0.0, 0.0, 1.0, 0), sample(0.0, 0.0, 2.0, 1.0, 1)],
            None,
        )
        .unwrap();
    morphology
        .add_section(
            vec![
                sample(0.0, 0.0, 2.0, 1.0, 1),
                sample(1.0, 0.0, 4.0, 1.0, 2),
                sample(5.0, 0.0, 4.0, 1.0, 3),
            ],
            Some(root),
        )
        .unwrap();
    morphology
        .add_section(
            vec![sample(0.0, 0.0, 2.0, 1.0, 1), sample(-1.0, 0.0, 3.0, 1.0, 4)],
            Some(root),
        )
        .unwrap();
    morphology.set_axon(root).unwrap();

    // Local: (1,0,2) vs (-1,0,1); global: (5,0,2) vs (-1,0,1).
    let local = average_local_bifurcation_angle(&morphology, root).value;
    let global = average_global_bifurcation_angle(&morphology, root).value;
    assert!((local - 71.565).abs() < 1e-2);
    assert!((global - 113.199).abs() < 1e-2);
}

#[test]
fn angle_kernels_on_an_unbranched_arbor_yield_zero() {
    let morphology = single_section_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    assert_eq!(minimum_local_bifurcation_angle(&morphology, root).value, 0.0);
    assert_eq!(maximum_global_bifurcation_angle(&morphology, root).value, 0.0);
    assert_eq!(average_local_bifurcation_angle(&morphology, root).value, 0.0);
}

#[test]
fn distributions_bin_by_branching_order() {
    let morphology = branched_arbor_morphology();
    let root = morphology.axon.as_ref().unwrap().root;

    assert_eq!(
        sections_per_order_distribution(&morphology, root),
        vec![(1, 1.0), (2, 2.0)]
    );
    assert_eq!(
        tips_per_order_distribution(&morphology, root),
        vec![(2, 2.0)]
    );
    assert_eq!(
        samples_per_order_distribution(&morphology, root),
        vec![(1, 2.0), (2, 4.0)]
    );
}

#[test]
fn distribution_total_round_trips_against_scalar_total() {
    let morphology = three_arbor_morphology();
    let distributions =
        crate::dispatch::analysis_distributions(&morphology, sections_per_order_distribution);
    let histogram_sum: f32 = distributions
        .morphology
        .unwrap()
        .iter()
        .map(|(_, value)| value)
        .sum();
    let scalar = invoke_kernel(&morphology, total_sections, Aggregation::Total);
    assert_eq!(histogram_sum, scalar.morphology.unwrap().value);
}
