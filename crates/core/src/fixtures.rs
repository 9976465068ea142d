use arbora_skeleton::{Morphology, Sample};
use glam::Vec3;

pub(crate) fn sample(x: f32, y: f32, z: f32, radius: f32, index: u64) -> Sample {
    Sample::new(Vec3::new(x, y, z), radius, index)
}

/// Two-section arbor: root of three unit-radius samples along z spanning
/// length 2, one leaf child spanning length 3. Registered as the axon.
pub(crate) fn two_section_arbor_morphology() -> Morphology {
    let mut morphology = Morphology::new("two-section");
    let root = morphology
        .add_section(
            vec![
                sample(0.0, 0.0, 0.0, 1.0, 0),
                sample(0.0, 0.0, 1.0, 1.0, 1),
                sample(0.0, 0.0, 2.0, 1.0, 2),
            ],
            None,
        )
        .unwrap();
    morphology
        .add_section(
            vec![sample(0.0, 0.0, 2.0, 1.0, 2), sample(0.0, 0.0, 5.0, 1.0, 3)],
            Some(root),
        )
        .unwrap();
    morphology.set_axon(root).unwrap();
    morphology
}

/// Root section that bifurcates into two leaves. Registered as the axon.
pub(crate) fn branched_arbor_morphology() -> Morphology {
    let mut morphology = Morphology::new("branched");
    let root = morphology
        .add_section(
            vec![sample(0.0, 0.0, 0.0, 1.0, 0), sample(0.0, 0.0, 2.0, 1.0, 1)],
            None,
        )
        .unwrap();
    morphology
        .add_section(
            vec![sample(0.0, 0.0, 2.0, 1.0, 1), sample(1.0, 0.0, 4.0, 0.5, 2)],
            Some(root),
        )
        .unwrap();
    morphology
        .add_section(
            vec![sample(0.0, 0.0, 2.0, 1.0, 1), sample(-1.0, 0.0, 5.0, 0.5, 3)],
            Some(root),
        )
        .unwrap();
    morphology.set_axon(root).unwrap();
    morphology
}

/// One axon of length 10 and one basal dendrite of length 4, no apical.
pub(crate) fn two_arbor_morphology() -> Morphology {
    let mut morphology = Morphology::new("two-arbor");
    let axon = morphology
        .add_section(
            vec![sample(0.0, 0.0, 0.0, 1.0, 0), sample(0.0, 0.0, 10.0, 1.0, 1)],
            None,
        )
        .unwrap();
    morphology.set_axon(axon).unwrap();
    let basal = morphology
        .add_section(
            vec![sample(0.0, 0.0, 0.0, 0.5, 2), sample(4.0, 0.0, 0.0, 0.5, 3)],
            None,
        )
        .unwrap();
    morphology.add_basal_dendrite(basal).unwrap();
    morphology
}

/// Axon of length 10 plus basal dendrites of lengths 4 and 6, no apical.
pub(crate) fn three_arbor_morphology() -> Morphology {
    let mut morphology = two_arbor_morphology();
    let basal = morphology
        .add_section(
            vec![sample(0.0, 0.0, 0.0, 0.5, 4), sample(0.0, 6.0, 0.0, 0.5, 5)],
            None,
        )
        .unwrap();
    morphology.add_basal_dendrite(basal).unwrap();
    morphology
}
