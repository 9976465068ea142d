use arbora_skeleton::{Morphology, SectionId};

use crate::kernels::section_length;

/// Horizontal spacing between consecutive leaves.
pub const DENDROGRAM_DELTA: f32 = 15.0;

/// Horizontal overhang added to sibling connectors.
const CONNECTOR_PADDING: f32 = 0.5;

/// One vertical bar of the dendrogram: a section drawn at `x` from its
/// parent's cumulative path length down to its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DendrogramSegment {
    pub section: SectionId,
    pub branching_order: u32,
    pub x: f32,
    pub path_start: f32,
    pub path_end: f32,
}

/// Horizontal bar joining two consecutive siblings at their parent's end
/// depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DendrogramConnector {
    pub x_start: f32,
    pub x_end: f32,
    pub depth: f32,
}

#[derive(Debug, Clone, Default)]
pub struct DendrogramLayout {
    pub segments: Vec<DendrogramSegment>,
    pub connectors: Vec<DendrogramConnector>,
}

/// Derives the schematic tree layout of one arbor: topology on the x axis,
/// cumulative path length on the y axis. Writes the coordinates into the
/// sections' cached layout scalars and returns the drawing contract. Both
/// passes are idempotent, so re-running on a resolved tree changes nothing.
pub fn layout_arbor(morphology: &mut Morphology, root: SectionId) -> DendrogramLayout {
    assign_x(morphology, root);
    propagate_path_lengths(morphology, root);
    collect_layout(morphology, root)
}

/// Horizontal pass: leaves take `i * delta` in depth-first order, then each
/// leaf walks upward averaging children into parents. A parent whose
/// children are not all resolved yet defers; a later leaf's walk completes
/// it. Ancestors revisited from a second leaf recompute the same mean.
fn assign_x(morphology: &mut Morphology, root: SectionId) {
    let leaves = morphology.leaves_of(root);
    for (i, leaf) in leaves.iter().enumerate() {
        morphology.section_mut(*leaf).dendrogram_x = Some(i as f32 * DENDROGRAM_DELTA);
    }
    for leaf in &leaves {
        resolve_ancestor_x(morphology, *leaf);
    }
}

fn resolve_ancestor_x(morphology: &mut Morphology, from: SectionId) {
    let mut current = from;
    while let Some(parent_id) = morphology.section(current).parent {
        let parent = morphology.section(parent_id);
        let mut sum = 0.0;
        for child in &parent.children {
            match morphology.section(*child).dendrogram_x {
                Some(x) => sum += x,
                // A sibling subtree has unresolved leaves; its last leaf
                // finishes this parent.
                None => return,
            }
        }
        let x = sum / parent.children.len() as f32;
        morphology.section_mut(parent_id).dendrogram_x = Some(x);
        current = parent_id;
    }
}

/// Vertical pass, top-down: caches each section's length and cumulative
/// path length (root starts at zero). Preorder guarantees a parent's path
/// length is set before its children read it.
fn propagate_path_lengths(morphology: &mut Morphology, root: SectionId) {
    for id in morphology.sections_of(root) {
        let length = section_length(morphology.section(id));
        let upstream = morphology
            .section(id)
            .parent
            .and_then(|parent| morphology.section(parent).path_length)
            .unwrap_or(0.0);
        let section = morphology.section_mut(id);
        section.length = Some(length);
        section.path_length = Some(upstream + length);
        section.dendrogram_y = section.path_length;
    }
}

fn collect_layout(morphology: &Morphology, root: SectionId) -> DendrogramLayout {
    let mut layout = DendrogramLayout::default();
    for id in morphology.sections_of(root) {
        let section = morphology.section(id);
        let path_end = section.path_length.unwrap_or(0.0);
        let path_start = section
            .parent
            .and_then(|parent| morphology.section(parent).path_length)
            .unwrap_or(0.0);
        layout.segments.push(DendrogramSegment {
            section: id,
            branching_order: section.branching_order,
            x: section.dendrogram_x.unwrap_or(0.0),
            path_start,
            path_end,
        });
        for pair in section.children.windows(2) {
            let left = morphology.section(pair[0]).dendrogram_x.unwrap_or(0.0);
            let right = morphology.section(pair[1]).dendrogram_x.unwrap_or(0.0);
            layout.connectors.push(DendrogramConnector {
                x_start: left - CONNECTOR_PADDING,
                x_end: right + CONNECTOR_PADDING,
                depth: path_end,
            });
        }
    }
    layout
}
