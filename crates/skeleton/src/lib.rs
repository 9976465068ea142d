use glam::Vec3;

/// One digitized point of a traced neurite: position, radius and the index
/// it carried in the source file. Immutable once parsed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub position: Vec3,
    pub radius: f32,
    pub index: u64,
}

impl Sample {
    pub fn new(position: Vec3, radius: f32, index: u64) -> Self {
        Self {
            position,
            radius,
            index,
        }
    }

    /// Distance from the origin of the morphology space.
    pub fn radial_distance(&self) -> f32 {
        self.position.length()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(u32);

impl SectionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A maximal unbranched run of at least two samples. Sections form a rooted
/// tree per arbor; topology is fixed after construction, only the cached
/// scalars below are written later by analysis and layout passes.
#[derive(Debug, Clone)]
pub struct Section {
    pub id: SectionId,
    pub samples: Vec<Sample>,
    pub branching_order: u32,
    pub parent: Option<SectionId>,
    pub children: Vec<SectionId>,
    pub length: Option<f32>,
    pub path_length: Option<f32>,
    pub dendrogram_x: Option<f32>,
    pub dendrogram_y: Option<f32>,
}

impl Section {
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    pub fn first_sample(&self) -> &Sample {
        &self.samples[0]
    }

    pub fn last_sample(&self) -> &Sample {
        &self.samples[self.samples.len() - 1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArborKind {
    Axon,
    ApicalDendrite,
    BasalDendrite,
}

impl ArborKind {
    pub fn label(self) -> &'static str {
        match self {
            ArborKind::Axon => "Axon",
            ArborKind::ApicalDendrite => "Apical Dendrite",
            ArborKind::BasalDendrite => "Basal Dendrite",
        }
    }
}

/// An arbor is identified by the root section of its tree. The branching
/// order summary is a cache filled by the analysis layer.
#[derive(Debug, Clone)]
pub struct Arbor {
    pub root: SectionId,
    pub kind: ArborKind,
    pub maximum_branching_order: Option<u32>,
}

#[derive(Debug, Clone, Default)]
pub struct Soma {
    pub centroid: Vec3,
    pub mean_radius: f32,
    pub profile_points: Vec<Vec3>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkeletonError {
    TooFewSamples { parent: Option<SectionId> },
    MissingSection(SectionId),
    NotARoot(SectionId),
    ArborAlreadySet(ArborKind),
    BranchingOrderMismatch(SectionId),
}

/// The full reconstructed neuron. Sections live in an arena indexed by
/// `SectionId`, so parent/child navigation is O(1) in both directions and
/// the bidirectional tree stays free of ownership cycles.
#[derive(Debug, Clone, Default)]
pub struct Morphology {
    pub label: String,
    sections: Vec<Section>,
    pub soma: Option<Soma>,
    pub axon: Option<Arbor>,
    pub apical_dendrite: Option<Arbor>,
    pub basal_dendrites: Vec<Arbor>,
}

impl Morphology {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn section(&self, id: SectionId) -> &Section {
        &self.sections[id.index()]
    }

    pub fn section_mut(&mut self, id: SectionId) -> &mut Section {
        &mut self.sections[id.index()]
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Appends a section to the arena and links it under `parent`. The
    /// branching order is derived from the parent (roots start at 1), which
    /// keeps the tree acyclic by construction.
    pub fn add_section(
        &mut self,
        samples: Vec<Sample>,
        parent: Option<SectionId>,
    ) -> Result<SectionId, SkeletonError> {
        if samples.len() < 2 {
            return Err(SkeletonError::TooFewSamples { parent });
        }
        let branching_order = match parent {
            Some(parent_id) => {
                if parent_id.index() >= self.sections.len() {
                    return Err(SkeletonError::MissingSection(parent_id));
                }
                self.section(parent_id).branching_order + 1
            }
            None => 1,
        };
        let id = SectionId(self.sections.len() as u32);
        self.sections.push(Section {
            id,
            samples,
            branching_order,
            parent,
            children: Vec::new(),
            length: None,
            path_length: None,
            dendrogram_x: None,
            dendrogram_y: None,
        });
        if let Some(parent_id) = parent {
            self.section_mut(parent_id).children.push(id);
        }
        Ok(id)
    }

    pub fn set_axon(&mut self, root: SectionId) -> Result<(), SkeletonError> {
        if self.axon.is_some() {
            return Err(SkeletonError::ArborAlreadySet(ArborKind::Axon));
        }
        self.axon = Some(self.make_arbor(root, ArborKind::Axon)?);
        Ok(())
    }

    pub fn set_apical_dendrite(&mut self, root: SectionId) -> Result<(), SkeletonError> {
        if self.apical_dendrite.is_some() {
            return Err(SkeletonError::ArborAlreadySet(ArborKind::ApicalDendrite));
        }
        self.apical_dendrite = Some(self.make_arbor(root, ArborKind::ApicalDendrite)?);
        Ok(())
    }

    pub fn add_basal_dendrite(&mut self, root: SectionId) -> Result<(), SkeletonError> {
        let arbor = self.make_arbor(root, ArborKind::BasalDendrite)?;
        self.basal_dendrites.push(arbor);
        Ok(())
    }

    fn make_arbor(&self, root: SectionId, kind: ArborKind) -> Result<Arbor, SkeletonError> {
        if root.index() >= self.sections.len() {
            return Err(SkeletonError::MissingSection(root));
        }
        if !self.section(root).is_root() {
            return Err(SkeletonError::NotARoot(root));
        }
        Ok(Arbor {
            root,
            kind,
            maximum_branching_order: None,
        })
    }

    /// All present arbors in the fixed axon, apical, basal order.
    pub fn arbors(&self) -> impl Iterator<Item = &Arbor> {
        self.axon
            .iter()
            .chain(self.apical_dendrite.iter())
            .chain(self.basal_dendrites.iter())
    }

    pub fn arbor_count(&self) -> usize {
        self.arbors().count()
    }

    /// Depth-first preorder over the arbor rooted at `root`, children in
    /// insertion order. Iterative on purpose so pathological depths cannot
    /// overflow the call stack.
    pub fn sections_of(&self, root: SectionId) -> Vec<SectionId> {
        let mut order = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            let section = self.section(id);
            for child in section.children.iter().rev() {
                stack.push(*child);
            }
        }
        order
    }

    /// Leaves of the arbor in depth-first order. The dendrogram x-pass
    /// depends on this enumeration being stable.
    pub fn leaves_of(&self, root: SectionId) -> Vec<SectionId> {
        self.sections_of(root)
            .into_iter()
            .filter(|id| self.section(*id).is_leaf())
            .collect()
    }

    /// Checks the invariants a parser must guarantee before handing the tree
    /// to analysis: sample counts, mutual parent/child links and branching
    /// order consistency. Structural failures here are fatal; kernels assume
    /// a validated tree.
    pub fn validate(&self) -> Result<(), SkeletonError> {
        for section in &self.sections {
            if section.samples.len() < 2 {
                return Err(SkeletonError::TooFewSamples {
                    parent: section.parent,
                });
            }
            for child in &section.children {
                if child.index() >= self.sections.len() {
                    return Err(SkeletonError::MissingSection(*child));
                }
                let child_section = self.section(*child);
                if child_section.parent != Some(section.id) {
                    return Err(SkeletonError::MissingSection(*child));
                }
                if child_section.branching_order != section.branching_order + 1 {
                    return Err(SkeletonError::BranchingOrderMismatch(*child));
                }
            }
            match section.parent {
                Some(parent) if parent.index() >= self.sections.len() => {
                    return Err(SkeletonError::MissingSection(parent));
                }
                Some(parent) => {
                    if !self.section(parent).children.contains(&section.id) {
                        return Err(SkeletonError::MissingSection(section.id));
                    }
                }
                None => {
                    if section.branching_order != 1 {
                        return Err(SkeletonError::BranchingOrderMismatch(section.id));
                    }
                }
            }
        }
        Ok(())
    }

    /// Drops every cached scalar so an analysis or layout pass starts from a
    /// clean slate.
    pub fn clear_cached_scalars(&mut self) {
        for section in &mut self.sections {
            section.length = None;
            section.path_length = None;
            section.dendrogram_x = None;
            section.dendrogram_y = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f32, y: f32, z: f32, radius: f32, index: u64) -> Sample {
        Sample::new(Vec3::new(x, y, z), radius, index)
    }

    fn two_samples() -> Vec<Sample> {
        vec![sample(0.0, 0.0, 0.0, 1.0, 0), sample(0.0, 0.0, 1.0, 1.0, 1)]
    }

    #[test]
    fn add_section_derives_branching_order() {
        let mut morphology = Morphology::new("test");
        let root = morphology.add_section(two_samples(), None).unwrap();
        let child = morphology.add_section(two_samples(), Some(root)).unwrap();
        let grandchild = morphology.add_section(two_samples(), Some(child)).unwrap();

        assert_eq!(morphology.section(root).branching_order, 1);
        assert_eq!(morphology.section(child).branching_order, 2);
        assert_eq!(morphology.section(grandchild).branching_order, 3);
        assert_eq!(morphology.section(root).children, vec![child]);
        assert_eq!(morphology.section(grandchild).parent, Some(child));
        assert!(morphology.validate().is_ok());
    }

    #[test]
    fn single_sample_section_is_rejected() {
        let mut morphology = Morphology::new("test");
        let result = morphology.add_section(vec![sample(0.0, 0.0, 0.0, 1.0, 0)], None);
        assert_eq!(
            result,
            Err(SkeletonError::TooFewSamples { parent: None })
        );
    }

    #[test]
    fn arbor_roots_must_be_roots() {
        let mut morphology = Morphology::new("test");
        let root = morphology.add_section(two_samples(), None).unwrap();
        let child = morphology.add_section(two_samples(), Some(root)).unwrap();

        assert_eq!(
            morphology.set_axon(child),
            Err(SkeletonError::NotARoot(child))
        );
        assert!(morphology.set_axon(root).is_ok());
        assert_eq!(
            morphology.set_axon(root),
            Err(SkeletonError::ArborAlreadySet(ArborKind::Axon))
        );
    }

    #[test]
    fn depth_first_order_is_stable() {
        let mut morphology = Morphology::new("test");
        let root = morphology.add_section(two_samples(), None).unwrap();
        let left = morphology.add_section(two_samples(), Some(root)).unwrap();
        let right = morphology.add_section(two_samples(), Some(root)).unwrap();
        let left_leaf = morphology.add_section(two_samples(), Some(left)).unwrap();

        assert_eq!(
            morphology.sections_of(root),
            vec![root, left, left_leaf, right]
        );
        assert_eq!(morphology.leaves_of(root), vec![left_leaf, right]);
    }

    #[test]
    fn arbors_iterate_in_fixed_order() {
        let mut morphology = Morphology::new("test");
        let axon_root = morphology.add_section(two_samples(), None).unwrap();
        let basal_root = morphology.add_section(two_samples(), None).unwrap();
        morphology.add_basal_dendrite(basal_root).unwrap();
        morphology.set_axon(axon_root).unwrap();

        let kinds: Vec<ArborKind> = morphology.arbors().map(|arbor| arbor.kind).collect();
        assert_eq!(kinds, vec![ArborKind::Axon, ArborKind::BasalDendrite]);
        assert_eq!(morphology.arbor_count(), 2);
    }
}
