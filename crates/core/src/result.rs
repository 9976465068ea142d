use serde::Serialize;

/// One metric value computed for a single arbor. The winning branching order
/// and radial distance ride along for the extrema kernels so the identity of
/// the measured sample survives aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ItemResult {
    pub value: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branching_order: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radial_distance: Option<f32>,
}

impl ItemResult {
    pub fn scalar(value: f32) -> Self {
        Self {
            value,
            branching_order: None,
            radial_distance: None,
        }
    }

    pub fn at_order(value: f32, branching_order: u32) -> Self {
        Self {
            value,
            branching_order: Some(branching_order),
            radial_distance: None,
        }
    }
}

/// Ordered `(branching_order, value)` pairs, one entry per branching order
/// present in the measured tree, ascending.
pub type Distribution = Vec<(u32, f32)>;

/// Per-arbor-class carrier for one kernel invocation. Slots for absent
/// arbors stay `None` and are skipped by every aggregation policy; the
/// `morphology` slot is filled by the aggregation engine. Created fresh per
/// analysis call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MorphologyAnalysisResult<T = ItemResult> {
    pub axon: Option<T>,
    pub apical_dendrite: Option<T>,
    pub basal_dendrites: Vec<T>,
    pub morphology: Option<T>,
}

impl<T> Default for MorphologyAnalysisResult<T> {
    fn default() -> Self {
        Self {
            axon: None,
            apical_dendrite: None,
            basal_dendrites: Vec::new(),
            morphology: None,
        }
    }
}

impl<T> MorphologyAnalysisResult<T> {
    /// Per-arbor results in the fixed scan order: apical dendrite, basal
    /// dendrites, axon. Tie-breaking in min/max aggregation depends on it.
    pub fn arbor_results(&self) -> Vec<&T> {
        let mut results = Vec::new();
        if let Some(result) = &self.apical_dendrite {
            results.push(result);
        }
        for result in &self.basal_dendrites {
            results.push(result);
        }
        if let Some(result) = &self.axon {
            results.push(result);
        }
        results
    }

    pub fn has_arbor_results(&self) -> bool {
        self.axon.is_some() || self.apical_dendrite.is_some() || !self.basal_dendrites.is_empty()
    }
}
