use std::collections::BTreeMap;

use arbora_skeleton::{Morphology, Sample, SectionId, SkeletonError, Soma};
use glam::Vec3;
use tracing::warn;

const SWC_SOMA: u32 = 1;
const SWC_AXON: u32 = 2;
const SWC_BASAL_DENDRITE: u32 = 3;
const SWC_APICAL_DENDRITE: u32 = 4;

#[derive(Debug, Clone, Copy)]
struct SwcRecord {
    index: i64,
    kind: u32,
    position: Vec3,
    radius: f32,
    parent: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SwcError {
    MalformedLine { line: usize },
    DuplicateIndex { index: i64 },
    MissingParent { index: i64, parent: i64 },
    SectionTooShort { index: i64 },
    Skeleton(SkeletonError),
}

impl From<SkeletonError> for SwcError {
    fn from(err: SkeletonError) -> Self {
        SwcError::Skeleton(err)
    }
}

/// Parses SWC tracing text into a validated morphology. Soma records become
/// the soma centroid/profile; neurite records are chained into sections that
/// split at branch points, with the branch sample shared as the first sample
/// of every child section. Records of unknown structure type are skipped
/// (with their subtrees) and logged.
pub fn parse_swc(text: &str, label: &str) -> Result<Morphology, SwcError> {
    let records = parse_records(text)?;
    let mut children: BTreeMap<i64, Vec<i64>> = BTreeMap::new();
    for record in records.values() {
        if record.parent >= 0 {
            if !records.contains_key(&record.parent) {
                return Err(SwcError::MissingParent {
                    index: record.index,
                    parent: record.parent,
                });
            }
            children.entry(record.parent).or_default().push(record.index);
        }
    }

    let mut morphology = Morphology::new(label);
    morphology.soma = build_soma(&records);

    for record in records.values() {
        if record.kind == SWC_SOMA || !is_arbor_root(record, &records) {
            continue;
        }
        match record.kind {
            SWC_AXON | SWC_BASAL_DENDRITE | SWC_APICAL_DENDRITE => {
                let root_section =
                    build_arbor_sections(&mut morphology, record.index, &records, &children)?;
                match record.kind {
                    SWC_AXON => morphology.set_axon(root_section)?,
                    SWC_APICAL_DENDRITE => morphology.set_apical_dendrite(root_section)?,
                    _ => morphology.add_basal_dendrite(root_section)?,
                }
            }
            other => {
                warn!(index = record.index, kind = other, "skipping unknown SWC structure type");
            }
        }
    }

    morphology.validate()?;
    Ok(morphology)
}

fn parse_records(text: &str) -> Result<BTreeMap<i64, SwcRecord>, SwcError> {
    let mut records = BTreeMap::new();
    for (line_number, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let mut fields = trimmed.split_whitespace();
        let record = (|| {
            let index = fields.next()?.parse::<i64>().ok()?;
            let kind = fields.next()?.parse::<u32>().ok()?;
            let x = fields.next()?.parse::<f32>().ok()?;
            let y = fields.next()?.parse::<f32>().ok()?;
            let z = fields.next()?.parse::<f32>().ok()?;
            let radius = fields.next()?.parse::<f32>().ok()?;
            let parent = fields.next()?.parse::<i64>().ok()?;
            Some(SwcRecord {
                index,
                kind,
                position: Vec3::new(x, y, z),
                radius,
                parent,
            })
        })()
        .ok_or(SwcError::MalformedLine {
            line: line_number + 1,
        })?;
        if records.insert(record.index, record).is_some() {
            return Err(SwcError::DuplicateIndex {
                index: record.index,
            });
        }
    }
    Ok(records)
}

fn build_soma(records: &BTreeMap<i64, SwcRecord>) -> Option<Soma> {
    let soma_records: Vec<&SwcRecord> = records
        .values()
        .filter(|record| record.kind == SWC_SOMA)
        .collect();
    if soma_records.is_empty() {
        return None;
    }
    let count = soma_records.len() as f32;
    let centroid = soma_records
        .iter()
        .fold(Vec3::ZERO, |sum, record| sum + record.position)
        / count;
    let mean_radius = soma_records.iter().map(|record| record.radius).sum::<f32>() / count;
    Some(Soma {
        centroid,
        mean_radius,
        profile_points: soma_records.iter().map(|record| record.position).collect(),
    })
}

/// A neurite record starts an arbor when its parent is absent or a soma
/// record.
fn is_arbor_root(record: &SwcRecord, records: &BTreeMap<i64, SwcRecord>) -> bool {
    match records.get(&record.parent) {
        None => true,
        Some(parent) => parent.kind == SWC_SOMA,
    }
}

fn sample_of(record: &SwcRecord) -> Sample {
    Sample::new(record.position, record.radius, record.index as u64)
}

fn is_neurite_kind(kind: u32) -> bool {
    matches!(kind, SWC_AXON | SWC_BASAL_DENDRITE | SWC_APICAL_DENDRITE)
}

/// Chains records into sections: a section runs from its start record while
/// exactly one child follows, then splits. Each child section starts with
/// the branch sample so adjacent sections share their boundary.
fn build_arbor_sections(
    morphology: &mut Morphology,
    root_index: i64,
    records: &BTreeMap<i64, SwcRecord>,
    children: &BTreeMap<i64, Vec<i64>>,
) -> Result<SectionId, SwcError> {
    let mut root_section = None;
    let mut stack: Vec<(i64, Option<SectionId>, Option<Sample>)> =
        vec![(root_index, None, None)];
    while let Some((start, parent_section, leading)) = stack.pop() {
        let mut samples = Vec::new();
        if let Some(sample) = leading {
            samples.push(sample);
        }
        let mut current = start;
        loop {
            samples.push(sample_of(&records[&current]));
            match children.get(&current) {
                Some(next) if next.len() == 1 && is_neurite_kind(records[&next[0]].kind) => {
                    current = next[0]
                }
                _ => break,
            }
        }
        let section = morphology
            .add_section(samples, parent_section)
            .map_err(|err| match err {
                SkeletonError::TooFewSamples { .. } => SwcError::SectionTooShort { index: start },
                other => SwcError::Skeleton(other),
            })?;
        if parent_section.is_none() {
            root_section = Some(section);
        }
        if let Some(branches) = children.get(&current) {
            let branch_sample = sample_of(&records[&current]);
            for child in branches.iter().rev() {
                let child_record = &records[child];
                if !is_neurite_kind(child_record.kind) {
                    warn!(
                        index = child_record.index,
                        kind = child_record.kind,
                        "skipping unknown SWC structure type"
                    );
                    continue;
                }
                stack.push((*child, Some(section), Some(branch_sample)));
            }
        }
    }
    // The first processed chain is the arbor root by construction.
    root_section.ok_or(SwcError::SectionTooShort { index: root_index })
}
