use promoter_core::{BumpLevel, CandidateGroup, Version};

/// Segment indices that must equal the locked version's at a given level.
fn must_match(level: BumpLevel) -> &'static [usize] {
    match level {
        BumpLevel::Major => &[],
        BumpLevel::Minor => &[0],
        BumpLevel::Patch => &[0, 1],
    }
}

fn within_level(level: BumpLevel, candidate: &Version, locked: &Version) -> bool {
    must_match(level)
        .iter()
        .all(|&idx| candidate.segment(idx) == locked.segment(idx))
        && candidate >= locked
}

/// Drops candidates outside the level's scope. Without a lock, or at major
/// level, every candidate is kept.
pub(crate) fn filter_candidates(
    groups: &[CandidateGroup],
    level: BumpLevel,
    locked: Option<&Version>,
) -> Vec<CandidateGroup> {
    match locked {
        Some(locked) if level != BumpLevel::Major => groups
            .iter()
            .filter(|group| within_level(level, &group.version, locked))
            .cloned()
            .collect(),
        _ => groups.to_vec(),
    }
}
