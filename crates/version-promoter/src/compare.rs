use std::cmp::Ordering;

use promoter_core::{BumpLevel, CandidateGroup, Version};

use crate::PromoterError;

/// Comparison inputs for one dependency that has a locked version.
pub(crate) struct LockedOrdering<'a> {
    pub(crate) dependency: &'a str,
    pub(crate) level: BumpLevel,
    pub(crate) locked: &'a Version,
    pub(crate) unlocking: bool,
}

impl LockedOrdering<'_> {
    /// The locked candidate only gets pushed to the end for packages outside an
    /// explicit unlock set; at major level nothing is special-cased.
    pub(crate) fn defers_to_locked(&self) -> bool {
        self.level != BumpLevel::Major && !self.unlocking
    }

    pub(crate) fn compare(&self, a: &Version, b: &Version) -> Result<Ordering, PromoterError> {
        if self.level == BumpLevel::Major || either_older_than(self.locked, a, b) {
            return Ok(a.cmp(b));
        }
        if a.major() != b.major() {
            return Ok(b.cmp(a));
        }
        if self.level != BumpLevel::Patch && a.minor() != b.minor() {
            return Ok(b.cmp(a));
        }
        if !self.unlocking && exactly_one_matches(self.locked, a, b) {
            return self.sort_matching_to_end(a, b);
        }
        Ok(a.cmp(b))
    }

    fn sort_matching_to_end(&self, a: &Version, b: &Version) -> Result<Ordering, PromoterError> {
        match (a == self.locked, b == self.locked) {
            (true, false) => Ok(Ordering::Greater),
            (false, true) => Ok(Ordering::Less),
            _ => Err(PromoterError::LockedVersionMismatch {
                dependency: self.dependency.to_string(),
                locked: self.locked.clone(),
                a: a.clone(),
                b: b.clone(),
            }),
        }
    }
}

fn either_older_than(locked: &Version, a: &Version, b: &Version) -> bool {
    a < locked || b < locked
}

fn exactly_one_matches(locked: &Version, a: &Version, b: &Version) -> bool {
    (a == locked) != (b == locked)
}

pub(crate) fn sort_ascending(groups: &mut [CandidateGroup]) {
    groups.sort_by(|a, b| a.version.cmp(&b.version));
}

/// Sorts with the lock-aware rules, surfacing the first comparison failure.
pub(crate) fn sort_locked(
    groups: &mut [CandidateGroup],
    ordering: &LockedOrdering<'_>,
) -> Result<(), PromoterError> {
    let mut failure = None;
    groups.sort_by(|a, b| {
        ordering
            .compare(&a.version, &b.version)
            .unwrap_or_else(|err| {
                failure.get_or_insert(err);
                Ordering::Equal
            })
    });
    failure.map_or(Ok(()), Err)
}
