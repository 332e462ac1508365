use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, PoisonError, RwLock};

use promoter_core::CandidateGroup;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct CacheKey {
    dependency: String,
    fingerprint: u64,
}

impl CacheKey {
    pub(crate) fn new(dependency: &str, groups: &[CandidateGroup]) -> Self {
        Self {
            dependency: dependency.to_string(),
            fingerprint: fingerprint(groups),
        }
    }
}

/// Hash of the candidate set that ignores the order candidates arrive in.
fn fingerprint(groups: &[CandidateGroup]) -> u64 {
    let mut member_hashes: Vec<u64> = groups
        .iter()
        .map(|group| {
            let mut hasher = DefaultHasher::new();
            group.hash(&mut hasher);
            hasher.finish()
        })
        .collect();
    member_hashes.sort_unstable();

    let mut hasher = DefaultHasher::new();
    member_hashes.hash(&mut hasher);
    hasher.finish()
}

/// Per-run memo of ordering results. Concurrent misses on one key may both
/// compute; the first stored value wins and both callers see equal results.
#[derive(Debug, Default)]
pub(crate) struct ResultCache {
    entries: RwLock<HashMap<CacheKey, Arc<[CandidateGroup]>>>,
}

impl ResultCache {
    pub(crate) fn get(&self, key: &CacheKey) -> Option<Arc<[CandidateGroup]>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub(crate) fn insert(
        &self,
        key: CacheKey,
        value: Vec<CandidateGroup>,
    ) -> Arc<[CandidateGroup]> {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert_with(|| value.into())
            .clone()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub(crate) fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
