use promoter_config::PromotionConfig;
use promoter_core::{BumpLevel, CandidateGroup, LockedSpecs};
use tracing::trace;

use crate::cache::{CacheKey, ResultCache};
use crate::compare::{LockedOrdering, sort_ascending, sort_locked};
use crate::debug::{DebugSnapshot, StrictMode, trace_snapshot};
use crate::filter::filter_candidates;
use crate::{PromoterError, PromotionPolicy};

/// Orders the candidate versions of a dependency so that a resolver trying
/// candidates from the end of the list reaches the preferred version first.
///
/// By default every candidate is returned, with the requested level only
/// affecting order; in complicated graphs a resolver will still promote past
/// that level or fall back to older versions. In strict mode candidates
/// outside the level are removed, which can make a resolution fail even though
/// matching versions exist in the index.
#[derive(Debug)]
pub struct VersionPromoter {
    policy: PromotionPolicy,
    debug: bool,
    memoize: bool,
    cache: ResultCache,
}

impl VersionPromoter {
    /// `locked` should hold every currently locked package, even when all of
    /// them are being updated. An empty `unlock` set unlocks every package.
    #[must_use]
    pub fn new<I, S>(locked: LockedSpecs, unlock: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_policy(PromotionPolicy::new(locked, unlock))
    }

    #[must_use]
    pub fn from_policy(policy: PromotionPolicy) -> Self {
        Self {
            policy,
            debug: false,
            memoize: true,
            cache: ResultCache::default(),
        }
    }

    #[must_use]
    pub fn from_config<I, S>(config: &PromotionConfig, locked: LockedSpecs, unlock: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(locked, unlock)
            .with_level(config.level())
            .with_strict(config.strict())
            .with_debug(config.debug_resolver())
    }

    #[must_use]
    pub fn with_level(mut self, level: BumpLevel) -> Self {
        self.policy.set_level(level);
        self.cache.clear();
        self
    }

    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.policy.set_strict(strict);
        self.cache.clear();
        self
    }

    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    #[must_use]
    pub fn with_memoization(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }

    #[must_use]
    pub fn policy(&self) -> &PromotionPolicy {
        &self.policy
    }

    #[must_use]
    pub fn level(&self) -> BumpLevel {
        self.policy.level()
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.policy.is_strict()
    }

    #[must_use]
    pub fn is_major(&self) -> bool {
        self.policy.is_major()
    }

    #[must_use]
    pub fn is_minor(&self) -> bool {
        self.policy.is_minor()
    }

    #[must_use]
    pub fn is_patch(&self) -> bool {
        self.policy.is_patch()
    }

    #[must_use]
    pub fn locked_specs(&self) -> &LockedSpecs {
        self.policy.locked_specs()
    }

    #[must_use]
    pub fn unlock_gems(&self) -> &indexmap::IndexSet<String> {
        self.policy.unlock_gems()
    }

    #[must_use]
    pub fn is_unlocking(&self, name: &str) -> bool {
        self.policy.is_unlocking(name)
    }

    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drops memoized results, for hosts whose candidate sets can change mid-run.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    #[must_use]
    pub fn debug_snapshot(&self, dependency: &str, groups: &[CandidateGroup]) -> DebugSnapshot {
        DebugSnapshot::new(
            dependency,
            groups,
            self.policy.level(),
            StrictMode::from(self.policy.is_strict()),
        )
    }

    /// Returns `groups` sorted (and, in strict mode, filtered) for `dependency`,
    /// most preferred last.
    ///
    /// # Errors
    ///
    /// Returns an error if the candidates contain the locked version more than
    /// once, so the locked candidate cannot be singled out.
    pub fn order_candidates(
        &self,
        dependency: &str,
        groups: &[CandidateGroup],
    ) -> Result<Vec<CandidateGroup>, PromoterError> {
        let before = self
            .debug
            .then(|| self.debug_snapshot(dependency, groups));

        let key = self.memoize.then(|| CacheKey::new(dependency, groups));
        let cached = key.as_ref().and_then(|key| self.cache.get(key));
        let hit = cached.is_some();

        let ordered = match (cached, key) {
            (Some(cached), _) => cached.to_vec(),
            (None, Some(key)) => self.cache.insert(key, self.compute(dependency, groups)?).to_vec(),
            (None, None) => self.compute(dependency, groups)?,
        };

        if let Some(before) = before {
            trace_snapshot("before", hit, &before);
            trace_snapshot("after", hit, &self.debug_snapshot(dependency, &ordered));
        }

        Ok(ordered)
    }

    fn compute(
        &self,
        dependency: &str,
        groups: &[CandidateGroup],
    ) -> Result<Vec<CandidateGroup>, PromoterError> {
        let level = self.policy.level();
        let locked = self.policy.locked_version(dependency);

        let mut ordered = if self.policy.is_strict() {
            filter_candidates(groups, level, locked)
        } else {
            groups.to_vec()
        };

        match locked {
            None => sort_ascending(&mut ordered),
            Some(locked) => {
                let ordering = LockedOrdering {
                    dependency,
                    level,
                    locked,
                    unlocking: self.policy.is_unlocking(dependency),
                };

                if ordering.defers_to_locked()
                    && ordered.iter().filter(|g| &g.version == locked).count() > 1
                {
                    return Err(PromoterError::DuplicateLockedCandidate {
                        dependency: dependency.to_string(),
                        locked: locked.clone(),
                    });
                }

                sort_locked(&mut ordered, &ordering)?;
            }
        }

        trace!(
            dependency,
            locked = %locked.map_or_else(|| "none".to_string(), ToString::to_string),
            %level,
            kept = ordered.len(),
            total = groups.len(),
            "ordered candidates"
        );
        Ok(ordered)
    }
}

/// The candidate a tail-first resolver tries first.
#[must_use]
pub fn most_preferred(ordered: &[CandidateGroup]) -> Option<&CandidateGroup> {
    ordered.last()
}
