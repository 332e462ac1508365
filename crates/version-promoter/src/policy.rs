use indexmap::IndexSet;
use promoter_core::{BumpLevel, LockedSpecs, Version};

/// Resolution-wide promotion settings, fixed once the promoter is built.
#[derive(Debug, Clone, Default)]
pub struct PromotionPolicy {
    level: BumpLevel,
    strict: bool,
    locked: LockedSpecs,
    unlocked: IndexSet<String>,
}

impl PromotionPolicy {
    /// An empty `unlocked` set means every package counts as unlocked.
    #[must_use]
    pub fn new<I, S>(locked: LockedSpecs, unlocked: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            level: BumpLevel::default(),
            strict: false,
            locked,
            unlocked: unlocked.into_iter().map(Into::into).collect(),
        }
    }

    pub(crate) fn set_level(&mut self, level: BumpLevel) {
        self.level = level;
    }

    pub(crate) fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    #[must_use]
    pub fn level(&self) -> BumpLevel {
        self.level
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    #[must_use]
    pub fn is_major(&self) -> bool {
        self.level == BumpLevel::Major
    }

    #[must_use]
    pub fn is_minor(&self) -> bool {
        self.level == BumpLevel::Minor
    }

    #[must_use]
    pub fn is_patch(&self) -> bool {
        self.level == BumpLevel::Patch
    }

    #[must_use]
    pub fn locked_specs(&self) -> &LockedSpecs {
        &self.locked
    }

    #[must_use]
    pub fn locked_version(&self, name: &str) -> Option<&Version> {
        self.locked.version_for(name)
    }

    #[must_use]
    pub fn unlock_gems(&self) -> &IndexSet<String> {
        &self.unlocked
    }

    #[must_use]
    pub fn is_unlocking(&self, name: &str) -> bool {
        self.unlocked.is_empty() || self.unlocked.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use promoter_core::LockedSpec;

    use super::*;

    #[test]
    fn defaults_to_major_and_loose() {
        let policy = PromotionPolicy::new(LockedSpecs::new(), Vec::<String>::new());
        assert!(policy.is_major());
        assert!(!policy.is_minor());
        assert!(!policy.is_patch());
        assert!(!policy.is_strict());
    }

    #[test]
    fn empty_unlock_set_unlocks_everything() {
        let policy = PromotionPolicy::new(LockedSpecs::new(), Vec::<String>::new());
        assert!(policy.is_unlocking("rails"));
        assert!(policy.is_unlocking("rack"));
    }

    #[test]
    fn explicit_unlock_set_limits_unlocking() {
        let policy = PromotionPolicy::new(LockedSpecs::new(), ["rack"]);
        assert!(policy.is_unlocking("rack"));
        assert!(!policy.is_unlocking("rails"));
    }

    #[test]
    fn locked_version_reads_from_table() {
        let locked: LockedSpecs = [LockedSpec::new("rack", "2.1.0".parse().expect("valid"))]
            .into_iter()
            .collect();
        let policy = PromotionPolicy::new(locked, ["rack"]);

        assert_eq!(
            policy.locked_version("rack").map(ToString::to_string),
            Some("2.1.0".to_string())
        );
        assert_eq!(policy.locked_version("rails"), None);
    }
}
