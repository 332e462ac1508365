use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Version;

/// A package version recorded by a previous resolution, possibly for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedSpec {
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub platform: Option<String>,
}

impl LockedSpec {
    #[must_use]
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            platform: None,
        }
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }
}

/// Locked specs grouped by package name, in lock order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedSpecs {
    by_name: IndexMap<String, Vec<LockedSpec>>,
}

impl LockedSpecs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, spec: LockedSpec) {
        self.by_name.entry(spec.name.clone()).or_default().push(spec);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> &[LockedSpec] {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every platform entry of a package shares a version, so the first one answers.
    #[must_use]
    pub fn version_for(&self, name: &str) -> Option<&Version> {
        self.get(name).first().map(|spec| &spec.version)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[LockedSpec])> {
        self.by_name
            .iter()
            .map(|(name, specs)| (name.as_str(), specs.as_slice()))
    }
}

impl FromIterator<LockedSpec> for LockedSpecs {
    fn from_iter<I: IntoIterator<Item = LockedSpec>>(iter: I) -> Self {
        let mut specs = Self::new();
        for spec in iter {
            specs.insert(spec);
        }
        specs
    }
}

impl Extend<LockedSpec> for LockedSpecs {
    fn extend<I: IntoIterator<Item = LockedSpec>>(&mut self, iter: I) {
        for spec in iter {
            self.insert(spec);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        s.parse().expect("valid version")
    }

    #[test]
    fn empty_table_has_no_versions() {
        let specs = LockedSpecs::new();
        assert!(specs.is_empty());
        assert_eq!(specs.version_for("rails"), None);
        assert!(specs.get("rails").is_empty());
    }

    #[test]
    fn platform_entries_group_under_one_name() {
        let specs: LockedSpecs = [
            LockedSpec::new("nokogiri", v("1.15.4")).with_platform("x86_64-linux"),
            LockedSpec::new("nokogiri", v("1.15.4")).with_platform("arm64-darwin"),
            LockedSpec::new("rack", v("3.0.8")),
        ]
        .into_iter()
        .collect();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs.get("nokogiri").len(), 2);
        assert_eq!(specs.version_for("nokogiri"), Some(&v("1.15.4")));
        assert!(specs.contains("rack"));
    }

    #[test]
    fn version_comes_from_first_entry() {
        let mut specs = LockedSpecs::new();
        specs.insert(LockedSpec::new("json", v("2.6.3")).with_platform("java"));
        specs.insert(LockedSpec::new("json", v("2.6.3")));

        assert_eq!(specs.get("json")[0].platform.as_deref(), Some("java"));
        assert_eq!(specs.version_for("json"), Some(&v("2.6.3")));
    }

    #[test]
    fn iteration_follows_lock_order() {
        let specs: LockedSpecs = [
            LockedSpec::new("zeitwerk", v("2.6.12")),
            LockedSpec::new("actionpack", v("7.1.2")),
        ]
        .into_iter()
        .collect();

        let names: Vec<_> = specs.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["zeitwerk", "actionpack"]);
    }
}
