use std::fmt;

use promoter_core::{BumpLevel, CandidateGroup};
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrictMode {
    Strict,
    NotStrict,
}

impl From<bool> for StrictMode {
    fn from(strict: bool) -> Self {
        if strict { Self::Strict } else { Self::NotStrict }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotEntry {
    pub version: String,
    pub dependencies: Vec<String>,
}

/// Candidate list of one ordering call, as seen before or after promotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugSnapshot {
    pub dependency: String,
    pub candidates: Vec<SnapshotEntry>,
    pub level: BumpLevel,
    pub mode: StrictMode,
}

impl DebugSnapshot {
    #[must_use]
    pub fn new(
        dependency: &str,
        groups: &[CandidateGroup],
        level: BumpLevel,
        mode: StrictMode,
    ) -> Self {
        Self {
            dependency: dependency.to_string(),
            candidates: groups
                .iter()
                .map(|group| SnapshotEntry {
                    version: group.version.to_string(),
                    dependencies: group.dependencies.iter().map(ToString::to_string).collect(),
                })
                .collect(),
            level,
            mode,
        }
    }
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

pub(crate) fn trace_snapshot(phase: &'static str, cached: bool, snapshot: &DebugSnapshot) {
    debug!(
        dependency = %snapshot.dependency,
        phase,
        cached,
        snapshot = %snapshot,
        "sort_versions"
    );
}

#[cfg(test)]
mod tests {
    use promoter_core::DependencyRequirement;

    use super::*;

    #[test]
    fn snapshot_lists_versions_and_requirements() {
        let groups = vec![
            CandidateGroup::new("rails", "7.1.2".parse().expect("valid"))
                .with_dependency(DependencyRequirement::new("rack", ">= 2.2.4")),
        ];

        let snapshot = DebugSnapshot::new("rails", &groups, BumpLevel::Minor, StrictMode::Strict);

        assert_eq!(snapshot.candidates.len(), 1);
        assert_eq!(snapshot.candidates[0].version, "7.1.2");
        assert_eq!(snapshot.candidates[0].dependencies, vec!["rack >= 2.2.4"]);
    }

    #[test]
    fn snapshot_renders_as_json() {
        let groups = vec![CandidateGroup::new("rack", "3.0.8".parse().expect("valid"))];
        let snapshot =
            DebugSnapshot::new("rack", &groups, BumpLevel::Patch, StrictMode::from(false));

        let rendered: serde_json::Value =
            serde_json::from_str(&snapshot.to_string()).expect("valid json");

        assert_eq!(rendered["dependency"], "rack");
        assert_eq!(rendered["level"], "patch");
        assert_eq!(rendered["mode"], "not_strict");
        assert_eq!(rendered["candidates"][0]["version"], "3.0.8");
    }
}
