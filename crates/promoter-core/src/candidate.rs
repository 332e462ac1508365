use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Version;

/// A dependency declared by a candidate, with its requirement kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyRequirement {
    pub name: String,
    pub requirement: String,
}

impl DependencyRequirement {
    #[must_use]
    pub fn new(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
        }
    }
}

impl fmt::Display for DependencyRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.requirement)
    }
}

/// All platform variants of one version of one package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateGroup {
    pub name: String,
    pub version: Version,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<DependencyRequirement>,
}

impl CandidateGroup {
    #[must_use]
    pub fn new(name: impl Into<String>, version: Version) -> Self {
        Self {
            name: name.into(),
            version,
            platforms: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platforms.push(platform.into());
        self
    }

    #[must_use]
    pub fn with_dependency(mut self, dependency: DependencyRequirement) -> Self {
        self.dependencies.push(dependency);
        self
    }
}

impl fmt::Display for CandidateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.version)
    }
}
