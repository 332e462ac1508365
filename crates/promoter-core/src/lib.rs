pub mod error;
mod candidate;
mod locked;
pub mod types;
mod version;

pub use candidate::{CandidateGroup, DependencyRequirement};
pub use error::*;
pub use locked::{LockedSpec, LockedSpecs};
pub use types::*;
pub use version::Version;
