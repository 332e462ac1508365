use promoter_core::Version;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PromoterError {
    #[error(
        "neither or both of '{dependency}' versions ({a} and {b}) match locked version {locked}"
    )]
    LockedVersionMismatch {
        dependency: String,
        locked: Version,
        a: Version,
        b: Version,
    },

    #[error("candidates for '{dependency}' contain locked version {locked} more than once")]
    DuplicateLockedCandidate { dependency: String, locked: Version },
}
