mod cache;
mod compare;
mod debug;
mod error;
mod filter;
mod policy;
mod promoter;

pub use debug::{DebugSnapshot, SnapshotEntry, StrictMode};
pub use error::PromoterError;
pub use policy::PromotionPolicy;
pub use promoter::{VersionPromoter, most_preferred};

pub type Result<T> = std::result::Result<T, PromoterError>;
