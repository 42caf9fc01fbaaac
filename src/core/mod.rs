// Core algorithm exports
pub mod distance;
pub mod ranker;
pub mod scoring;
pub mod skills;

pub use distance::distance_km;
pub use ranker::{RankResult, Ranker};
pub use scoring::{reputation_importance, score};
pub use skills::skill_match;
