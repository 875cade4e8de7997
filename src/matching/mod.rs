pub mod normalize;
pub mod overlap;

pub use normalize::{normalize, split_phrases, tokens};
pub use overlap::{matches, OverlapMatcher};
