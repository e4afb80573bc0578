//! Flattening and ranking of near-Earth-object feed entries.
//!
//! [`extract`] walks a parsed [`RawFeedEnvelope`](crate::parser::RawFeedEnvelope)
//! and decodes every entry into an [`AsteroidRecord`]; [`rank_top`] orders
//! hazardous records by size and bounds the result.

pub mod extract;
pub mod node;
pub mod rank;
pub mod types;

pub use extract::extract;
pub use rank::rank_top;
pub use types::AsteroidRecord;
