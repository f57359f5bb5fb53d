//! HTTP Header Multimap.
mod map;
pub mod standard;

pub use map::HeaderMap;
