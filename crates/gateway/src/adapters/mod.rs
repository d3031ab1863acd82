//! Exchange adapters
//!
//! Adapters feed recorded or live sessions into the transport traits.

pub mod json_lines;

pub use json_lines::{JsonLinesFeed, JsonLinesSink};
