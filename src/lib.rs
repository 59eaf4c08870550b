//! Parse and generate filenames for media files belonging to a named event.
//!
//! A filename encodes the event name, a zero-padded index, an optional
//! bracketed list of whitespace-separated tags, and the extension:
//!
//! ```text
//! event_009[tag some-tag].jpg
//! event2_012.jpg
//! ```
//!
//! [`pattern::format_pattern`] builds the matcher for a known event;
//! [`pattern::capture_pattern`] additionally captures the event name.
//! [`MediaFormat`] converts between a match and its fields in both
//! directions.

pub mod consts;
pub mod fs;
pub mod media;
pub mod name;
pub mod pattern;
pub mod tags;

pub use media::MediaFormat;
pub use pattern::{capture_pattern, format_pattern};
