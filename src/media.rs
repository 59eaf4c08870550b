use eyre::Result;
use regex::Captures;
use serde::{Deserialize, Serialize};

/// Decoded fields of an event media filename, e.g. `event_009[tag some-tag].jpg`.
///
/// The record is ephemeral: built per filename from a pattern match, or
/// filled in by hand and rendered back out with [`MediaFormat::to_filename`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFormat {
    /// Event the file belongs to. Typically the name of the containing folder.
    pub event: String,
    /// Position of the file within its event. Zero-padded to 3 digits on output.
    pub index: u64,
    /// Free-form tags, order preserved. May be empty.
    pub tags: Vec<String>,
    /// File extension without the leading dot.
    pub ext: String,
}

impl MediaFormat {
    /// Fill in a record from a match of the event-capturing pattern
    /// ([`crate::pattern::capture_pattern`]: event, index, tags, ext).
    pub fn from_captures(caps: &Captures) -> Result<Self> {
        Ok(Self {
            event: caps[1].to_string(),
            index: caps[2].parse()?,
            tags: split_tags(caps.get(3).map(|m| m.as_str())),
            ext: caps[4].to_string(),
        })
    }

    /// Fill in a record from a match of the event-literal pattern
    /// ([`crate::pattern::format_pattern`]: index, tags, ext). The event is
    /// supplied by the caller since the pattern does not capture it. Group
    /// numbering differs from [`MediaFormat::from_captures`] by one; keep the
    /// two constructors paired with their pattern variants.
    pub fn from_event_captures(event: &str, caps: &Captures) -> Result<Self> {
        Ok(Self {
            event: event.to_string(),
            index: caps[1].parse()?,
            tags: split_tags(caps.get(2).map(|m| m.as_str())),
            ext: caps[3].to_string(),
        })
    }

    /// Render the canonical filename. The index is zero-padded to a minimum
    /// of three digits (wider numbers keep all their digits); the bracket
    /// segment is omitted entirely when there are no tags.
    pub fn to_filename(&self) -> String {
        let tags = if self.tags.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.tags.join(" "))
        };
        format!("{}_{:03}{}.{}", self.event, self.index, tags, self.ext)
    }
}

/// Strip the surrounding brackets from the tag group and split on whitespace.
fn split_tags(group: Option<&str>) -> Vec<String> {
    match group {
        Some(s) => s
            .trim_start_matches('[')
            .trim_end_matches(']')
            .split_whitespace()
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    }
}
