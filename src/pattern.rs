use crate::consts::FORMAT_SUFFIX;
use eyre::{Result, eyre};
use regex::Regex;

/// Resolve the event name, falling back to the working directory's base name
/// when none is given. An empty literal segment is never compiled in.
fn resolve_event(event: &str) -> Result<String> {
    if !event.is_empty() {
        return Ok(event.to_string());
    }
    let cwd = std::env::current_dir()?;
    let name = cwd
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| eyre!("working directory has no usable name"))?;
    tracing::debug!(event = name, "no event given; using working directory");
    Ok(name.to_string())
}

/// Compile the matcher for a known event, e.g. `event_009[tag some-tag].jpg`.
/// The event name is matched literally (regex metacharacters escaped) and not
/// captured. Groups: 1 index, 2 bracketed tags, 3 extension. Anchored to the
/// full string.
pub fn format_pattern(event: &str) -> Result<Regex> {
    let event = resolve_event(event)?;
    let re = Regex::new(&format!("^{}{}", regex::escape(&event), FORMAT_SUFFIX))?;
    Ok(re)
}

/// Like [`format_pattern`], but additionally captures the event name itself,
/// for pulling the event back out of a filename. Groups: 1 event, 2 index,
/// 3 bracketed tags, 4 extension.
pub fn capture_pattern(event: &str) -> Result<Regex> {
    let event = resolve_event(event)?;
    let re = Regex::new(&format!("^({}){}", regex::escape(&event), FORMAT_SUFFIX))?;
    Ok(re)
}
