use crate::fs::dir_event;
use crate::media::MediaFormat;
use crate::pattern::format_pattern;
use eyre::{Result, eyre};
use std::fs;
use std::path::{Path, PathBuf};

/// Parse `path` as a formatted media file within its parent directory's event.
fn media_for(path: &Path) -> Result<(MediaFormat, PathBuf)> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or_else(|| eyre!("file has no parent directory: {}", path.display()))?;
    let event = dir_event(parent)?;
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| eyre!("file has no usable name: {}", path.display()))?;
    let re = format_pattern(&event)?;
    let caps = re
        .captures(name)
        .ok_or_else(|| eyre!("not a formatted media file: {}", path.display()))?;
    let media = MediaFormat::from_event_captures(&event, &caps)?;
    Ok((media, parent.to_path_buf()))
}

/// Rename the file to match its (edited) record. No-op when the name is
/// already correct. Never overwrites an existing file.
fn apply(path: &Path, parent: &Path, media: &MediaFormat) -> Result<PathBuf> {
    let new_name = media.to_filename();
    let dest = parent.join(&new_name);
    if dest.as_path() == path {
        tracing::debug!(file = %path.display(), "tags unchanged");
        return Ok(dest);
    }
    if dest.exists() {
        return Err(eyre!("refusing to overwrite {}", dest.display()));
    }
    fs::rename(path, &dest)?;
    tracing::info!(from = %path.display(), to = %dest.display(), "retagged");
    Ok(dest)
}

/// Apply tags to a formatted media file, renaming it in place. Tags are
/// trimmed; empty tags and tags already present are skipped. Returns the
/// file's (possibly unchanged) path.
pub fn add_tags<S: AsRef<str>>(path: &Path, tags: &[S]) -> Result<PathBuf> {
    let (mut media, parent) = media_for(path)?;
    for tag in tags {
        let tag = tag.as_ref().trim();
        if tag.is_empty() || media.tags.iter().any(|t| t == tag) {
            continue;
        }
        media.tags.push(tag.to_string());
    }
    apply(path, &parent, &media)
}

/// Remove tags from a formatted media file, renaming it in place. Tags not
/// present are ignored. Returns the file's (possibly unchanged) path.
pub fn remove_tags<S: AsRef<str>>(path: &Path, tags: &[S]) -> Result<PathBuf> {
    let (mut media, parent) = media_for(path)?;
    media
        .tags
        .retain(|t| !tags.iter().any(|r| r.as_ref().trim() == t));
    apply(path, &parent, &media)
}
