use crate::media::MediaFormat;
use crate::name::sanitize_name;
use crate::pattern::format_pattern;
use eyre::{Result, eyre};
use std::fs;
use std::path::{Path, PathBuf};

/// Event name for a directory: its base name.
pub fn dir_event(dir: &Path) -> Result<String> {
    let name = dir
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| eyre!("directory has no usable name: {}", dir.display()))?;
    Ok(name.to_string())
}

/// Highest index currently in use by formatted files for `event` in `dir`.
/// Returns 0 when no formatted file exists yet.
pub fn max_index(dir: &Path, event: &str) -> Result<u64> {
    let re = format_pattern(event)?;
    let mut max = 0;
    for entry in fs::read_dir(dir)? {
        let e = entry?;
        if let Some(name) = e.file_name().to_str()
            && let Some(caps) = re.captures(name)
        {
            let n: u64 = caps[1].parse()?;
            max = max.max(n);
            tracing::trace!(file = name, index = n);
        }
    }
    tracing::debug!(event = event, max = max, "scanned event directory");
    Ok(max)
}

/// Rename regular files in `dir` that do not yet follow the `event` naming
/// convention, assigning each the next free index. Files already formatted
/// are left alone, as are files whose new name would itself not parse (odd
/// extensions). The event is sanitized first so the new names stay within
/// the allowed character set. Never overwrites. Returns the (old, new)
/// pairs renamed.
pub fn rename_into_event(dir: &Path, event: &str) -> Result<Vec<(PathBuf, PathBuf)>> {
    let event = &sanitize_name(event);
    let re = format_pattern(event)?;
    let mut next = max_index(dir, event)? + 1;
    let mut renamed = Vec::new();

    let mut entries: Vec<_> = fs::read_dir(dir)?.filter_map(|r| r.ok()).collect();
    entries.sort_by_key(|e| e.path());

    for entry in entries {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if re.is_match(name) {
            continue;
        }
        let Some(ext) = path.extension().and_then(|s| s.to_str()) else {
            tracing::warn!(file = name, "no extension; skipping");
            continue;
        };

        let media = MediaFormat {
            event: event.to_string(),
            index: next,
            tags: Vec::new(),
            ext: ext.to_string(),
        };
        let new_name = media.to_filename();
        if !re.is_match(&new_name) {
            tracing::warn!(file = name, "extension outside convention; skipping");
            continue;
        }

        let dest = dir.join(&new_name);
        if dest.exists() {
            return Err(eyre!("refusing to overwrite {}", dest.display()));
        }
        fs::rename(&path, &dest)?;
        tracing::info!(from = %path.display(), to = %dest.display(), "renamed");
        renamed.push((path, dest));
        next += 1;
    }

    if renamed.is_empty() {
        tracing::info!(event = %event, "nothing to rename");
    }
    Ok(renamed)
}
