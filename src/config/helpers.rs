use std::path::{Path, PathBuf};

use crate::ConfError;

/// Expand a leading `~/` to the home directory.
pub(super) fn resolve_path(path: &Path) -> Result<PathBuf, ConfError> {
    let Some(rest) = path.to_str().and_then(|p| p.strip_prefix("~/")) else {
        return Ok(path.to_path_buf());
    };

    let home = dirs::home_dir().ok_or_else(|| ConfError::FileError {
        message: "Could not determine home directory for ~ expansion".into(),
        path: path.to_string_lossy().to_string(),
        hint: Some("Set HOME or use an absolute path".into()),
        code: Some(300),
    })?;
    Ok(home.join(rest))
}

/// Locate the line assigning the last segment of `path` in the raw config.
///
/// Returns `(line_number, trimmed_line)`, or `(0, "")` when nothing matches.
/// Only the key is matched, so with several devices the first assignment wins.
pub(super) fn find_config_line(path: &str, raw_content: &str) -> (usize, String) {
    let Some(key) = path.rsplit('.').next().filter(|k| !k.is_empty()) else {
        return (0, String::new());
    };

    for (index, line) in raw_content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            continue;
        }
        if let Some((lhs, _)) = trimmed.split_once('=') {
            if lhs.trim() == key {
                return (index + 1, trimmed.to_string());
            }
        }
    }

    (0, String::new())
}
