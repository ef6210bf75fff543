//! Output file naming and atomic writes.
//!
//! Images are saved as `<dir>/<name>.<ext>`, using the original (not encoded)
//! name. Writes go to a temp file in the same directory and are renamed over
//! the destination, so a collision between two names is last-writer-wins and
//! readers never see a half-written image.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Stem used when a name sanitizes to nothing usable.
const FALLBACK_STEM: &str = "unnamed";

/// Makes `name` usable as a single path component.
///
/// - Replaces NUL, `/`, `\` and control characters with `_`
/// - Limits length to 255 bytes minus room for the extension
/// - Keeps spaces and non-ASCII letters as-is
pub fn sanitize_stem(name: &str, ext_len: usize) -> String {
    const NAME_MAX: usize = 255;

    let cleaned: String = name
        .chars()
        .map(|c| {
            if c == '\0' || c == '/' || c == '\\' || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect();
    let trimmed = cleaned.trim();

    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return FALLBACK_STEM.to_string();
    }

    let max = NAME_MAX.saturating_sub(ext_len + 1);
    if trimmed.len() > max {
        let mut take = max;
        while take > 0 && !trimmed.is_char_boundary(take) {
            take -= 1;
        }
        trimmed[..take].to_string()
    } else {
        trimmed.to_string()
    }
}

/// Destination for `name`'s image: `<dir>/<sanitized name>.<ext>`.
pub fn image_path(dir: &Path, name: &str, ext: &str) -> PathBuf {
    let ext = ext.trim_start_matches('.');
    dir.join(format!("{}.{}", sanitize_stem(name, ext.len()), ext))
}

/// Writes `bytes` to `path` via a sibling temp file and an atomic rename.
/// Replaces any existing file at `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".mug-")
        .suffix(".part")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
