//! Title enumeration from a local paper directory.

use std::io;
use std::path::Path;

use tracing::warn;
use walkdir::WalkDir;

/// Collect candidate paper titles from every regular file under `root`.
///
/// Titles are derived by stripping the last four characters of the file name,
/// i.e. a dot plus a three-character extension. Longer extensions (`.jpeg`)
/// leave part of the suffix in the title; that case is logged rather than
/// corrected because downstream title matching relies on how the files were
/// named. Names too short to strip are skipped. Duplicate titles pass
/// through unchanged.
///
/// Files are visited in a deterministic order (sorted by name per directory).
pub fn collect_titles(root: &Path) -> io::Result<Vec<String>> {
    let mut titles = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();

        let ext_len = Path::new(&name)
            .extension()
            .map(|e| e.to_string_lossy().chars().count());
        if ext_len != Some(3) {
            warn!(
                file = %name,
                "file name does not end in a three-character extension; \
                 derived title may retain part of the suffix"
            );
        }

        // Byte offset of the fourth character from the end, so the strip is
        // safe for multi-byte titles.
        match name.char_indices().rev().nth(3) {
            Some((idx, _)) if idx > 0 => titles.push(name[..idx].to_string()),
            _ => warn!(file = %name, "file name too short to derive a title, skipping"),
        }
    }

    Ok(titles)
}
