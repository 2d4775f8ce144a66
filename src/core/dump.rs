use crate::core::{Selection, rel_display};
use std::{fs, path::Path};

/* ============================= Dump assembly ============================== */

const SEPARATOR: &str = "---\n";

/// Concatenate the checked files into one text, in ascending path order.
///
/// Each file contributes its project-relative path line, a separator, its
/// contents, and a trailing separator followed by a blank line. Paths that
/// vanished since the tree was built are skipped; files that fail to read
/// contribute a bracketed error message in place of their contents.
#[must_use]
pub fn build_dump(base: &Path, selection: &Selection) -> String {
    let mut out = String::new();

    for path in selection.sorted_paths() {
        if !path.exists() {
            continue;
        }

        out.push_str(&rel_display(base, &path));
        out.push('\n');
        out.push_str(SEPARATOR);

        match fs::read_to_string(&path) {
            Ok(contents) => out.push_str(&contents),
            Err(e) => out.push_str(&format!("[Error reading file: {e}]")),
        }

        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }

    out
}
