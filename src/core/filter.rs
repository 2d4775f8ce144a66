use std::{collections::HashSet, path::Path};

/* ============================ Extension filter ============================= */

/// Startup value for the extension filter box.
pub const DEFAULT_EXT_FILTER: &str = ".py, .json, .ino";

/// Parse a comma-separated extension list into a normalized set.
///
/// Tokens are accepted with or without a leading dot and are lowered to
/// `.ext` form; a multi-dot token keeps only its last extension. Empty and
/// dot-only tokens are dropped.
#[must_use]
pub fn parse_extension_list(raw: &str) -> HashSet<String> {
    let mut exts = HashSet::new();

    for token in raw.split(',') {
        let tok = token.trim();
        if tok.is_empty() {
            continue;
        }

        let stripped = tok.trim_start_matches('.');
        if stripped.is_empty() {
            continue; // skip ".", "..", etc.
        }

        // Matching sees only a file's last extension, so ".tar.gz"
        // reduces to ".gz".
        let last = stripped.rsplit('.').next().unwrap_or(stripped);
        if last.is_empty() {
            continue; // trailing dot, e.g. "a."
        }

        exts.insert(format!(".{}", last.to_lowercase()));
    }

    exts
}

/// Case-insensitive match of a path's last extension against the filter set.
///
/// An empty set matches every file, so a blank filter box shows the whole
/// project.
#[must_use]
pub fn path_matches_extensions<S: ::std::hash::BuildHasher>(
    p: &Path,
    exts: &HashSet<String, S>,
) -> bool {
    if exts.is_empty() {
        return true;
    }

    let Some(ext) = p.extension() else {
        return false;
    };

    match ext.to_str() {
        Some(s) if s.is_ascii() => {
            // ASCII-fast path, avoids Unicode-lowering allocs for common cases.
            let mut dotted = String::with_capacity(s.len() + 1);
            dotted.push('.');
            for b in s.bytes() {
                let lb = if b.is_ascii_uppercase() { b + 32 } else { b };
                dotted.push(lb as char);
            }
            exts.contains(&dotted)
        }
        Some(s) => exts.contains(&format!(".{}", s.to_lowercase())),
        None => {
            let lower = ext.to_string_lossy().to_lowercase();
            exts.contains(&format!(".{lower}"))
        }
    }
}
