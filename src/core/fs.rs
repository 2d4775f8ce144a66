use crate::core::{Node, path_matches_extensions};
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

type NamePath = (String, PathBuf);

/* =========================== Filesystem & paths ============================ */

#[must_use]
pub fn path_to_unix(p: &Path) -> String {
    let mut s = String::new();
    let mut first = true;

    for comp in p {
        if !first {
            s.push('/');
        }
        first = false;
        s.push_str(&comp.to_string_lossy());
    }

    s
}

/// Project root for this run: the canonicalized working directory.
#[must_use]
pub fn project_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    dunce::canonicalize(&cwd).unwrap_or(cwd)
}

/// Basename of the running executable, used to keep the tool itself out of
/// its own tree.
#[must_use]
pub fn current_exe_name() -> Option<String> {
    std::env::current_exe()
        .ok()?
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
}

/// Project-relative display path with forward slashes. Falls back to the
/// basename if `path` is not under `base`.
#[must_use]
pub fn rel_display(base: &Path, path: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) if !rel.as_os_str().is_empty() => path_to_unix(rel),
        _ => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Recursively scan `dir` into a `Node` tree.
///
/// A file becomes a leaf iff it matches the extension set and its basename is
/// not `self_name`. Directories with no matching files anywhere beneath them
/// are dropped. Unreadable directories yield an empty node rather than an
/// error.
#[must_use]
pub fn scan_dir_to_node<S: ::std::hash::BuildHasher>(
    dir: &Path,
    exts: &HashSet<String, S>,
    self_name: Option<&str>,
) -> Node {
    let mut root = scan_rec(dir, exts, self_name);
    root.expanded = true;
    root
}

fn scan_rec<S: ::std::hash::BuildHasher>(
    dir: &Path,
    exts: &HashSet<String, S>,
    self_name: Option<&str>,
) -> Node {
    let name = dir
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    let mut node = Node {
        name,
        path: dir.to_path_buf(),
        is_dir: true,
        children: Vec::new(),
        // Subdirectories start collapsed; the caller opens the root.
        expanded: false,
        has_children: false,
    };

    let (mut files, mut dirs) = gather_dir_entries(dir, exts, self_name);

    // Per-directory deterministic ordering: files by name, then dirs by name.
    files.sort_by(|a, b| a.0.cmp(&b.0));
    dirs.sort_by(|a, b| a.0.cmp(&b.0));

    node.children.reserve(files.len() + dirs.len());

    for (basename, path) in files {
        node.has_children = true;
        node.children.push(Node {
            name: basename,
            path,
            is_dir: false,
            children: Vec::new(),
            expanded: false,
            has_children: false,
        });
    }

    for (_basename, path) in dirs {
        let child = scan_rec(&path, exts, self_name);

        // Hide directories that contain no selectable files.
        if !child.children.is_empty() || child.has_children {
            node.has_children = true;
            node.children.push(child);
        }
    }

    node
}

fn gather_dir_entries<S: ::std::hash::BuildHasher>(
    dir: &Path,
    exts: &HashSet<String, S>,
    self_name: Option<&str>,
) -> (Vec<NamePath>, Vec<NamePath>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return (Vec::new(), Vec::new());
    };

    let mut files: Vec<NamePath> = Vec::new();
    let mut dirs: Vec<NamePath> = Vec::new();

    for ent in entries.flatten() {
        let path = ent.path();
        let base: String = ent.file_name().to_string_lossy().into_owned();

        let is_dir = ent.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        if is_dir {
            dirs.push((base, path));
            continue;
        }

        if self_name.is_some_and(|me| me == base) {
            continue;
        }

        if path_matches_extensions(&path, exts) {
            files.push((base, path));
        }
    }

    (files, dirs)
}

/// Every selectable file leaf in the tree.
#[must_use]
pub fn gather_file_paths(root: &Node) -> HashSet<PathBuf> {
    let mut set = HashSet::new();
    gather_file_paths_rec(root, &mut set);
    set
}

fn gather_file_paths_rec(n: &Node, set: &mut HashSet<PathBuf>) {
    if !n.is_dir {
        set.insert(n.path.clone());
    }
    for c in &n.children {
        gather_file_paths_rec(c, set);
    }
}

/// Flip the expanded flag of the directory node at `target`. Returns whether
/// anything changed.
pub fn toggle_node_expanded(root: &mut Node, target: &Path) -> bool {
    if root.path == target {
        if root.is_dir {
            root.expanded = !root.expanded;
            return true;
        }
        return false;
    }
    for c in &mut root.children {
        if toggle_node_expanded(c, target) {
            return true;
        }
    }
    false
}
