use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

/* ============================= Selection state ============================= */

/// The set of checked file paths, scoped to one running window.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    checked: HashSet<PathBuf>,
}

impl Selection {
    #[must_use]
    pub fn is_checked(&self, path: &Path) -> bool {
        self.checked.contains(path)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    /// Flip one path; returns the new checked state.
    pub fn toggle(&mut self, path: &Path) -> bool {
        if self.checked.remove(path) {
            false
        } else {
            self.checked.insert(path.to_path_buf());
            true
        }
    }

    pub fn check_all<I>(&mut self, paths: I)
    where
        I: IntoIterator<Item = PathBuf>,
    {
        self.checked.extend(paths);
    }

    pub fn clear(&mut self) {
        self.checked.clear();
    }

    /// Drop checked paths that are no longer present in a fresh scan; paths
    /// that still exist keep their state.
    pub fn reconcile(&mut self, live: &HashSet<PathBuf>) {
        self.checked.retain(|p| live.contains(p));
    }

    /// Checked paths in ascending path order, the order the dump uses.
    #[must_use]
    pub fn sorted_paths(&self) -> Vec<PathBuf> {
        let mut paths: Vec<PathBuf> = self.checked.iter().cloned().collect();
        paths.sort();
        paths
    }
}
