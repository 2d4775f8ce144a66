use pretty_assertions::assert_eq;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use projdump::core::{Node, gather_file_paths, scan_dir_to_node, toggle_node_expanded};

fn mkfile(p: &Path) {
    fs::create_dir_all(p.parent().unwrap()).unwrap();
    fs::write(p, "x").unwrap();
}

fn exts(list: &[&str]) -> HashSet<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn leaf_names(node: &Node) -> Vec<String> {
    let mut out = Vec::new();
    fn walk(n: &Node, out: &mut Vec<String>) {
        if !n.is_dir {
            out.push(n.name.clone());
        }
        for c in &n.children {
            walk(c, out);
        }
    }
    walk(node, &mut out);
    out.sort();
    out
}

#[test]
fn only_recognized_extensions_become_leaves() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    mkfile(&root.join("a.py"));
    mkfile(&root.join("b.json"));
    mkfile(&root.join("c.ino"));
    mkfile(&root.join("d.txt"));
    mkfile(&root.join("sub/e.rs"));
    mkfile(&root.join("sub/f.py"));

    let tree = scan_dir_to_node(root, &exts(&[".py", ".json", ".ino"]), None);

    assert_eq!(leaf_names(&tree), vec!["a.py", "b.json", "c.ino", "f.py"]);
}

#[test]
fn own_executable_name_is_filtered_out() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    mkfile(&root.join("copier.py"));
    mkfile(&root.join("other.py"));
    mkfile(&root.join("sub/copier.py"));

    let tree = scan_dir_to_node(root, &exts(&[".py"]), Some("copier.py"));

    // The basename is excluded everywhere, not just at the root.
    assert_eq!(leaf_names(&tree), vec!["other.py"]);
}

#[test]
fn children_order_is_files_then_dirs_sorted() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    mkfile(&root.join("b.py"));
    mkfile(&root.join("a.py"));
    mkfile(&root.join("bbb/x.py"));
    mkfile(&root.join("aaa/y.py"));

    let tree = scan_dir_to_node(root, &exts(&[".py"]), None);
    let names: Vec<_> = tree.children.iter().map(|n| n.name.as_str()).collect();

    assert_eq!(names, vec!["a.py", "b.py", "aaa", "bbb"]);
}

#[test]
fn directories_without_matching_files_are_hidden() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    mkfile(&root.join("keep/a.py"));
    mkfile(&root.join("noise/readme.txt"));
    fs::create_dir_all(root.join("empty")).unwrap();

    let tree = scan_dir_to_node(root, &exts(&[".py"]), None);
    let names: Vec<_> = tree.children.iter().map(|n| n.name.as_str()).collect();

    assert_eq!(names, vec!["keep"]);
}

#[test]
fn root_starts_expanded_and_subdirs_collapsed() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    mkfile(&root.join("sub/a.py"));

    let tree = scan_dir_to_node(root, &exts(&[".py"]), None);
    assert!(tree.expanded);

    let sub = tree.children.iter().find(|n| n.is_dir).unwrap();
    assert!(!sub.expanded);
}

#[test]
fn toggle_expand_flips_dirs_and_ignores_files() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    mkfile(&root.join("sub/a.py"));

    let mut tree = scan_dir_to_node(root, &exts(&[".py"]), None);
    let sub_path = root.join("sub");
    let file_path = root.join("sub").join("a.py");

    assert!(toggle_node_expanded(&mut tree, &sub_path));
    assert!(tree.children[0].expanded);
    assert!(toggle_node_expanded(&mut tree, &sub_path));
    assert!(!tree.children[0].expanded);

    assert!(!toggle_node_expanded(&mut tree, &file_path));
}

#[test]
fn gather_file_paths_collects_leaves_only() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    mkfile(&root.join("a.py"));
    mkfile(&root.join("sub/b.py"));

    let tree = scan_dir_to_node(root, &exts(&[".py"]), None);
    let paths = gather_file_paths(&tree);

    assert_eq!(paths.len(), 2);
    assert!(paths.contains(&root.join("a.py")));
    assert!(paths.contains(&root.join("sub").join("b.py")));
    assert!(!paths.contains(&root.join("sub")));
}

#[cfg(unix)]
#[test]
fn scan_survives_permission_denied_directories() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    let restricted = root.join("restricted");
    fs::create_dir(&restricted).unwrap();
    let mut perms = fs::metadata(&restricted).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&restricted, perms).unwrap();

    mkfile(&root.join("normal.py"));

    // Must not panic or hang; the normal file is still found.
    let tree = scan_dir_to_node(root, &exts(&[".py"]), None);
    assert!(leaf_names(&tree).contains(&"normal.py".to_string()));

    // Restore permissions so tempdir cleanup works.
    let mut perms = fs::metadata(&restricted).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&restricted, perms).unwrap();
}
