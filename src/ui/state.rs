use std::{cell::RefCell, collections::HashSet, path::PathBuf, rc::Rc};

use projdump::core::{Node, Selection};

#[derive(Default)]
pub struct AppState {
    /// Canonicalized working directory the tree is rooted at.
    pub base_dir: PathBuf,
    /// Basename of our own executable, filtered out of the tree.
    pub self_name: Option<String>,
    pub exts: HashSet<String>,
    pub root_node: Option<Node>,
    pub selection: Selection,
    /// Untruncated dump text; the output view may show less.
    pub full_output_text: String,
    pub copy_toast_timer: slint::Timer,
}

pub type SharedState = Rc<RefCell<AppState>>;
