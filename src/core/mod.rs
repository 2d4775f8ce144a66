use std::path::PathBuf;

/// UI-free representation of a filesystem node.
#[derive(Clone, Debug)]
pub struct Node {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub children: Vec<Node>,
    pub expanded: bool,
    pub has_children: bool,
}

mod dump;
mod filter;
mod fs;
mod select;

pub use dump::*;
pub use filter::*;
pub use fs::*;
pub use select::*;
