pub mod builder;
#[allow(clippy::module_inception)]
mod tree;

pub use builder::TreeBuilder;
pub use tree::{MODE_EXECUTABLE, MODE_FILE, MODE_SYMLINK, MODE_TREE, Tree, TreeEntry};
