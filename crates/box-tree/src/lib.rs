pub mod errors;
pub mod model;
pub mod namer;
pub mod normalize;

pub use errors::{StructureMismatch, TreeError};
pub use model::BoxTree;
pub use namer::{name_tree, name_tree_with_prefix};
pub use normalize::{flatten, smooth};
