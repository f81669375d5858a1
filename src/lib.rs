pub mod binary_search_tree;
pub mod cursor;
pub mod data_gen;
pub mod error;
pub mod traversal;

pub use binary_search_tree::{NodeId, NodeRef, Side, Tree};
pub use cursor::Cursor;
pub use error::DuplicateValueError;
pub use traversal::{InOrder, PreOrder, ReverseOrder};
