mod binary_search;
mod red_black;
mod sequential_search;

pub use binary_search::BinarySearchTable;
pub use red_black::{Color, InvariantViolation, RedBlackTree};
pub use sequential_search::SequentialSearchTable;
