pub mod impls;

/// Symbol table interface.
///
/// - Keys are unique.
/// - `put` overwrites the existing value and returns the old one.
/// - `get` never restructures the table.
pub trait SymbolTable {
    type Key;
    type Value;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn put(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn contains(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }
}

pub trait SymbolTableRemove: SymbolTable {
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;
}

/// Rank-based queries over a table whose keys are kept in sorted order.
///
/// `rank(key)` is the number of keys strictly less than `key`, so
/// `select(rank(key))` is the ceiling of `key`.
pub trait OrderedSymbolTable: SymbolTable {
    fn min(&self) -> Option<&Self::Key>;
    fn max(&self) -> Option<&Self::Key>;
    fn rank(&self, key: &Self::Key) -> usize;
    fn select(&self, rank: usize) -> Option<&Self::Key>;
    fn ceiling(&self, key: &Self::Key) -> Option<&Self::Key>;
    fn floor(&self, key: &Self::Key) -> Option<&Self::Key>;
}

pub use impls::{BinarySearchTable, Color, InvariantViolation, RedBlackTree, SequentialSearchTable};
