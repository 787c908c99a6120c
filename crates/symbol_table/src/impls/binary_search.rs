use std::fmt;
use std::io::{self, Write};

use crate::{OrderedSymbolTable, SymbolTable, SymbolTableRemove};

/// Sorted array of entries searched by bisection.
///
/// Lookups are `O(log n)`; inserts and removals shift the tail, `O(n)`.
pub struct BinarySearchTable<K: Ord, V> {
    data: Vec<(K, V)>,
}

impl<K: Ord, V> BinarySearchTable<K, V> {
    fn position(&self, key: &K) -> Result<usize, usize> {
        self.data.binary_search_by(|(k, _)| k.cmp(key))
    }

    fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.data.iter().map(|(k, v)| (k, v))
    }

    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        write!(out, "[{}] ", self.data.len())?;
        for (i, (k, v)) in self.iter().enumerate() {
            if i > 0 {
                out.write_all(b" - ")?;
            }
            write!(out, "{k} {v}")?;
        }
        writeln!(out)
    }
}

impl<K: Ord, V> SymbolTable for BinarySearchTable<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        let idx = self.position(key).ok()?;
        self.data.get(idx).map(|(_, v)| v)
    }

    fn put(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        match self.position(&key) {
            Ok(idx) => Some(std::mem::replace(&mut self.data[idx].1, value)),
            Err(idx) => {
                self.data.insert(idx, (key, value));
                None
            }
        }
    }
}

impl<K: Ord, V> SymbolTableRemove for BinarySearchTable<K, V> {
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        let idx = self.position(key).ok()?;
        Some(self.data.remove(idx).1)
    }
}

impl<K: Ord, V> OrderedSymbolTable for BinarySearchTable<K, V> {
    fn min(&self) -> Option<&Self::Key> {
        self.data.first().map(|(k, _)| k)
    }

    fn max(&self) -> Option<&Self::Key> {
        self.data.last().map(|(k, _)| k)
    }

    fn rank(&self, key: &Self::Key) -> usize {
        self.data.partition_point(|(k, _)| k < key)
    }

    fn select(&self, rank: usize) -> Option<&Self::Key> {
        self.data.get(rank).map(|(k, _)| k)
    }

    fn ceiling(&self, key: &Self::Key) -> Option<&Self::Key> {
        self.select(self.rank(key))
    }

    fn floor(&self, key: &Self::Key) -> Option<&Self::Key> {
        let idx = self.data.partition_point(|(k, _)| k <= key);
        self.select(idx.checked_sub(1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::BinarySearchTable;
    use crate::{OrderedSymbolTable, SymbolTable, SymbolTableRemove};

    fn fruit_table() -> BinarySearchTable<i32, &'static str> {
        let mut table = BinarySearchTable::new();
        table.put(7, "date");
        table.put(5, "cherry");
        table.put(3, "banana");
        table.put(1, "apple");
        table
    }

    fn dump(table: &BinarySearchTable<i32, &str>) -> String {
        let mut out = Vec::new();
        table.print(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn fruit_scenario() {
        let mut table = fruit_table();
        assert_eq!(dump(&table), "[4] 1 apple - 3 banana - 5 cherry - 7 date\n");
        assert_eq!(table.min(), Some(&1));
        assert_eq!(table.max(), Some(&7));
        assert_eq!(table.select(2), Some(&5));
        assert_eq!(table.ceiling(&6), Some(&7));
        assert_eq!(table.floor(&6), Some(&5));
        assert!(table.contains(&3));
        assert!(!table.contains(&4));

        assert_eq!(table.remove(&3), Some("banana"));
        assert_eq!(dump(&table), "[3] 1 apple - 5 cherry - 7 date\n");
    }

    #[test]
    fn rank_counts_smaller_keys() {
        let table = fruit_table();
        assert_eq!(table.rank(&0), 0);
        assert_eq!(table.rank(&1), 0);
        assert_eq!(table.rank(&2), 1);
        assert_eq!(table.rank(&7), 3);
        assert_eq!(table.rank(&8), 4);
    }

    #[test]
    fn floor_and_ceiling_hit_exact_keys() {
        let table = fruit_table();
        assert_eq!(table.floor(&5), Some(&5));
        assert_eq!(table.ceiling(&5), Some(&5));
        assert_eq!(table.floor(&0), None);
        assert_eq!(table.ceiling(&8), None);
        assert_eq!(table.floor(&100), Some(&7));
        assert_eq!(table.ceiling(&-100), Some(&1));
    }

    #[test]
    fn empty_table_queries() {
        let mut table = BinarySearchTable::<i32, &str>::new();
        assert_eq!(table.min(), None);
        assert_eq!(table.max(), None);
        assert_eq!(table.select(0), None);
        assert_eq!(table.floor(&0), None);
        assert_eq!(table.ceiling(&0), None);
        assert_eq!(table.remove(&0), None);
        assert_eq!(dump(&table), "[0] \n");
    }

    #[test]
    fn iter_is_sorted() {
        let table = fruit_table();
        let keys: Vec<i32> = table.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec![1, 3, 5, 7]);
    }
}
