use std::fmt;
use std::io::{self, Write};

use crate::{SymbolTable, SymbolTableRemove};

/// Unordered linked list searched front to back.
///
/// New keys are pushed at the head, so iteration order is most recent first.
pub struct SequentialSearchTable<K: Eq, V> {
    head: Link<K, V>,
    len: usize,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

struct Node<K, V> {
    key: K,
    value: V,
    next: Link<K, V>,
}

impl<K: Eq, V> SequentialSearchTable<K, V> {
    fn find_mut(&mut self, key: &K) -> Option<&mut Node<K, V>> {
        let mut cur = self.head.as_deref_mut();
        while let Some(node) = cur {
            if node.key == *key {
                return Some(node);
            }
            cur = node.next.as_deref_mut();
        }
        None
    }

    /// Writes `[len] k v -> k v ...` on a single line.
    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        write!(out, "[{}] ", self.len)?;
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            write!(out, "{} {}", node.key, node.value)?;
            if node.next.is_some() {
                out.write_all(b" -> ")?;
            }
            cur = node.next.as_deref();
        }
        writeln!(out)
    }
}

impl<K: Eq, V> SymbolTable for SequentialSearchTable<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self { head: None, len: 0 }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        let mut cur = self.head.as_deref();
        while let Some(node) = cur {
            if node.key == *key {
                return Some(&node.value);
            }
            cur = node.next.as_deref();
        }
        None
    }

    fn put(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        if let Some(node) = self.find_mut(&key) {
            return Some(std::mem::replace(&mut node.value, value));
        }
        let next = self.head.take();
        self.head = Some(Box::new(Node { key, value, next }));
        self.len += 1;
        None
    }
}

impl<K: Eq, V> SymbolTableRemove for SequentialSearchTable<K, V> {
    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        let mut link = &mut self.head;
        loop {
            match link {
                None => return None,
                Some(node) if node.key == *key => {
                    let next = node.next.take();
                    let removed = std::mem::replace(link, next);
                    self.len -= 1;
                    return removed.map(|node| node.value);
                }
                Some(node) => link = &mut node.next,
            }
        }
    }
}

impl<K: Eq, V> Drop for SequentialSearchTable<K, V> {
    // Unlink one node at a time; the default recursive drop can overflow the
    // stack on long lists.
    fn drop(&mut self) {
        let mut cur = self.head.take();
        while let Some(mut node) = cur {
            cur = node.next.take();
        }
    }
}
