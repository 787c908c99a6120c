use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Write};

use log::trace;
use thiserror::Error;

use crate::SymbolTable;

/// Left-leaning red-black tree. No deletion.
pub struct RedBlackTree<K: Ord, V> {
    root: Link<K, V>,
    len: usize,
}

type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn tag(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("root is red")]
    RedRoot,
    #[error("keys are out of order")]
    OutOfOrder,
    #[error("red link leans right")]
    RedRightLink,
    #[error("two consecutive red links")]
    ConsecutiveReds,
    #[error("unbalanced black height: left {left}, right {right}")]
    UnbalancedBlacks { left: usize, right: usize },
    #[error("height {height} exceeds {bound} for {len} keys")]
    TooTall {
        height: usize,
        bound: usize,
        len: usize,
    },
    #[error("len is {len} but the tree holds {count} nodes")]
    LenMismatch { len: usize, count: usize },
}

struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }
}

impl<K: Ord, V> RedBlackTree<K, V> {
    fn is_red(node: &Link<K, V>) -> bool {
        node.as_ref().is_some_and(|n| n.color == Color::Red)
    }

    fn rotate_left(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        debug_assert!(Self::is_red(&h.right), "rotate_left requires a red right link");
        let mut x = h.right.take().expect("rotate_left requires right");
        h.right = x.left.take();
        x.color = h.color;
        h.color = Color::Red;
        x.left = Some(h);
        x
    }

    fn rotate_right(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        debug_assert!(Self::is_red(&h.left), "rotate_right requires a red left link");
        let mut x = h.left.take().expect("rotate_right requires left");
        h.left = x.right.take();
        x.color = h.color;
        h.color = Color::Red;
        x.right = Some(h);
        x
    }

    fn flip_colors(h: &mut Node<K, V>) {
        debug_assert!(
            h.color == Color::Black && Self::is_red(&h.left) && Self::is_red(&h.right),
            "flip_colors requires a black node with two red children"
        );
        h.color = Color::Red;
        if let Some(left) = h.left.as_deref_mut() {
            left.color = Color::Black;
        }
        if let Some(right) = h.right.as_deref_mut() {
            right.color = Color::Black;
        }
    }

    // Order matters: each step can set up the next one.
    fn fix_up(mut h: Box<Node<K, V>>) -> Box<Node<K, V>> {
        if Self::is_red(&h.right) && !Self::is_red(&h.left) {
            trace!("llrb: rotate_left");
            h = Self::rotate_left(h);
        }
        if Self::is_red(&h.left) && h.left.as_ref().is_some_and(|l| Self::is_red(&l.left)) {
            trace!("llrb: rotate_right");
            h = Self::rotate_right(h);
        }
        if Self::is_red(&h.left) && Self::is_red(&h.right) {
            trace!("llrb: flip_colors");
            Self::flip_colors(&mut h);
        }
        h
    }

    fn insert_node(h: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
        let Some(mut h) = h else {
            return (Box::new(Node::new(key, value)), None);
        };

        let old = match key.cmp(&h.key) {
            Ordering::Less => {
                let (left, old) = Self::insert_node(h.left.take(), key, value);
                h.left = Some(left);
                old
            }
            Ordering::Greater => {
                let (right, old) = Self::insert_node(h.right.take(), key, value);
                h.right = Some(right);
                old
            }
            Ordering::Equal => {
                let old = std::mem::replace(&mut h.value, value);
                return (h, Some(old));
            }
        };

        (Self::fix_up(h), old)
    }

    pub fn height(&self) -> usize {
        Self::subtree_height(self.root.as_deref())
    }

    fn subtree_height(node: Option<&Node<K, V>>) -> usize {
        node.map_or(0, |n| {
            let left = Self::subtree_height(n.left.as_deref());
            let right = Self::subtree_height(n.right.as_deref());
            1 + left.max(right)
        })
    }

    pub fn black_height(&self) -> usize {
        let mut cur = self.root.as_deref();
        let mut blacks = 0;
        while let Some(node) = cur {
            if node.color == Color::Black {
                blacks += 1;
            }
            cur = node.left.as_deref();
        }
        blacks
    }

    pub fn levels(&self) -> Vec<Vec<(Color, &K)>> {
        let mut levels = Vec::new();
        let mut queue: VecDeque<&Node<K, V>> = self.root.as_deref().into_iter().collect();
        while !queue.is_empty() {
            let mut level = Vec::with_capacity(queue.len());
            for _ in 0..queue.len() {
                let Some(node) = queue.pop_front() else {
                    break;
                };
                level.push((node.color, &node.key));
                queue.extend(node.left.as_deref());
                queue.extend(node.right.as_deref());
            }
            levels.push(level);
        }
        levels
    }

    pub fn print<W: Write>(&self, out: &mut W) -> io::Result<()>
    where
        K: fmt::Display,
    {
        for level in self.levels() {
            for (i, (color, key)) in level.into_iter().enumerate() {
                if i > 0 {
                    out.write_all(b" ")?;
                }
                write!(out, "{color}{key}")?;
            }
            writeln!(out)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), InvariantViolation> {
        if Self::is_red(&self.root) {
            return Err(InvariantViolation::RedRoot);
        }

        let mut count = 0;
        Self::validate_node(self.root.as_deref(), None, None, &mut count)?;
        if count != self.len {
            return Err(InvariantViolation::LenMismatch {
                len: self.len,
                count,
            });
        }

        let height = self.height();
        let bound = 2 * (self.len + 1).ilog2() as usize;
        if height > bound {
            return Err(InvariantViolation::TooTall {
                height,
                bound,
                len: self.len,
            });
        }
        Ok(())
    }

    // Returns the black height of `node`'s subtree.
    fn validate_node(
        node: Option<&Node<K, V>>,
        lower: Option<&K>,
        upper: Option<&K>,
        count: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let Some(node) = node else {
            return Ok(0);
        };
        *count += 1;

        if lower.is_some_and(|lo| node.key <= *lo) || upper.is_some_and(|hi| node.key >= *hi) {
            return Err(InvariantViolation::OutOfOrder);
        }
        if Self::is_red(&node.right) {
            return Err(InvariantViolation::RedRightLink);
        }
        if node.color == Color::Red && Self::is_red(&node.left) {
            return Err(InvariantViolation::ConsecutiveReds);
        }

        let left = Self::validate_node(node.left.as_deref(), lower, Some(&node.key), count)?;
        let right = Self::validate_node(node.right.as_deref(), Some(&node.key), upper, count)?;
        if left != right {
            return Err(InvariantViolation::UnbalancedBlacks { left, right });
        }
        Ok(left + usize::from(node.color == Color::Black))
    }
}

impl<K: Ord, V> SymbolTable for RedBlackTree<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self { root: None, len: 0 }
    }

    fn len(&self) -> usize {
        self.len
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    fn put(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        let (mut root, old) = Self::insert_node(self.root.take(), key, value);
        root.color = Color::Black;
        self.root = Some(root);
        if old.is_none() {
            self.len += 1;
        }
        old
    }
}
