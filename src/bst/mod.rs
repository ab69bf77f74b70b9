use crate::error::{Error, Result};
use crate::set::SequentialSet;
use std::{cmp::Ordering, fmt::Debug};

/// Unbalanced binary search tree.
///
/// The shape depends only on insertion order, so sorted input degrades the
/// tree into a chain. Every walk here is iterative for that reason: recursion
/// over a chain of a few thousand nodes would exhaust the stack.
pub struct BST<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
}

impl<T: Debug> Debug for BST<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BST")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

#[derive(Debug)]
struct Node<T> {
    item: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn new(item: T) -> Node<T> {
        Node {
            item,
            left: None,
            right: None,
        }
    }
}

impl<T: Ord> BST<T> {
    /// same as `contains`, under the name the experiment reports use
    pub fn search(&self, item: &T) -> bool {
        self.contains(item)
    }

    /// iterate the stored items in ascending order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }
}

impl<T: Ord> SequentialSet<T> for BST<T> {
    fn new() -> Self {
        BST { root: None, len: 0 }
    }

    fn insert(&mut self, item: T) -> std::result::Result<(), T> {
        let mut link = &mut self.root;

        while let Some(node) = link {
            link = match item.cmp(&node.item) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return Err(item),
            };
        }

        *link = Some(Box::new(Node::new(item)));
        self.len += 1;

        Ok(())
    }

    fn lookup(&self, item: &T) -> Option<&T> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match item.cmp(&node.item) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.item),
            };
        }

        None
    }

    fn len(&self) -> usize {
        self.len
    }

    fn get_height(&self) -> usize {
        let mut height = 0;
        let mut stack = Vec::new();

        if let Some(root) = self.root.as_deref() {
            stack.push((root, 1));
        }

        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);

            for child in [node.left.as_deref(), node.right.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }

        height
    }

    fn validate(&self) -> Result<()> {
        // in-order traversal of a valid BST is strictly increasing
        let mut count = 0;
        let mut prev: Option<&T> = None;

        for item in self.iter() {
            if let Some(prev) = prev {
                if prev >= item {
                    return Err(Error::InvariantViolation(format!(
                        "BST in-order sequence is not strictly increasing at position {}",
                        count
                    )));
                }
            }

            prev = Some(item);
            count += 1;
        }

        if count != self.len {
            return Err(Error::InvariantViolation(format!(
                "BST holds {} nodes but counts {}",
                count, self.len
            )));
        }

        Ok(())
    }
}

impl<T> Drop for BST<T> {
    fn drop(&mut self) {
        // unlink nodes one by one, since dropping a long chain recursively
        // overflows the stack
        let mut stack = Vec::new();
        stack.extend(self.root.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

/// In-order iterator over a BST.
pub struct Iter<'t, T> {
    stack: Vec<&'t Node<T>>,
}

impl<'t, T> Iter<'t, T> {
    fn new(root: Option<&'t Node<T>>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'t Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'t, T> Iterator for Iter<'t, T> {
    type Item = &'t T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());

        Some(&node.item)
    }
}
