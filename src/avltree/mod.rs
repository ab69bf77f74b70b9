use crate::error::{Error, Result};
use crate::set::SequentialSet;
use std::{cmp::max, cmp::Ordering, fmt::Debug};

/// Height-balanced binary search tree.
///
/// After every insertion each node's subtree heights differ by at most one,
/// which bounds the height by about 1.44 * log2(n + 2).
pub struct AVLTree<T> {
    root: Option<Box<Node<T>>>,
    len: usize,
    rotations: usize,
}

impl<T: Debug> Debug for AVLTree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AVLTree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}

#[derive(Debug)]
struct Node<T> {
    item: T,
    height: isize,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

fn height<T>(node: &Option<Box<Node<T>>>) -> isize {
    node.as_ref().map_or(0, |node| node.height)
}

impl<T> Node<T> {
    fn new(item: T) -> Node<T> {
        Node {
            item,
            height: 1,
            left: None,
            right: None,
        }
    }

    /// renew the height of the node from the childs
    fn renew_height(&mut self) {
        self.height = max(height(&self.left), height(&self.right)) + 1;
    }

    /// get difference of the heights from the childs
    fn get_factor(&self) -> isize {
        height(&self.left) - height(&self.right)
    }

    /// rotate left the node
    ///
    /// Change Parent-Right Child to Left Child-Parent, then return new parent(old right child).
    /// Both heights are renewed. A node without right child is returned as is.
    fn rotate_left(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_parent = match node.right.take() {
            Some(right) => right,
            None => return node,
        };

        node.right = new_parent.left.take();
        node.renew_height();
        new_parent.left = Some(node);
        new_parent.renew_height();

        new_parent
    }

    /// rotate right the node
    ///
    /// Change Left Child-Parent to Parent-Right Child, then return new parent(old left child).
    /// Both heights are renewed. A node without left child is returned as is.
    fn rotate_right(mut node: Box<Node<T>>) -> Box<Node<T>> {
        let mut new_parent = match node.left.take() {
            Some(left) => left,
            None => return node,
        };

        node.left = new_parent.right.take();
        node.renew_height();
        new_parent.right = Some(node);
        new_parent.renew_height();

        new_parent
    }
}

impl<T: Ord> AVLTree<T> {
    /// insert below the link, then rebalance every node on the way back up
    fn insert_at(
        link: &mut Option<Box<Node<T>>>,
        item: T,
        rotations: &mut usize,
    ) -> std::result::Result<(), T> {
        let node = match link.as_mut() {
            Some(node) => node,
            None => {
                *link = Some(Box::new(Node::new(item)));
                return Ok(());
            }
        };

        match item.cmp(&node.item) {
            Ordering::Less => Self::insert_at(&mut node.left, item, rotations)?,
            Ordering::Greater => Self::insert_at(&mut node.right, item, rotations)?,
            Ordering::Equal => return Err(item),
        }

        if let Some(node) = link.take() {
            *link = Some(Self::rebalance(node, rotations));
        }

        Ok(())
    }

    /// rebalance the node by the rule of AVL, then return the new root of the subtree
    ///
    /// factor  2: left-left is a right rotation, left-right rotates the child left first.
    /// factor -2: right-right is a left rotation, right-left rotates the child right first.
    fn rebalance(mut node: Box<Node<T>>, rotations: &mut usize) -> Box<Node<T>> {
        node.renew_height();

        match node.get_factor() {
            2 => {
                if node.left.as_ref().map_or(0, |left| left.get_factor()) < 0 {
                    node.left = node.left.take().map(Node::rotate_left);
                    *rotations += 1;
                }

                *rotations += 1;
                Node::rotate_right(node)
            }
            -2 => {
                if node.right.as_ref().map_or(0, |right| right.get_factor()) > 0 {
                    node.right = node.right.take().map(Node::rotate_right);
                    *rotations += 1;
                }

                *rotations += 1;
                Node::rotate_left(node)
            }
            _ => node,
        }
    }

    /// number of single rotations done so far (a double rotation counts two)
    pub fn rotations(&self) -> usize {
        self.rotations
    }

    /// iterate the stored items in ascending order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// check the subtree, then return its (height, node count)
    fn check(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> Result<(isize, usize)> {
        let node = match node {
            Some(node) => node,
            None => return Ok((0, 0)),
        };

        if lower.map_or(false, |lower| *lower >= node.item)
            || upper.map_or(false, |upper| *upper <= node.item)
        {
            return Err(Error::InvariantViolation(
                "AVL node is out of order with its ancestors".to_string(),
            ));
        }

        let (left_height, left_count) = Self::check(node.left.as_deref(), lower, Some(&node.item))?;
        let (right_height, right_count) =
            Self::check(node.right.as_deref(), Some(&node.item), upper)?;

        let computed = max(left_height, right_height) + 1;
        if computed != node.height {
            return Err(Error::InvariantViolation(format!(
                "AVL node stores height {} but its subtree has height {}",
                node.height, computed
            )));
        }

        if (left_height - right_height).abs() > 1 {
            return Err(Error::InvariantViolation(format!(
                "AVL node has balance factor {}",
                left_height - right_height
            )));
        }

        Ok((computed, left_count + right_count + 1))
    }
}

impl<T: Ord> SequentialSet<T> for AVLTree<T> {
    fn new() -> Self {
        AVLTree {
            root: None,
            len: 0,
            rotations: 0,
        }
    }

    fn insert(&mut self, item: T) -> std::result::Result<(), T> {
        Self::insert_at(&mut self.root, item, &mut self.rotations)?;
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
        height(&self.root) as usize
    }

    fn validate(&self) -> Result<()> {
        let (_, count) = Self::check(self.root.as_deref(), None, None)?;

        if count != self.len {
            return Err(Error::InvariantViolation(format!(
                "AVLTree holds {} nodes but counts {}",
                count, self.len
            )));
        }

        Ok(())
    }
}

/// In-order iterator over an AVL tree.
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
