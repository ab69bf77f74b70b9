use crate::error::Result;

pub trait SequentialSet<T: Ord> {
    fn new() -> Self;

    /// Insert the item into the set.
    ///
    /// If success, return Ok(()).
    /// If an equal item is already stored, the set is left untouched and
    /// Err(item) hands back the item you tried to insert.
    fn insert(&mut self, item: T) -> std::result::Result<(), T>;

    /// Lookup the stored item which is equal to the given one.
    ///
    /// If success, return the reference of the stored item.
    /// If fail, return None.
    fn lookup(&self, item: &T) -> Option<&T>;

    fn contains(&self, item: &T) -> bool {
        self.lookup(item).is_some()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// height counted in nodes: 0 for the empty set, 1 for a single node
    fn get_height(&self) -> usize;

    /// Check every structural invariant of the underlying tree.
    fn validate(&self) -> Result<()>;
}
