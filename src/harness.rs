//! Timing BST and AVL insertion and lookup over sorted and shuffled input.

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

use log::{info, warn};
use rand::{prelude::SliceRandom, rngs::StdRng, Rng, SeedableRng};

use crate::avltree::AVLTree;
use crate::bst::BST;
use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::record::Record;
use crate::set::SequentialSet;

/// The timings of one trial, in nanoseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    pub dataset: String,
    pub n: usize,
    pub insert_bst_sorted: u64,
    pub insert_avl_sorted: u64,
    pub insert_bst_random: u64,
    pub insert_avl_random: u64,
    pub search_bst_sorted: u64,
    pub search_avl_sorted: u64,
    pub search_bst_random: u64,
    pub search_avl_random: u64,
}

impl TrialResult {
    /// the eight timings in report column order
    pub fn timings(&self) -> [u64; 8] {
        [
            self.insert_bst_sorted,
            self.insert_avl_sorted,
            self.insert_bst_random,
            self.insert_avl_random,
            self.search_bst_sorted,
            self.search_avl_sorted,
            self.search_bst_random,
            self.search_avl_random,
        ]
    }
}

/// Receives trial results in the order the trials ran.
pub trait ResultSink {
    fn accept(&mut self, result: &TrialResult) -> Result<()>;
}

impl ResultSink for Vec<TrialResult> {
    fn accept(&mut self, result: &TrialResult) -> Result<()> {
        self.push(result.clone());
        Ok(())
    }
}

/// The two insertion orders of one record set.
#[derive(Debug, Clone)]
pub struct Orderings<T> {
    pub sorted: Vec<T>,
    pub random: Vec<T>,
}

impl<T: Ord + Clone> Orderings<T> {
    pub fn new<R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Self {
        let mut sorted = items.to_vec();
        sorted.sort();

        let mut random = items.to_vec();
        random.shuffle(rng);

        Orderings { sorted, random }
    }
}

fn as_nanos(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

/// Insert every item into the tree, then return the elapsed nanoseconds.
///
/// Duplicates are rejected by the tree and still count toward the time.
pub fn time_insert<T, S>(tree: &mut S, items: Vec<T>) -> u64
where
    T: Ord,
    S: SequentialSet<T>,
{
    let start = Instant::now();

    for item in items {
        let _ = tree.insert(item);
    }

    as_nanos(start.elapsed())
}

/// Look every item up in the tree, then return the elapsed nanoseconds.
pub fn time_search<T, S>(tree: &S, items: &[T]) -> u64
where
    T: Ord,
    S: SequentialSet<T>,
{
    let start = Instant::now();

    for item in items {
        black_box(tree.contains(item));
    }

    as_nanos(start.elapsed())
}

/// Run one trial over the first `n` records.
///
/// Four fresh trees are built, one per engine and ordering, and every
/// tree is searched for each record in file order.
pub fn run_trial<R: Rng + ?Sized>(
    dataset: &str,
    records: &[Record],
    n: usize,
    rng: &mut R,
) -> TrialResult {
    let original = &records[..n.min(records.len())];
    if original.len() < n {
        warn!(
            "{} has only {} valid records, trial for N={} uses all of them",
            dataset,
            original.len(),
            n
        );
    }

    let orderings = Orderings::new(original, rng);

    let mut bst_sorted: BST<Record> = BST::new();
    let mut bst_random: BST<Record> = BST::new();
    let mut avl_sorted: AVLTree<Record> = AVLTree::new();
    let mut avl_random: AVLTree<Record> = AVLTree::new();

    // copies are made outside the timed windows
    let insert_bst_sorted = time_insert(&mut bst_sorted, orderings.sorted.clone());
    let insert_avl_sorted = time_insert(&mut avl_sorted, orderings.sorted);
    let insert_bst_random = time_insert(&mut bst_random, orderings.random.clone());
    let insert_avl_random = time_insert(&mut avl_random, orderings.random);

    let search_bst_sorted = time_search(&bst_sorted, original);
    let search_avl_sorted = time_search(&avl_sorted, original);
    let search_bst_random = time_search(&bst_random, original);
    let search_avl_random = time_search(&avl_random, original);

    info!(
        "trial N={}: BST height sorted {} random {}, AVL height sorted {} random {}",
        original.len(),
        bst_sorted.get_height(),
        bst_random.get_height(),
        avl_sorted.get_height(),
        avl_random.get_height()
    );

    TrialResult {
        dataset: dataset.to_string(),
        n: original.len(),
        insert_bst_sorted,
        insert_avl_sorted,
        insert_bst_random,
        insert_avl_random,
        search_bst_sorted,
        search_avl_sorted,
        search_bst_random,
        search_avl_random,
    }
}

/// Run a trial for every configured size, in order, handing each result to the sink.
pub fn run_experiments<S: ResultSink + ?Sized>(
    config: &ExperimentConfig,
    dataset: &str,
    records: &[Record],
    sink: &mut S,
) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for &n in &config.sizes {
        let result = run_trial(dataset, records, n, &mut rng);
        sink.accept(&result)?;
    }

    Ok(())
}
