use rand::prelude::{SliceRandom, ThreadRng};
use rand::thread_rng;
use std::collections::BTreeSet;
use std::fmt::Debug;
use treebench::set::SequentialSet;
use treebench::util::random::Random;

#[derive(Clone, Debug, PartialEq)]
enum Operation {
    Insert,
    Lookup,
}

#[derive(PartialEq)]
enum OperationType {
    Some, // the operation for existing item on the set
    None, // the operation for not existing item on the set
}

/// Run random inserts and lookups against the set and `BTreeSet` side by side.
///
/// The set is validated after every insert.
pub fn stress_sequential<T, S>(iter: u64)
where
    T: Ord + Clone + Random + Debug,
    S: SequentialSet<T>,
{
    // 10 times try to get not existing item, or return if failing
    let gen_not_existing = |rng: &mut ThreadRng, set: &BTreeSet<T>| {
        for _ in 0..10 {
            let item = T::gen(rng);

            if !set.contains(&item) {
                return Ok(item);
            }
        }

        Err(())
    };

    let ops = [Operation::Insert, Operation::Lookup];
    let types = [OperationType::Some, OperationType::None];

    let mut set = S::new();
    let mut ref_set: BTreeSet<T> = BTreeSet::new();
    let mut inserted: Vec<T> = Vec::new();
    let mut rng = thread_rng();

    for i in 1..=iter {
        let t = types.choose(&mut rng).unwrap();
        let existing = inserted.choose(&mut rng).cloned();

        match existing {
            Some(existing) if *t == OperationType::Some => match ops.choose(&mut rng).unwrap() {
                Operation::Insert => {
                    // should be ignored
                    assert_eq!(
                        set.insert(existing.clone()),
                        Err(existing),
                        "[{:0>10}] InsertSome",
                        i
                    );
                }
                Operation::Lookup => {
                    // should success
                    assert_eq!(
                        set.lookup(&existing),
                        ref_set.get(&existing),
                        "[{:0>10}] LookupSome",
                        i
                    );
                }
            },
            _ => {
                let not_existing = if let Ok(item) = gen_not_existing(&mut rng, &ref_set) {
                    item
                } else {
                    continue;
                };

                match ops.choose(&mut rng).unwrap() {
                    Operation::Insert => {
                        // should success
                        assert_eq!(
                            set.insert(not_existing.clone()),
                            Ok(()),
                            "[{:0>10}] InsertNone",
                            i
                        );
                        assert!(ref_set.insert(not_existing.clone()));
                        inserted.push(not_existing);

                        set.validate().unwrap();
                    }
                    Operation::Lookup => {
                        // should fail
                        assert_eq!(set.lookup(&not_existing), None, "[{:0>10}] LookupNone", i);
                        assert!(!set.contains(&not_existing));
                    }
                }
            }
        }

        assert_eq!(set.len(), ref_set.len());
    }

    for item in &ref_set {
        assert!(set.contains(item), "{:?} is lost", item);
    }
}
