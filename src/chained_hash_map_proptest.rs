#![cfg(test)]

// Property tests for ChainedHashMap kept inside the crate so they can also
// assert internal invariants (prime capacity) alongside the public surface.

use crate::prime;
use crate::{ChainedHashMap, MapError};
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;

// Pool-indexed operations to improve shrinking: indices shrink to earlier
// keys, pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, i32),
    Remove(usize),
    Get(usize),
    Contains(String),
    ForEach,
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{0,5}", 1..=8).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let contains_pool = proptest::sample::select(pool.clone());
        let op = prop_oneof![
            (idx.clone(), any::<i32>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            idx.clone().prop_map(OpI::Remove),
            idx.clone().prop_map(OpI::Get),
            prop_oneof![
                contains_pool.prop_map(|s: String| s),
                "[a-z]{0,5}".prop_map(|s| s)
            ]
            .prop_map(OpI::Contains),
            Just(OpI::ForEach),
            Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..60).prop_map(move |ops| (pool.clone(), ops))
    })
}

// Property: State-machine equivalence against std::collections::HashMap.
// Invariants exercised across random operation sequences:
// - `insert`/`get`/`contains_key`/`remove` parity with the model after each op.
// - Every value leaving the table (replace, remove) reaches the disposer
//   exactly once, immediately, in operation order.
// - `len` parity; capacity stays a prime ≥ 3; load factor never exceeds the
//   growth threshold after an operation completes.
// - `keys()` yields exactly the model's key set; `for_each_key` with a
//   never-accepting predicate is invoked once per stored key.
// - Dropping the table disposes every remaining value exactly once.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario()) {
        let disposed: Rc<RefCell<Vec<i32>>> = Rc::new(RefCell::new(Vec::new()));
        let ledger = disposed.clone();
        let mut sut: ChainedHashMap<i32> =
            ChainedHashMap::with_disposer(3, move |v| ledger.borrow_mut().push(v));
        let mut model: HashMap<String, i32> = HashMap::new();
        let mut expected: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let key = pool[i].clone();
                    if let Some(old) = model.insert(key.clone(), v) {
                        expected.push(old);
                    }
                    prop_assert!(sut.insert(&key, v).is_ok());
                }
                OpI::Remove(i) => {
                    let key = &pool[i];
                    match model.remove(key) {
                        Some(old) => {
                            expected.push(old);
                            prop_assert_eq!(sut.remove(key), Ok(()));
                        }
                        None => {
                            prop_assert_eq!(sut.remove(key), Err(MapError::KeyNotFound));
                        }
                    }
                }
                OpI::Get(i) => {
                    let key = &pool[i];
                    prop_assert_eq!(sut.get(key), model.get(key));
                }
                OpI::Contains(key) => {
                    prop_assert_eq!(sut.contains_key(&key), model.contains_key(&key));
                }
                OpI::ForEach => {
                    prop_assert_eq!(sut.for_each_key(|_| false), model.len());
                }
                OpI::Iterate => {
                    let seen: BTreeSet<String> = sut.keys().map(str::to_owned).collect();
                    let want: BTreeSet<String> = model.keys().cloned().collect();
                    prop_assert_eq!(seen, want);
                }
            }

            prop_assert_eq!(sut.len(), model.len());
            prop_assert_eq!(&*disposed.borrow(), &expected);
            prop_assert!(sut.capacity() >= 3);
            prop_assert_eq!(prime::next_prime(sut.capacity()), sut.capacity());
            prop_assert!(sut.len() as f64 / sut.capacity() as f64 <= 0.75);
        }

        // Dropping the table disposes the remaining values exactly once; their
        // order follows bucket layout, so compare the tail as a multiset.
        let mut remaining: Vec<i32> = model.values().copied().collect();
        drop(sut);
        let all = disposed.borrow();
        prop_assert_eq!(&all[..expected.len()], &expected[..]);
        let mut tail: Vec<i32> = all[expected.len()..].to_vec();
        tail.sort_unstable();
        remaining.sort_unstable();
        prop_assert_eq!(tail, remaining);
    }
}
