//! chained-hashmap: a string-keyed hash map with separate chaining,
//! prime-sized buckets, and automatic load-factor-triggered growth.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep each concern of the table in its own small layer so every
//!   invariant can be checked in isolation.
//! - Layers:
//!   - Chain<T>: the bucket chain, a singly linked sequence whose nodes live
//!     in a slotmap arena; append, linear find, positional removal, forward
//!     iteration in insertion order.
//!   - string_hash / prime: pure helpers. The polynomial key hash depends on
//!     the key bytes only; the sizing routine turns any requested or doubled
//!     capacity into the next prime.
//!   - ChainedHashMap<V>: public API that owns the bucket array, the entry
//!     count, and an optional disposer callback.
//!
//! Constraints
//! - Single-threaded; the boxed disposer keeps the map `!Send`/`!Sync`.
//! - Keys are always textual. The table stores its own immutable heap copy
//!   of each key (`Box<str>`); exactly one entry per distinct key.
//! - Capacity is always a prime ≥ 3: at creation the request is floored and
//!   rounded up, and each growth step re-primes the doubled capacity. Prime
//!   moduli keep the polynomial hash from clustering the way power-of-two
//!   capacities would.
//! - An occupied bucket never holds an empty chain; the slot is released
//!   when its last entry is removed.
//!
//! Ownership and disposal
//! - The table owns every stored value from successful insert until the
//!   value is replaced, removed, or the table is dropped. At that point the
//!   value is passed, exactly once, to the disposer registered at creation,
//!   or dropped in place when there is none.
//! - Growth relocates entries by move; relocated values never leave the
//!   table, so the disposer does not run during a rehash.
//!
//! Growth semantics
//! - An appending insert that pushes `len / capacity` over 0.75 grows the
//!   bucket array to `next_prime(capacity * 2)` within the same call. The
//!   new array is reserved up front: a failed reservation leaves the table
//!   untouched, so growth commits as a whole or not at all. The insert call
//!   reports the growth result even though its entry is already stored; a
//!   caller that sees `Err(Allocation)` holds a full, consistent table.
//!
//! Iteration
//! - `keys()` walks buckets in index order and chains in insertion order.
//!   The iterator holds a shared borrow of the table for its whole lifetime,
//!   so mutation while iterating is rejected at compile time; there is no
//!   generation counter.
//! - `for_each_key` is the internal-traversal twin: same order, driven by a
//!   predicate that can short-circuit, returning the invocation count.
//!
//! Notes and non-goals
//! - No concurrent access, no open-addressing variant, no shrink-on-delete,
//!   no generic key type.
//! - Public API surface is `ChainedHashMap`, its `Keys` iterator, and
//!   `MapError`; the chain layer is an implementation detail.

pub mod chain;
mod chained_hash_map;
mod chained_hash_map_proptest;
mod prime;
mod string_hash;

// Public surface
pub use chained_hash_map::{ChainedHashMap, Keys, MapError};
