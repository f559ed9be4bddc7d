//! Memoized recursive factorial.
//!
//! Results are kept for the lifetime of the program in a statically allocated, Mutex-protected
//! store shared by all threads. With the `full` feature the store is an `lru::LruCache` holding
//! at most [`MEMO_CAPACITY`] entries; without it, an unbounded `HashMap`.

use std::sync::{Mutex, MutexGuard, PoisonError};

use lazy_static::lazy_static;

/// Entries kept by the LRU store.
pub const MEMO_CAPACITY: usize = 32;

#[cfg(feature = "full")]
type Store = lru::LruCache<i32, i32>;
#[cfg(not(feature = "full"))]
type Store = std::collections::HashMap<i32, i32>;

lazy_static! {
    static ref MEMO: Mutex<Store> = Mutex::new(new_store());
}

#[cfg(feature = "full")]
fn new_store() -> Store {
    lru::LruCache::new(MEMO_CAPACITY)
}

#[cfg(not(feature = "full"))]
fn new_store() -> Store {
    std::collections::HashMap::new()
}

#[cfg(feature = "full")]
fn store_put(store: &mut Store, n: i32, value: i32) {
    store.put(n, value);
}

#[cfg(not(feature = "full"))]
fn store_put(store: &mut Store, n: i32, value: i32) {
    store.insert(n, value);
}

// A panic elsewhere can't leave a half-written entry behind, so a poisoned store is still usable.
fn lock() -> MutexGuard<'static, Store> {
    MEMO.lock().unwrap_or_else(PoisonError::into_inner)
}

/// `n!` by the same recursion as [`crate::factorial_recursive`], caching every intermediate
/// result. Same precondition: `n >= 1`.
///
/// The store is not locked while recursing.
pub fn factorial_memoized(n: i32) -> i32 {
    let cached = lock().get(&n).copied();
    if let Some(value) = cached {
        return value;
    }

    let value = if n == 1 {
        1
    } else {
        n.wrapping_mul(factorial_memoized(n - 1))
    };

    store_put(&mut lock(), n, value);
    value
}

/// Drops every cached result.
pub fn flush() {
    lock().clear();
}

/// Number of cached results.
pub fn cache_size() -> usize {
    lock().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    lazy_static! {
        // The store is global; tests that look at its size must not interleave.
        static ref SERIAL: Mutex<()> = Mutex::new(());
    }

    fn serial() -> MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn agrees_with_recursion() {
        let _guard = serial();
        for n in 1..=12 {
            assert_eq!(factorial_memoized(n), crate::factorial_recursive(n));
        }
        assert_eq!(factorial_memoized(13), crate::factorial_recursive(13));
    }

    #[test]
    fn caches_each_step_and_flushes() {
        let _guard = serial();
        flush();
        assert_eq!(cache_size(), 0);

        assert_eq!(factorial_memoized(5), 120);
        assert_eq!(cache_size(), 5);

        // Served from the store.
        assert_eq!(factorial_memoized(5), 120);
        assert_eq!(factorial_memoized(3), 6);
        assert_eq!(cache_size(), 5);

        assert_eq!(factorial_memoized(7), 5040);
        assert_eq!(cache_size(), 7);

        flush();
        assert_eq!(cache_size(), 0);
    }

    #[test]
    fn shared_between_threads() {
        let _guard = serial();
        flush();

        let handles = (0..8)
            .map(|_| {
                std::thread::spawn(|| {
                    (1..=12)
                        .map(|n| (n, factorial_memoized(n)))
                        .collect::<Vec<(i32, i32)>>()
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            for (n, value) in handle.join().unwrap() {
                assert_eq!(value, crate::factorial_recursive(n), "n = {}", n);
            }
        }

        assert_eq!(cache_size(), 12);
        flush();
    }

    #[cfg(feature = "full")]
    #[test]
    fn lru_store_is_bounded() {
        let _guard = serial();
        flush();
        factorial_memoized(MEMO_CAPACITY as i32 + 8);
        assert_eq!(cache_size(), MEMO_CAPACITY);
        flush();
    }
}
