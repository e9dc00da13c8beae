//! Storage backends for peer slots.
//!
//! A [`Storage`] hands out blank peer slots and takes them back on teardown.
//! Two implementations exist: [`HeapStorage`] using the global allocator,
//! and [`SlotPool`] with a fixed number of slots allocated up front for
//! memory constrained deployments. The backend is picked when composing
//! [`Peers`](crate::Peers) and stays fixed for the process lifetime.

use std::collections::VecDeque;
use std::fmt;

use crate::peer::Peer;
use crate::Error;

/// Number of peer slots in the static pool.
#[cfg(feature = "static-pool")]
pub const MAX_PEERS: usize = 16;

/// The backend selected at build time.
#[cfg(feature = "static-pool")]
pub type DefaultStorage = SlotPool;

/// The backend selected at build time.
#[cfg(not(feature = "static-pool"))]
pub type DefaultStorage = HeapStorage;

/// Abstraction over how peer memory is obtained.
pub trait Storage {
    /// Obtain a blank peer slot.
    ///
    /// The slot may have belonged to a previously freed peer. Callers must
    /// not assume anything about its field values.
    fn allocate(&mut self) -> Result<Box<Peer>, Error>;

    /// Return a slot previously obtained from this backend.
    fn free(&mut self, peer: Box<Peer>);
}

/// Backend using the global allocator.
///
/// Effectively unbounded. The global allocator aborts the process on
/// exhaustion, so this backend never reports [`Error::OutOfMemory`] in
/// practice.
#[derive(Debug, Default)]
pub struct HeapStorage;

impl Storage for HeapStorage {
    fn allocate(&mut self) -> Result<Box<Peer>, Error> {
        Ok(Box::new(Peer::blank()))
    }

    fn free(&mut self, peer: Box<Peer>) {
        drop(peer);
    }
}

/// Fixed-capacity pool of reusable peer slots.
///
/// All slots are allocated when the pool is created. Freed slots go back on
/// the free list and are recycled by later allocations.
pub struct SlotPool {
    free: VecDeque<Box<Peer>>,
}

impl SlotPool {
    /// Create a pool with the given number of slots.
    pub fn new(capacity: usize) -> Self {
        let free = (0..capacity).map(|_| Box::new(Peer::blank())).collect();
        SlotPool { free }
    }
}

impl Storage for SlotPool {
    fn allocate(&mut self) -> Result<Box<Peer>, Error> {
        self.free.pop_front().ok_or(Error::PoolExhausted)
    }

    fn free(&mut self, peer: Box<Peer>) {
        self.free.push_front(peer);
    }
}

impl fmt::Debug for SlotPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotPool")
            .field("free", &self.free.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_hands_out_exactly_capacity() {
        let mut pool = SlotPool::new(2);

        let a = pool.allocate().unwrap();
        let b = pool.allocate().unwrap();
        assert_eq!(pool.allocate().unwrap_err(), Error::PoolExhausted);

        pool.free(a);
        pool.free(b);
        assert!(pool.allocate().is_ok());
    }

    #[test]
    fn empty_pool_is_always_exhausted() {
        let mut pool = SlotPool::new(0);
        assert_eq!(pool.allocate().unwrap_err(), Error::PoolExhausted);
    }

    #[test]
    fn heap_always_allocates() {
        let mut heap = HeapStorage;
        let a = heap.allocate().unwrap();
        let b = heap.allocate().unwrap();
        heap.free(a);
        heap.free(b);
    }
}
