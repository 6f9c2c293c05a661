//! External limits on how far a search may expand.
//!
//! A limit is polled before every sibling is expanded. Once it reports reached,
//! each node on the current path stops expanding its remaining successors and
//! returns what it has found so far. A limit never interrupts an evaluation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Polled by the search with the number of nodes visited so far.
pub trait SearchLimit {
    /// Returns true if the search should stop expanding nodes.
    fn reached(&self, nodes: u64) -> bool;
}

/// Any closure over the visited node count is a limit.
impl<F> SearchLimit for F
where
    F: Fn(u64) -> bool,
{
    fn reached(&self, nodes: u64) -> bool {
        self(nodes)
    }
}

/// Never stops a search.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Unlimited;

impl SearchLimit for Unlimited {
    fn reached(&self, _nodes: u64) -> bool {
        false
    }
}

/// Stops a search once it has visited at least this many nodes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct NodeLimit(pub u64);

impl SearchLimit for NodeLimit {
    fn reached(&self, nodes: u64) -> bool {
        nodes >= self.0
    }
}

/// A shared flag that lets another thread tell a search to stop as soon as possible.
#[derive(Debug, Clone, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Informs any search polling this flag to stop.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Resets the flag so that it may be used for another search.
    pub fn unstop(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl SearchLimit for StopFlag {
    fn reached(&self, _nodes: u64) -> bool {
        self.is_stopped()
    }
}
