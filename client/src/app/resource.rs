//! # Remote Resources
//!
//! Load state for data a screen fetches from the backend.
//!
//! ```text
//! Idle ──begin()──▶ Loading ──complete(Ok)──▶ Ready(T)
//!                      │
//!                      └──complete(Err)──▶ Failed(message) ──begin()──▶ Loading
//! ```
//!
//! Every `begin()` hands out a [`Ticket`]. A response is applied only if its
//! ticket still matches the resource's generation; `detach()` (screen unmount)
//! and a newer `begin()` both invalidate older tickets, so a late response can
//! never land on a screen that has moved on.
//!
//! Generations are drawn from one process-wide counter, so a resource that is
//! reset to its default and loaded again never reissues an old ticket.

use std::sync::atomic::{AtomicU64, Ordering};

/// Last issued generation. Zero is never issued.
static GENERATIONS: AtomicU64 = AtomicU64::new(0);

fn next_generation() -> u64 {
    GENERATIONS.fetch_add(1, Ordering::Relaxed) + 1
}

/// Load state of a remote resource.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

/// Proof that a response belongs to a particular load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// A value loaded from the backend, with stale-response protection.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource<T> {
    state: LoadState<T>,
    generation: u64,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self { state: LoadState::Idle, generation: 0 }
    }
}

impl<T> Resource<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match &self.state {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Mutable access for local updates after a confirmed server change.
    pub fn data_mut(&mut self) -> Option<&mut T> {
        match &mut self.state {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Enter `Loading` and invalidate every earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.generation = next_generation();
        self.state = LoadState::Loading;
        Ticket { generation: self.generation }
    }

    /// Apply a response. Returns `false` (and changes nothing) for a stale ticket.
    pub fn complete(&mut self, ticket: Ticket, result: Result<T, String>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.state = match result {
            Ok(value) => LoadState::Ready(value),
            Err(message) => LoadState::Failed(message),
        };
        true
    }

    /// Fail without issuing a request (e.g. no session token).
    pub fn fail(&mut self, message: impl Into<String>) {
        self.generation = 0;
        self.state = LoadState::Failed(message.into());
    }

    /// Forget the current value and ignore any in-flight response.
    pub fn detach(&mut self) {
        self.generation = 0;
        self.state = LoadState::Idle;
    }
}
