//! Load lifecycle for interactive screens.
//!
//! A screen starts a load with [`LoadTracker::begin`] and hands the result
//! back with [`LoadTracker::finish`]. Every `begin` or `invalidate` bumps a
//! generation counter, so a result that arrives after the user has moved on
//! carries an old ticket and is dropped instead of overwriting newer state.

use std::fmt::{Debug, Display};

use tracing::debug;

/// Where a screen's data currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet, or the screen was left.
    Idle,
    /// A load is in flight.
    Pending,
    /// The latest load succeeded.
    Loaded(T),
    /// The latest load failed; the message is shown with a retry action.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Proof of which load a result belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket<K> {
    generation: u64,
    key: K,
}

impl<K> LoadTicket<K> {
    pub fn key(&self) -> &K {
        &self.key
    }
}

/// Tracks one screen's load state keyed by what was requested.
#[derive(Debug)]
pub struct LoadTracker<K, T> {
    generation: u64,
    key: Option<K>,
    state: LoadState<T>,
}

impl<K, T> Default for LoadTracker<K, T> {
    fn default() -> Self {
        Self {
            generation: 0,
            key: None,
            state: LoadState::Idle,
        }
    }
}

impl<K, T> LoadTracker<K, T>
where
    K: Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `key`. Any load already in flight becomes stale.
    pub fn begin(&mut self, key: K) -> LoadTicket<K> {
        self.generation += 1;
        self.key = Some(key.clone());
        self.state = LoadState::Pending;
        LoadTicket {
            generation: self.generation,
            key,
        }
    }

    /// Record the outcome of the load identified by `ticket`.
    ///
    /// Returns `false` and leaves state untouched when the ticket is stale.
    pub fn finish<E: Display>(&mut self, ticket: LoadTicket<K>, result: Result<T, E>) -> bool {
        if ticket.generation != self.generation {
            debug!(key = ?ticket.key, "Discarding stale load result");
            return false;
        }

        self.state = match result {
            Ok(value) => LoadState::Loaded(value),
            Err(e) => LoadState::Failed(e.to_string()),
        };
        true
    }

    /// Forget the current load; results still in flight will be discarded.
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.key = None;
        self.state = LoadState::Idle;
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn key(&self) -> Option<&K> {
        self.key.as_ref()
    }

    /// The key to request again when the last load failed.
    pub fn retry_key(&self) -> Option<&K> {
        match self.state {
            LoadState::Failed(_) => self.key.as_ref(),
            _ => None,
        }
    }
}
