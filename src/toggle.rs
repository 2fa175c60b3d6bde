//! Optimistic mutation coordinator
//!
//! Formalizes the toggle pattern every page reimplemented with ad hoc
//! boolean flags: flip the visible state immediately, issue the server
//! call, land the terminal state on success, revert on failure. One
//! machine per toggled relationship; a second click while a mutation is
//! in flight is rejected so a double-click never issues two calls.
//!
//! Two machines: [`ToggleState`] for reversible membership (bookmarks,
//! project interest) and [`ReadState`] for the one-way unread→read
//! transition of notifications.

use std::collections::HashMap;
use std::future::Future;

use crate::error::ApiError;

/// Which mutation a `begin` started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Create the relationship (bookmark, register interest).
    Set,
    /// Delete the relationship.
    Unset,
}

/// Outcome of asking the machine to start a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Mutation started; issue the corresponding server call.
    Started(Direction),
    /// A mutation is already in flight; do nothing.
    Busy,
}

/// State of one toggled relationship.
///
/// `Set` carries the server-side row id (e.g. the bookmark id) needed to
/// issue the delete; it is merged in by [`ToggleState::commit_success`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToggleState {
    #[default]
    Unset,
    PendingSet,
    Set {
        id: Option<i64>,
    },
    PendingUnset {
        id: Option<i64>,
    },
}

impl ToggleState {
    /// Hydrate from server state (e.g. an existing bookmark row).
    pub fn set_with_id(id: i64) -> Self {
        ToggleState::Set { id: Some(id) }
    }

    /// Start a mutation. Moves to the pending state and reports which
    /// server call to issue; rejected while another mutation is pending.
    pub fn begin(&mut self) -> ToggleOutcome {
        match *self {
            ToggleState::Unset => {
                *self = ToggleState::PendingSet;
                ToggleOutcome::Started(Direction::Set)
            }
            ToggleState::Set { id } => {
                *self = ToggleState::PendingUnset { id };
                ToggleOutcome::Started(Direction::Unset)
            }
            ToggleState::PendingSet | ToggleState::PendingUnset { .. } => ToggleOutcome::Busy,
        }
    }

    /// Land the terminal state, merging the server-returned id on set.
    pub fn commit_success(&mut self, server_id: Option<i64>) {
        match *self {
            ToggleState::PendingSet => {
                *self = ToggleState::Set { id: server_id };
            }
            ToggleState::PendingUnset { .. } => {
                *self = ToggleState::Unset;
            }
            // No pending mutation: a stray callback, ignore.
            _ => {}
        }
    }

    /// Revert to the pre-toggle terminal state.
    pub fn commit_failure(&mut self) {
        match *self {
            ToggleState::PendingSet => {
                *self = ToggleState::Unset;
            }
            ToggleState::PendingUnset { id } => {
                *self = ToggleState::Set { id };
            }
            _ => {}
        }
    }

    /// The value the UI shows, including the optimistic pending states.
    pub fn is_set(&self) -> bool {
        matches!(self, ToggleState::Set { .. } | ToggleState::PendingSet)
    }

    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            ToggleState::PendingSet | ToggleState::PendingUnset { .. }
        )
    }

    /// Server row id, when known.
    pub fn id(&self) -> Option<i64> {
        match *self {
            ToggleState::Set { id } | ToggleState::PendingUnset { id } => id,
            _ => None,
        }
    }
}

/// Outcome of starting a mark-read mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    Started,
    Busy,
    AlreadyRead,
}

/// One-way unread → read machine for notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReadState {
    #[default]
    Unread,
    PendingRead,
    Read,
}

impl ReadState {
    pub fn begin(&mut self) -> ReadOutcome {
        match *self {
            ReadState::Unread => {
                *self = ReadState::PendingRead;
                ReadOutcome::Started
            }
            ReadState::PendingRead => ReadOutcome::Busy,
            ReadState::Read => ReadOutcome::AlreadyRead,
        }
    }

    pub fn commit_success(&mut self) {
        if *self == ReadState::PendingRead {
            *self = ReadState::Read;
        }
    }

    pub fn commit_failure(&mut self) {
        if *self == ReadState::PendingRead {
            *self = ReadState::Unread;
        }
    }

    /// Optimistic visible value.
    pub fn is_read(&self) -> bool {
        matches!(self, ReadState::Read | ReadState::PendingRead)
    }
}

/// Per-target toggle machines, keyed by the toggled entity's id
/// (e.g. freelancer id for an employer's bookmark set).
#[derive(Debug, Default)]
pub struct ToggleSet {
    states: HashMap<i64, ToggleState>,
}

impl ToggleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hydrate one membership from server data.
    pub fn mark_set(&mut self, target: i64, row_id: Option<i64>) {
        self.states.insert(target, ToggleState::Set { id: row_id });
    }

    pub fn state_mut(&mut self, target: i64) -> &mut ToggleState {
        self.states.entry(target).or_default()
    }

    pub fn is_set(&self, target: i64) -> bool {
        self.states.get(&target).is_some_and(ToggleState::is_set)
    }

    pub fn set_count(&self) -> usize {
        self.states.values().filter(|s| s.is_set()).count()
    }
}

/// Drive one toggle end to end: begin, run the server call for the
/// reported direction, commit or roll back. Returns the resulting
/// visible value; a busy machine returns the current value without
/// touching the server. The server call must return the created row id
/// on `Set` (None is accepted) and `None` on `Unset`.
pub async fn drive<F, Fut>(state: &mut ToggleState, op: F) -> Result<bool, ApiError>
where
    F: FnOnce(Direction) -> Fut,
    Fut: Future<Output = Result<Option<i64>, ApiError>>,
{
    let direction = match state.begin() {
        ToggleOutcome::Started(direction) => direction,
        ToggleOutcome::Busy => return Ok(state.is_set()),
    };

    match op(direction).await {
        Ok(row_id) => {
            state.commit_success(row_id);
            Ok(state.is_set())
        }
        Err(err) => {
            state.commit_failure();
            Err(err)
        }
    }
}
