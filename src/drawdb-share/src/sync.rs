//! Share synchronization: create the remote record once, update it after.

use crate::client::RemoteDocumentStore;
use crate::link::build_url;
use crate::snapshot::{DiagramSession, DiagramSnapshot};
use crate::Result;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, error, warn};

/// Share state as seen by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ShareState {
    /// No share session is active.
    #[default]
    Idle,
    /// A create or update round trip is in flight.
    Loading,
    /// The record is stored; holds the share URL.
    Ready(String),
    /// The last attempt failed. Details are logged, not surfaced.
    Failed,
}

impl ShareState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ShareState::Loading)
    }

    /// Share URL, if ready.
    pub fn url(&self) -> Option<&str> {
        match self {
            ShareState::Ready(url) => Some(url),
            _ => None,
        }
    }
}

/// Result of a single activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The activation ran to completion and its outcome was applied.
    Completed(ShareState),
    /// A newer activation or a deactivation superseded this one while it
    /// was in flight; its response was dropped.
    Discarded,
}

impl Activation {
    pub fn state(&self) -> Option<&ShareState> {
        match self {
            Activation::Completed(state) => Some(state),
            Activation::Discarded => None,
        }
    }
}

enum Outcome {
    Created(String),
    Updated,
}

/// Keeps a diagram's remote record in sync and owns its identifier.
///
/// The synchronizer is the only writer of the held identifier. Readers get a
/// [`watch::Receiver`] through [`ShareSynchronizer::subscribe_identifier`].
pub struct ShareSynchronizer<S> {
    store: S,
    base_location: String,
    /// Bumped by every activation, identifier change and teardown.
    generation: Mutex<u64>,
    identifier: watch::Sender<String>,
    state: watch::Sender<ShareState>,
}

impl<S: RemoteDocumentStore> ShareSynchronizer<S> {
    /// `identifier` is the one already held by the session, possibly empty.
    pub fn new(store: S, base_location: impl Into<String>, identifier: impl Into<String>) -> Self {
        let (identifier, _) = watch::channel(identifier.into());
        let (state, _) = watch::channel(ShareState::Idle);
        Self {
            store,
            base_location: base_location.into(),
            generation: Mutex::new(0),
            identifier,
            state,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn base_location(&self) -> &str {
        &self.base_location
    }

    /// Currently held identifier; empty until the first create succeeds.
    pub fn identifier(&self) -> String {
        self.identifier.borrow().clone()
    }

    pub fn subscribe_identifier(&self) -> watch::Receiver<String> {
        self.identifier.subscribe()
    }

    pub fn state(&self) -> ShareState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ShareState> {
        self.state.subscribe()
    }

    /// Replace the held identifier, e.g. when another diagram is opened.
    ///
    /// Any activation in flight is superseded and the state returns to
    /// `Idle`. Call [`activate`] afterwards to share under the new identifier.
    ///
    /// [`activate`]: ShareSynchronizer::activate
    pub fn set_identifier(&self, identifier: impl Into<String>) {
        let mut generation = self.lock_generation();
        *generation += 1;
        self.identifier.send_replace(identifier.into());
        self.state.send_replace(ShareState::Idle);
    }

    /// Forget the held identifier so the next activation creates a new record.
    pub fn clear_identifier(&self) {
        self.set_identifier(String::new());
    }

    /// Tear down the share session. Responses still in flight are dropped.
    pub fn deactivate(&self) {
        let mut generation = self.lock_generation();
        *generation += 1;
        self.state.send_replace(ShareState::Idle);
    }

    /// Build the snapshot and push it to the remote store.
    ///
    /// Creates a record when no identifier is held, otherwise overwrites the
    /// held one. Every call does a full round trip; nothing is cached.
    pub async fn activate(&self, session: &DiagramSession, title: &str) -> Activation {
        let (generation, held) = {
            let mut generation = self.lock_generation();
            *generation += 1;
            self.state.send_replace(ShareState::Loading);
            (*generation, self.identifier())
        };

        let result = self.sync(session, title, &held).await;
        self.apply(generation, &held, result)
    }

    /// Record the outcome of activation `generation` unless it was superseded.
    ///
    /// The generation lock is held across the check and both writes, so a
    /// concurrent `deactivate` or `set_identifier` lands entirely before or
    /// entirely after.
    fn apply(&self, generation: u64, held: &str, result: Result<Outcome>) -> Activation {
        let current = self.lock_generation();
        if *current != generation {
            match &result {
                Ok(Outcome::Created(id)) => warn!(
                    "Discarding share record {} created by a superseded activation",
                    id
                ),
                _ => debug!("Discarding response of superseded share activation"),
            }
            return Activation::Discarded;
        }

        let state = match result {
            Ok(Outcome::Created(id)) => {
                let url = build_url(&self.base_location, &id);
                self.identifier.send_replace(id);
                ShareState::Ready(url)
            }
            Ok(Outcome::Updated) => ShareState::Ready(build_url(&self.base_location, held)),
            Err(e) => {
                error!("Failed to share diagram: {}", e);
                ShareState::Failed
            }
        };
        self.state.send_replace(state.clone());
        Activation::Completed(state)
    }

    fn lock_generation(&self) -> MutexGuard<'_, u64> {
        // The guarded value is a plain counter, so a poisoned lock is still usable.
        self.generation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    async fn sync(&self, session: &DiagramSession, title: &str, held: &str) -> Result<Outcome> {
        let content = DiagramSnapshot::build(session, title).to_json()?;
        if held.is_empty() {
            let id = self.store.create_record(&content).await?;
            Ok(Outcome::Created(id))
        } else {
            self.store.update_record(held, &content).await?;
            Ok(Outcome::Updated)
        }
    }

    /// Load the diagram shared under `identifier`.
    pub async fn load_shared(&self, identifier: &str) -> Result<DiagramSnapshot> {
        let content = self.store.fetch_record(identifier).await?;
        DiagramSnapshot::from_json(&content)
    }
}
