//! Diagram sharing for drawDB.
//!
//! Serializes a diagram into a snapshot, stores it as a gist, and turns the
//! gist id into a share link. The first share creates the record; every
//! later share overwrites it.

pub mod client;
pub mod config;
pub mod credential;
pub mod database;
pub mod error;
pub mod link;
pub mod model;
pub mod snapshot;
pub mod sync;

pub use client::{GistClient, RecordId, RemoteDocumentStore};
pub use config::ShareConfig;
pub use credential::{Credential, FileSettings, MemorySettings, SettingsStore};
pub use database::{DatabaseEngine, EngineCapabilities};
pub use error::{Result, ShareError};
pub use link::{Clipboard, CopyOutcome, LinkPresenter, NoClipboard, Notification, Notifier, build_url};
pub use snapshot::{DiagramSession, DiagramSnapshot};
pub use sync::{Activation, ShareState, ShareSynchronizer};

#[cfg(feature = "system-clipboard")]
pub use link::SystemClipboard;

/// Default document store API.
pub const DEFAULT_GIST_API: &str = "https://api.github.com";

/// Default page location share links point at.
pub const DEFAULT_SHARE_LOCATION: &str = "https://drawdb.app/editor";

/// Name of the content blob inside a share record.
pub const SHARE_FILENAME: &str = "share.json";

/// Description stored on every share record.
pub const SHARE_DESCRIPTION: &str = "drawDB diagram";

/// Pinned gist API version.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// Query parameter carrying the record id in share links.
pub const SHARE_QUERY_PARAM: &str = "shareId";

/// Synchronizer wired to the gist API.
///
/// The credential is resolved by the caller; see [`Credential::resolve`].
pub fn gist_synchronizer(
    config: &ShareConfig,
    credential: Option<Credential>,
    identifier: impl Into<String>,
) -> Result<ShareSynchronizer<GistClient>> {
    let client = GistClient::new(config, credential)?;
    Ok(ShareSynchronizer::new(
        client,
        config.base_location.clone(),
        identifier,
    ))
}
