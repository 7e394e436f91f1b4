//! Share links and copying them to the clipboard.

use crate::sync::ShareState;
use crate::{Result, SHARE_QUERY_PARAM, ShareError};
use tracing::warn;

/// Share URL for `identifier`, appended to the current page location.
///
/// Plain concatenation: the identifier is not validated or escaped.
pub fn build_url(base_location: &str, identifier: &str) -> String {
    format!("{base_location}?{SHARE_QUERY_PARAM}={identifier}")
}

/// Destination for copied share links.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// User-visible notification fired after a copy attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Copied,
    CopyFailed,
}

impl Notification {
    pub fn message(self) -> &'static str {
        match self {
            Notification::Copied => "Copied to clipboard",
            Notification::CopyFailed => "Oops! Something went wrong.",
        }
    }
}

/// Sink for user-visible notifications.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Outcome of [`LinkPresenter::copy_link`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
    /// No share URL is ready yet; nothing was copied.
    NotReady,
}

/// Copies share links and reports the result to the user.
///
/// Clipboard failures stay here: they produce a notification and never touch
/// the synchronizer's state.
pub struct LinkPresenter<C, N> {
    clipboard: C,
    notifier: N,
}

impl<C: Clipboard, N: Notifier> LinkPresenter<C, N> {
    pub fn new(clipboard: C, notifier: N) -> Self {
        Self {
            clipboard,
            notifier,
        }
    }

    /// Copy the URL of a ready share.
    pub fn copy_link(&mut self, state: &ShareState) -> CopyOutcome {
        let Some(url) = state.url() else {
            return CopyOutcome::NotReady;
        };
        self.copy_to_clipboard(url)
    }

    /// Copy `text` and notify the user either way.
    pub fn copy_to_clipboard(&mut self, text: &str) -> CopyOutcome {
        match self.clipboard.set_text(text) {
            Ok(()) => {
                self.notifier.notify(Notification::Copied);
                CopyOutcome::Copied
            }
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                self.notifier.notify(Notification::CopyFailed);
                CopyOutcome::Failed
            }
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}

/// Native clipboard via `arboard`.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().map_err(|e| ShareError::Clipboard(e.to_string()))?;
        Ok(Self { inner })
    }
}

#[cfg(feature = "system-clipboard")]
impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            // X11/Wayland need the source alive until a clipboard manager takes the data
            self.inner
                .set()
                .wait()
                .text(text)
                .map_err(|e| ShareError::Clipboard(e.to_string()))
        }
        #[cfg(not(target_os = "linux"))]
        {
            self.inner
                .set_text(text)
                .map_err(|e| ShareError::Clipboard(e.to_string()))
        }
    }
}

/// Clipboard that rejects every write. Used where no clipboard exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn set_text(&mut self, _text: &str) -> Result<()> {
        Err(ShareError::Clipboard("No clipboard available".to_string()))
    }
}
