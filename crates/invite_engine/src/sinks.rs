use std::sync::Arc;

use invite_logging::{invite_debug, invite_info};

use crate::clipboard::{ClipboardSink, SystemClipboard};
use crate::opener::{LinkOpener, SystemOpener};
use crate::share::{native_share, ShareSink};
use crate::{ShareError, ShareOutcome, SharePayload, SinkError};

/// The external collaborators copy/share actions are handed to.
#[derive(Clone)]
pub struct Sinks {
    clipboard: Arc<dyn ClipboardSink>,
    share: Option<Arc<dyn ShareSink>>,
    opener: Arc<dyn LinkOpener>,
}

impl Sinks {
    pub fn new(
        clipboard: Arc<dyn ClipboardSink>,
        share: Option<Arc<dyn ShareSink>>,
        opener: Arc<dyn LinkOpener>,
    ) -> Self {
        Self {
            clipboard,
            share,
            opener,
        }
    }

    /// Sinks for the running platform.
    pub fn system() -> Self {
        Self::new(
            Arc::new(SystemClipboard::new()),
            native_share(),
            Arc::new(SystemOpener),
        )
    }

    pub fn copy(&self, text: &str) -> Result<(), SinkError> {
        self.clipboard.write_text(text)?;
        invite_debug!("copied {} bytes to clipboard", text.len());
        Ok(())
    }

    pub fn open_link(&self, url: &str) -> Result<(), SinkError> {
        invite_info!("opening external link url_len={}", url.len());
        self.opener.open(url)
    }

    /// Shares through the native sheet, or copies the text when there is none.
    ///
    /// A dismissed sheet resolves to `ShareOutcome::Dismissed`.
    pub async fn share(&self, payload: &SharePayload) -> Result<ShareOutcome, SinkError> {
        let Some(share) = &self.share else {
            self.copy(&payload.text)?;
            return Ok(ShareOutcome::CopiedInstead);
        };
        match share.share(payload).await {
            Ok(()) => Ok(ShareOutcome::Shared),
            Err(ShareError::Cancelled) => {
                invite_debug!("share sheet dismissed");
                Ok(ShareOutcome::Dismissed)
            }
            Err(ShareError::Failed(reason)) => Err(SinkError::Share(reason)),
        }
    }
}
