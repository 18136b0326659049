use std::sync::Arc;

use crate::{ShareError, SharePayload};

/// A platform share sheet.
#[async_trait::async_trait]
pub trait ShareSink: Send + Sync {
    async fn share(&self, payload: &SharePayload) -> Result<(), ShareError>;
}

/// Native share capability for the current platform, if there is one.
///
/// Desktop terminals have no share sheet, so this is `None` and callers take
/// the clipboard fallback.
pub fn native_share() -> Option<Arc<dyn ShareSink>> {
    None
}
