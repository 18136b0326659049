use crate::SinkError;

/// Opens a URL in a new browser tab or the registered app.
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<(), SinkError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), SinkError> {
        open::that(url).map_err(|e| SinkError::Open(e.to_string()))
    }
}
