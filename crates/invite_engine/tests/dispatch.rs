use std::sync::{Arc, Mutex};
use std::time::Duration;

use invite_core::{CopyTarget, Effect};
use invite_engine::{
    run_effect, ClipboardSink, EngineEvent, EngineHandle, LinkOpener, ShareError, ShareOutcome,
    SharePayload, ShareSink, SinkError, Sinks,
};
use pretty_assertions::assert_eq;

#[derive(Default)]
struct MemoryClipboard {
    texts: Mutex<Vec<String>>,
    fail: bool,
}

impl ClipboardSink for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), SinkError> {
        if self.fail {
            return Err(SinkError::Clipboard("permission denied".to_string()));
        }
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingOpener {
    urls: Mutex<Vec<String>>,
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> Result<(), SinkError> {
        self.urls.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

struct ScriptedShare {
    result: Result<(), ShareError>,
    shared: Mutex<Vec<SharePayload>>,
}

impl ScriptedShare {
    fn new(result: Result<(), ShareError>) -> Self {
        Self {
            result,
            shared: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ShareSink for ScriptedShare {
    async fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        self.shared.lock().unwrap().push(payload.clone());
        self.result.clone()
    }
}

fn payload() -> SharePayload {
    SharePayload {
        title: "Undangan Pernikahan".to_string(),
        text: "Undangan untuk Ayu:\nhttps://inv.example/?nama=Ayu".to_string(),
        url: "https://inv.example/?nama=Ayu".to_string(),
    }
}

#[tokio::test]
async fn share_without_native_capability_copies_text() {
    let clipboard = Arc::new(MemoryClipboard::default());
    let sinks = Sinks::new(clipboard.clone(), None, Arc::new(RecordingOpener::default()));

    let outcome = sinks.share(&payload()).await.unwrap();

    assert_eq!(outcome, ShareOutcome::CopiedInstead);
    assert_eq!(
        *clipboard.texts.lock().unwrap(),
        vec!["Undangan untuk Ayu:\nhttps://inv.example/?nama=Ayu".to_string()]
    );
}

#[tokio::test]
async fn dismissed_share_sheet_is_not_an_error() {
    let clipboard = Arc::new(MemoryClipboard::default());
    let share = Arc::new(ScriptedShare::new(Err(ShareError::Cancelled)));
    let sinks = Sinks::new(
        clipboard.clone(),
        Some(share.clone() as Arc<dyn ShareSink>),
        Arc::new(RecordingOpener::default()),
    );

    let outcome = sinks.share(&payload()).await.unwrap();

    assert_eq!(outcome, ShareOutcome::Dismissed);
    assert_eq!(*share.shared.lock().unwrap(), vec![payload()]);
    assert!(clipboard.texts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn failed_share_propagates() {
    let share = Arc::new(ScriptedShare::new(Err(ShareError::Failed("boom".to_string()))));
    let sinks = Sinks::new(
        Arc::new(MemoryClipboard::default()),
        Some(share as Arc<dyn ShareSink>),
        Arc::new(RecordingOpener::default()),
    );

    assert_eq!(
        sinks.share(&payload()).await,
        Err(SinkError::Share("boom".to_string()))
    );
}

#[tokio::test]
async fn run_effect_reports_clipboard_target_and_failures() {
    let ok = Sinks::new(
        Arc::new(MemoryClipboard::default()),
        None,
        Arc::new(RecordingOpener::default()),
    );
    let event = run_effect(
        &ok,
        Effect::WriteClipboard {
            target: Some(CopyTarget::Bulk(2)),
            text: "hi".to_string(),
        },
    )
    .await;
    assert_eq!(
        event,
        EngineEvent::ClipboardWritten {
            target: Some(CopyTarget::Bulk(2))
        }
    );

    let failing = Sinks::new(
        Arc::new(MemoryClipboard {
            fail: true,
            ..MemoryClipboard::default()
        }),
        None,
        Arc::new(RecordingOpener::default()),
    );
    let event = run_effect(
        &failing,
        Effect::WriteClipboard {
            target: None,
            text: "hi".to_string(),
        },
    )
    .await;
    assert_eq!(
        event,
        EngineEvent::Failed(SinkError::Clipboard("permission denied".to_string()))
    );
}

#[tokio::test]
async fn open_external_goes_to_opener() {
    let opener = Arc::new(RecordingOpener::default());
    let sinks = Sinks::new(Arc::new(MemoryClipboard::default()), None, opener.clone());

    let event = run_effect(
        &sinks,
        Effect::OpenExternal {
            url: "https://wa.me/?text=hi".to_string(),
        },
    )
    .await;

    assert_eq!(
        event,
        EngineEvent::LinkOpened {
            url: "https://wa.me/?text=hi".to_string()
        }
    );
    assert_eq!(*opener.urls.lock().unwrap(), vec!["https://wa.me/?text=hi".to_string()]);
}

#[test]
fn newer_copy_reset_supersedes_pending_timer() {
    let sinks = Sinks::new(
        Arc::new(MemoryClipboard::default()),
        None,
        Arc::new(RecordingOpener::default()),
    );
    let engine = EngineHandle::new(sinks).unwrap();

    engine.enqueue(Effect::ScheduleCopyReset {
        ticket: 1,
        after: Duration::from_millis(200),
    });
    engine.enqueue(Effect::ScheduleCopyReset {
        ticket: 2,
        after: Duration::from_millis(20),
    });

    assert_eq!(
        engine.recv_timeout(Duration::from_secs(2)),
        Some(EngineEvent::CopyResetDue { ticket: 2 })
    );
    assert_eq!(engine.recv_timeout(Duration::from_millis(400)), None);
}
