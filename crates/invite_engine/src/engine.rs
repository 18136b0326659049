use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use invite_core::Effect;
use invite_logging::{invite_debug, invite_warn};
use tokio::runtime::Runtime;
use tokio::task::JoinHandle;

use crate::{EngineEvent, SharePayload, Sinks};

/// Runs effects against the sinks on a background Tokio runtime.
///
/// Results come back as `EngineEvent`s; nothing here blocks the caller.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<Effect>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(sinks: Sinks) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<Effect>();
        let (event_tx, event_rx) = mpsc::channel();
        let runtime = Runtime::new()?;

        thread::spawn(move || {
            // Only one copy-feedback timer is live; a newer one aborts the older.
            let mut pending_reset: Option<JoinHandle<()>> = None;
            while let Ok(effect) = cmd_rx.recv() {
                let is_timer = matches!(effect, Effect::ScheduleCopyReset { .. });
                let sinks = sinks.clone();
                let event_tx = event_tx.clone();
                let task = runtime.spawn(async move {
                    let event = run_effect(&sinks, effect).await;
                    let _ = event_tx.send(event);
                });
                if is_timer {
                    if let Some(previous) = pending_reset.replace(task) {
                        previous.abort();
                    }
                }
            }
            invite_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx, event_rx })
    }

    pub fn enqueue(&self, effect: Effect) {
        if self.cmd_tx.send(effect).is_err() {
            invite_warn!("engine thread is gone; effect dropped");
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

/// Executes one sink effect and reports how it ended.
pub async fn run_effect(sinks: &Sinks, effect: Effect) -> EngineEvent {
    let result = match effect {
        Effect::WriteClipboard { target, text } => sinks
            .copy(&text)
            .map(|()| EngineEvent::ClipboardWritten { target }),
        Effect::OpenExternal { url } => sinks
            .open_link(&url)
            .map(|()| EngineEvent::LinkOpened { url }),
        Effect::NativeShare { title, text, url } => sinks
            .share(&SharePayload { title, text, url })
            .await
            .map(EngineEvent::ShareFinished),
        Effect::ScheduleCopyReset { ticket, after } => {
            tokio::time::sleep(after).await;
            Ok(EngineEvent::CopyResetDue { ticket })
        }
    };
    result.unwrap_or_else(|err| {
        invite_warn!("sink failed: {}", err);
        EngineEvent::Failed(err)
    })
}
