use std::time::Duration;

use invite_core::{Effect, Msg};
use invite_engine::{EngineEvent, EngineHandle, ShareOutcome, Sinks};
use invite_logging::{invite_debug, invite_info};

/// Forwards effects to the engine and turns its events back into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    in_flight: usize,
}

impl EffectRunner {
    pub fn new(sinks: Sinks) -> std::io::Result<Self> {
        Ok(Self {
            engine: EngineHandle::new(sinks)?,
            in_flight: 0,
        })
    }

    pub fn enqueue(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match &effect {
                Effect::ScheduleCopyReset { ticket, after } => {
                    invite_debug!("ScheduleCopyReset ticket={} after={:?}", ticket, after);
                }
                Effect::WriteClipboard { target, text } => {
                    invite_info!("WriteClipboard target={:?} text_len={}", target, text.len());
                    self.in_flight += 1;
                }
                Effect::OpenExternal { url } => {
                    invite_info!("OpenExternal url_len={}", url.len());
                    self.in_flight += 1;
                }
                Effect::NativeShare { url, .. } => {
                    invite_info!("NativeShare url={}", url);
                    self.in_flight += 1;
                }
            }
            self.engine.enqueue(effect);
        }
    }

    /// Sink operations that have not reported back yet. Timers are not counted.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn try_recv(&mut self) -> Option<Completion> {
        let event = self.engine.try_recv()?;
        Some(self.complete(event))
    }

    pub fn recv_timeout(&mut self, timeout: Duration) -> Option<Completion> {
        let event = self.engine.recv_timeout(timeout)?;
        Some(self.complete(event))
    }

    fn complete(&mut self, event: EngineEvent) -> Completion {
        if !matches!(event, EngineEvent::CopyResetDue { .. }) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        Completion {
            notice: notice(&event),
            msg: map_event(event),
        }
    }
}

/// A finished engine event: the message for `update` plus an optional status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub msg: Msg,
    pub notice: Option<String>,
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ClipboardWritten {
            target: Some(target),
        } => Msg::CopyConfirmed(target),
        EngineEvent::ClipboardWritten { target: None }
        | EngineEvent::ShareFinished(_)
        | EngineEvent::LinkOpened { .. } => Msg::NoOp,
        EngineEvent::CopyResetDue { ticket } => Msg::CopyFeedbackExpired { ticket },
        EngineEvent::Failed(err) => Msg::SinkFailed(err.to_string()),
    }
}

fn notice(event: &EngineEvent) -> Option<String> {
    let text = match event {
        EngineEvent::ClipboardWritten { .. } => "Pesan disalin ke clipboard.",
        EngineEvent::ShareFinished(ShareOutcome::Shared) => "Pesan dibagikan.",
        EngineEvent::ShareFinished(ShareOutcome::CopiedInstead) => {
            "Fitur share tidak tersedia; pesan disalin ke clipboard."
        }
        EngineEvent::ShareFinished(ShareOutcome::Dismissed) => return None,
        EngineEvent::LinkOpened { .. } => "WhatsApp dibuka di browser.",
        EngineEvent::CopyResetDue { .. } | EngineEvent::Failed(_) => return None,
    };
    Some(text.to_string())
}
