use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use invite_core::{
    compose_message, find_preset, update, AppState, CopyTarget, InviteEntry, Mode, Msg,
    ShareChannel, BULK_QR_SIZE, SINGLE_QR_SIZE,
};
use invite_engine::{export_qr_codes, Sinks};
use invite_logging::{invite_debug, invite_info, invite_warn};
use serde::Serialize;

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::{render, render_presets, QrDisplay};
use crate::cli::{BulkArgs, QrArgs, ShareArg, SingleArgs, TemplateArgs};

/// Polling interval of the interactive loop.
const TICK: Duration = Duration::from_millis(50);
/// Upper bound for waiting on outstanding sink operations before exit.
const SINK_TIMEOUT: Duration = Duration::from_secs(10);

/// Owns the form state and routes messages through `update` and the effect runner.
struct Session {
    state: AppState,
    runner: EffectRunner,
}

impl Session {
    fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Self::with_sinks(config.base_url.clone(), Sinks::system())
    }

    fn with_sinks(base_url: String, sinks: Sinks) -> anyhow::Result<Self> {
        let runner = EffectRunner::new(sinks).context("failed to start sink runtime")?;
        Ok(Self {
            state: AppState::with_base_url(base_url),
            runner,
        })
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.enqueue(effects);
    }

    /// Applies engine completions that are already available.
    fn pump(&mut self) -> Vec<String> {
        let mut notices = Vec::new();
        while let Some(completion) = self.runner.try_recv() {
            notices.extend(completion.notice);
            self.dispatch(completion.msg);
        }
        notices
    }

    /// Blocks until every sink operation has reported back, or the timeout passes.
    fn settle(&mut self) -> Vec<String> {
        let mut notices = Vec::new();
        while self.runner.in_flight() > 0 {
            let Some(completion) = self.runner.recv_timeout(SINK_TIMEOUT) else {
                invite_warn!("{} sink operations did not finish", self.runner.in_flight());
                break;
            };
            notices.extend(completion.notice);
            self.dispatch(completion.msg);
        }
        notices
    }

    /// Renders the form again if anything changed since the last render.
    fn redraw(&mut self, qr: QrDisplay) -> Option<String> {
        self.state
            .consume_dirty()
            .then(|| render(&self.state.view(), qr))
    }

    fn message_for(&self, entry: &InviteEntry) -> String {
        let composer = self.state.composer();
        compose_message(
            &entry.name,
            &entry.url,
            &composer.selected_preset_id,
            &composer.custom_message,
        )
    }

    fn apply_template(&mut self, template: &TemplateArgs) -> anyhow::Result<()> {
        if let Some(id) = &template.preset {
            if find_preset(id).is_none() {
                bail!("unknown preset {id:?}; run `invite_app presets` to list them");
            }
            self.dispatch(Msg::PresetSelected(id.clone()));
        }
        if let Some(text) = &template.message {
            self.dispatch(Msg::MessageEdited(text.clone()));
        }
        Ok(())
    }

    /// Dispatches one copy/share action and waits for the sink.
    fn dispatch_and_wait(
        &mut self,
        target: CopyTarget,
        channel: ShareChannel,
    ) -> anyhow::Result<()> {
        self.dispatch(Msg::DispatchRequested { target, channel });
        for notice in self.settle() {
            println!("{notice}");
        }
        match self.state.view().last_error {
            Some(reason) => Err(anyhow!(reason)),
            None => Ok(()),
        }
    }
}

pub fn print_presets() {
    print!("{}", render_presets(&AppState::new().view()));
}

fn qr_display(args: &QrArgs) -> QrDisplay {
    if args.no_qr {
        QrDisplay::Hidden
    } else {
        QrDisplay::Terminal
    }
}

fn export_qr(dir: Option<&Path>, entries: &[InviteEntry], size_px: u32) -> anyhow::Result<()> {
    let Some(dir) = dir else {
        return Ok(());
    };
    let summary = export_qr_codes(dir, entries, size_px)
        .with_context(|| format!("failed to export QR codes to {}", dir.display()))?;
    println!("{} QR code ditulis ke {}", summary.written.len(), dir.display());
    Ok(())
}

pub fn run_single(config: &AppConfig, args: SingleArgs) -> anyhow::Result<()> {
    let mut session = Session::new(config)?;
    session.apply_template(&args.template)?;
    session.dispatch(Msg::NameChanged(args.name));
    session.dispatch(Msg::GenerateSingle);

    let view = session.state.view();
    print!("{}", render(&view, qr_display(&args.qr)));
    let Some(entry) = session.state.single_invite().cloned() else {
        invite_debug!("single run produced no link");
        return Ok(());
    };
    println!("\n{}", session.message_for(&entry));

    export_qr(args.qr.qr_dir.as_deref(), std::slice::from_ref(&entry), SINGLE_QR_SIZE)?;

    if args.copy {
        session.dispatch_and_wait(CopyTarget::Single, ShareChannel::Clipboard)?;
    }
    if let Some(share) = args.share {
        let channel = match share {
            ShareArg::Wa => ShareChannel::DirectMessage,
            ShareArg::Native => ShareChannel::SystemShare,
        };
        session.dispatch_and_wait(CopyTarget::Single, channel)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct MessageRow<'a> {
    name: &'a str,
    url: &'a str,
    message: String,
}

pub fn run_bulk(config: &AppConfig, args: BulkArgs) -> anyhow::Result<()> {
    let input = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read guest list {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("failed to read guest list from stdin")?,
    };

    let mut session = Session::new(config)?;
    session.apply_template(&args.template)?;
    session.dispatch(Msg::ModeSelected(Mode::Bulk));
    session.dispatch(Msg::BulkInputChanged(input));
    session.dispatch(Msg::GenerateBulk);

    let entries = session.state.bulk_invites().to_vec();
    if args.json {
        let rows: Vec<MessageRow<'_>> = entries
            .iter()
            .map(|entry| MessageRow {
                name: &entry.name,
                url: &entry.url,
                message: session.message_for(entry),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        print!("{}", render(&session.state.view(), qr_display(&args.qr)));
        for (position, entry) in entries.iter().enumerate() {
            println!(
                "\n--- {}. {} ---\n{}",
                position + 1,
                entry.name,
                session.message_for(entry)
            );
        }
    }

    export_qr(args.qr.qr_dir.as_deref(), &entries, BULK_QR_SIZE)?;

    if let Some(number) = args.copy {
        let target = bulk_copy_target(number, entries.len())?;
        session.dispatch_and_wait(target, ShareChannel::Clipboard)?;
    }
    Ok(())
}

/// Maps a 1-based `--copy` row number onto the bulk list.
fn bulk_copy_target(number: usize, rows: usize) -> anyhow::Result<CopyTarget> {
    if number == 0 || number > rows {
        bail!("--copy {number} is out of range (1..={rows})");
    }
    Ok(CopyTarget::Bulk(number - 1))
}

pub fn run_interactive(config: &AppConfig) -> anyhow::Result<()> {
    let mut session = Session::new(config)?;
    let (line_tx, line_rx) = mpsc::channel::<Option<String>>();

    thread::spawn(move || {
        for line in io::stdin().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(Some(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    invite_warn!("stdin read failed: {}", err);
                    break;
                }
            }
        }
        let _ = line_tx.send(None);
    });

    println!("{HELP}\n");
    print!("{}", render(&session.state.view(), QrDisplay::Terminal));
    session.state.consume_dirty();
    prompt();

    loop {
        let notices = session.pump();
        for notice in &notices {
            println!("{notice}");
        }
        // Copy feedback arrives here, after the command that caused it.
        let redrawn = session.redraw(QrDisplay::Terminal);
        if let Some(text) = &redrawn {
            print!("{text}");
        }
        if !notices.is_empty() || redrawn.is_some() {
            prompt();
        }

        let line = match line_rx.recv_timeout(TICK) {
            Ok(Some(line)) => line,
            Ok(None) | Err(mpsc::RecvTimeoutError::Disconnected) => break,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
        };

        let view = session.state.view();
        match parse_command(&line, &view) {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => print!("{}", render(&view, QrDisplay::Terminal)),
            Command::Presets => print!("{}", render_presets(&view)),
            Command::Invalid(reason) => println!("{reason}"),
            Command::Load(path) => match fs::read_to_string(&path) {
                Ok(content) => {
                    session.dispatch(Msg::BulkInputChanged(content));
                    session.state.consume_dirty();
                    println!("Daftar dimuat dari {}", path.display());
                }
                Err(err) => println!("Gagal membaca {}: {err}", path.display()),
            },
            Command::Send(msg) => {
                let rerender = matches!(
                    msg,
                    Msg::GenerateSingle | Msg::GenerateBulk | Msg::ModeSelected(_)
                );
                session.dispatch(msg);
                if session.state.consume_dirty() && rerender {
                    print!("{}", render(&session.state.view(), QrDisplay::Terminal));
                }
            }
        }
        prompt();
    }

    for notice in session.settle() {
        println!("{notice}");
    }
    invite_info!("interactive session ended");
    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = io::stdout().flush();
}
