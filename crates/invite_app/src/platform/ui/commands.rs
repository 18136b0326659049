use std::path::PathBuf;

use invite_core::{AppViewModel, CopyTarget, Mode, Msg, ShareChannel};

pub const HELP: &str = "\
Perintah:
  mode single|bulk        ganti mode
  name <nama>             isi nama tamu (single)
  guest <nama>            tambah satu nama ke daftar (bulk)
  guests clear            kosongkan daftar
  load <file>             isi daftar dari file, satu nama per baris
  generate                buat link untuk mode aktif
  preset <id>             pilih template pesan
  message <teks>          ubah teks pesan; \\n untuk baris baru, kosong = hapus
  copy [no]               salin pesan (no = nomor di daftar bulk)
  share wa|native [no]    bagikan pesan
  show | presets | help | quit";

/// One parsed line of the interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Send(Msg),
    Load(PathBuf),
    Show,
    Presets,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str, view: &AppViewModel) -> Command {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "" | "show" => Command::Show,
        "presets" => Command::Presets,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "mode" => match rest.to_ascii_lowercase().as_str() {
            "single" => Command::Send(Msg::ModeSelected(Mode::Single)),
            "bulk" => Command::Send(Msg::ModeSelected(Mode::Bulk)),
            _ => Command::Invalid("mode harus single atau bulk".to_string()),
        },
        "name" => Command::Send(Msg::NameChanged(rest.to_string())),
        "guest" if rest.is_empty() => Command::Invalid("guest butuh nama".to_string()),
        "guest" => Command::Send(Msg::BulkInputChanged(append_line(&view.bulk_input, rest))),
        "guests" if rest.eq_ignore_ascii_case("clear") => {
            Command::Send(Msg::BulkInputChanged(String::new()))
        }
        "load" if rest.is_empty() => Command::Invalid("load butuh path file".to_string()),
        "load" => Command::Load(PathBuf::from(rest)),
        "generate" => Command::Send(match view.mode {
            Mode::Single => Msg::GenerateSingle,
            Mode::Bulk => Msg::GenerateBulk,
        }),
        "preset" if rest.is_empty() => Command::Presets,
        "preset" => Command::Send(Msg::PresetSelected(rest.to_string())),
        "message" => Command::Send(Msg::MessageEdited(unescape(rest))),
        "copy" => match target(view, rest) {
            Ok(target) => Command::Send(Msg::DispatchRequested {
                target,
                channel: ShareChannel::Clipboard,
            }),
            Err(reason) => Command::Invalid(reason),
        },
        "share" => {
            let (channel_word, index) = match rest.split_once(char::is_whitespace) {
                Some((channel, index)) => (channel, index.trim()),
                None => (rest, ""),
            };
            let channel = match channel_word.to_ascii_lowercase().as_str() {
                "wa" => ShareChannel::DirectMessage,
                "native" => ShareChannel::SystemShare,
                _ => return Command::Invalid("share harus wa atau native".to_string()),
            };
            match target(view, index) {
                Ok(target) => Command::Send(Msg::DispatchRequested { target, channel }),
                Err(reason) => Command::Invalid(reason),
            }
        }
        other => Command::Invalid(format!("perintah tidak dikenal: {other}")),
    }
}

/// Row addressed by a copy/share command; bulk rows are numbered from 1.
fn target(view: &AppViewModel, index: &str) -> Result<CopyTarget, String> {
    match view.mode {
        Mode::Single => Ok(CopyTarget::Single),
        Mode::Bulk if index.is_empty() => Ok(CopyTarget::Bulk(0)),
        Mode::Bulk => match index.parse::<usize>() {
            Ok(number) if number >= 1 => Ok(CopyTarget::Bulk(number - 1)),
            _ => Err(format!("nomor tidak valid: {index}")),
        },
    }
}

fn append_line(existing: &str, line: &str) -> String {
    if existing.trim().is_empty() {
        line.to_string()
    } else {
        format!("{}\n{line}", existing.trim_end())
    }
}

fn unescape(text: &str) -> String {
    text.replace("\\n", "\n")
}
