use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(
    name = "invite_app",
    version,
    about = "Personalized invitation links, QR codes and share messages"
)]
pub struct Cli {
    /// Invitation page address, e.g. https://example.org/invite
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// RON config file (defaults to ./.invite_config.ron when present)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Where log records are written
    #[arg(long, value_enum, default_value_t = LogArg::File, global = true)]
    pub log: LogArg,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// One guest: link, QR code and message
    Single(SingleArgs),
    /// Many guests, one name per line
    Bulk(BulkArgs),
    /// List the message presets
    Presets,
    /// Line-oriented session mirroring the form (default)
    Interactive,
}

#[derive(Args, Debug, Clone, Default)]
pub struct TemplateArgs {
    /// Message preset id (see `presets`)
    #[arg(long, value_name = "ID")]
    pub preset: Option<String>,

    /// Message text with {NAMA} and {LINK} placeholders; overrides the preset text
    #[arg(long, value_name = "TEXT")]
    pub message: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct QrArgs {
    /// Write one SVG QR code per guest into this directory
    #[arg(long, value_name = "DIR")]
    pub qr_dir: Option<PathBuf>,

    /// Do not print QR codes to the terminal
    #[arg(long)]
    pub no_qr: bool,
}

#[derive(Args, Debug)]
pub struct SingleArgs {
    /// Guest or couple name
    pub name: String,

    #[command(flatten)]
    pub template: TemplateArgs,

    #[command(flatten)]
    pub qr: QrArgs,

    /// Copy the composed message to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Share the composed message
    #[arg(long, value_enum, value_name = "CHANNEL")]
    pub share: Option<ShareArg>,
}

#[derive(Args, Debug)]
pub struct BulkArgs {
    /// File with one guest name per line (reads stdin when omitted)
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub template: TemplateArgs,

    #[command(flatten)]
    pub qr: QrArgs,

    /// Copy the message of the given entry (1-based) to the clipboard
    #[arg(long, value_name = "INDEX")]
    pub copy: Option<usize>,

    /// Print name, url and message as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareArg {
    /// WhatsApp deep link with the message pre-filled
    Wa,
    /// System share sheet, or the clipboard when there is none
    Native,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogArg {
    File,
    Terminal,
    Both,
    Off,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_single_with_share() {
        let cli = Cli::try_parse_from([
            "invite_app",
            "--base-url",
            "https://inv.example/",
            "single",
            "Made & Ayu",
            "--preset",
            "indo_formal",
            "--share",
            "wa",
        ])
        .unwrap();

        assert_eq!(cli.base_url.as_deref(), Some("https://inv.example/"));
        match cli.command {
            Some(Command::Single(args)) => {
                assert_eq!(args.name, "Made & Ayu");
                assert_eq!(args.template.preset.as_deref(), Some("indo_formal"));
                assert_eq!(args.share, Some(ShareArg::Wa));
                assert!(!args.copy);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::try_parse_from(["invite_app"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.log, LogArg::File);
    }
}
