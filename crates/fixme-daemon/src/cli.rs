//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use fixme_monitor::SettingToggle;

#[derive(Debug, Parser)]
#[command(name = "fixme", version, about = "Fix grammar and spelling of copied text")]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, env = "FIXME_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log filter (overrides the config; FIXME_LOG still wins).
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Watch the clipboard and fix new text (the default).
    Run {
        /// Fix the current clipboard once and exit.
        #[arg(long)]
        once: bool,
    },
    /// Classify text read from stdin as code or prose.
    Classify,
    /// Mask the URLs of text read from stdin.
    Mask,
    /// Change a persisted setting.
    Set {
        setting: SettingArg,
        #[arg(action = clap::ArgAction::Set)]
        value: bool,
    },
    /// Print the effective configuration.
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SettingArg {
    Enabled,
    Translate,
    SkipCode,
    Presentation,
    FilterApps,
}

impl From<SettingArg> for SettingToggle {
    fn from(arg: SettingArg) -> Self {
        match arg {
            SettingArg::Enabled => SettingToggle::Enabled,
            SettingArg::Translate => SettingToggle::TranslateToEnglish,
            SettingArg::SkipCode => SettingToggle::SkipCode,
            SettingArg::Presentation => SettingToggle::PresentationMode,
            SettingArg::FilterApps => SettingToggle::FilterApps,
        }
    }
}
