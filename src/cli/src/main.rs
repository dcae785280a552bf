use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use libs::{
    clients::{ApiClient, RemoteError},
    utils::{config::ConfigError, logger::InitError, setup_logger},
};
use log::debug;
use note::{NoteCmd, NoteError};
use settings::Settings;
use thiserror::Error as ThisError;

pub mod note;
pub mod settings;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Set device api server adress
    #[arg(short, long, value_name = "ADRESS")]
    target: Option<String>,

    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(long, action = clap::ArgAction::Count)]
    debug: u8,

    #[command(subcommand)]
    command: DevCmds,
}

#[derive(Subcommand, Debug)]
enum DevCmds {
    /// set a device note
    #[command(long_about = note::NOTE_LONG_ABOUT, after_help = note::NOTE_EXAMPLES)]
    Note(NoteCmd),
}

#[derive(ThisError, Debug)]
enum Error {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid logger configuration: {0}")]
    Logger(#[from] InitError),
    #[error(transparent)]
    Client(#[from] RemoteError),
    #[error(transparent)]
    Note(#[from] NoteError),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Error> {
    let settings = Settings::load(cli.config.as_ref(), cli.target.as_deref(), cli.debug)?;
    setup_logger(&settings.log_level)?;
    debug!("{:?}", settings);

    match &cli.command {
        DevCmds::Note(cmd) => {
            let client = ApiClient::new(&settings.api())?;
            note::run_note_cmd(cmd, &client).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse() {
        let cli = Cli::try_parse_from([
            "devctl",
            "--target",
            "api.local:80",
            "--config",
            "extra.yaml",
            "--debug",
            "--debug",
            "note",
            "hi",
            "-d",
            "7cf02a6",
        ])
        .expect("should parse");
        assert_eq!(cli.target.as_deref(), Some("api.local:80"));
        assert_eq!(cli.config, Some(PathBuf::from("extra.yaml")));
        assert_eq!(cli.debug, 2);
        let DevCmds::Note(cmd) = cli.command;
        assert_eq!(cmd.note.as_deref(), Some("hi"));
        assert_eq!(cmd.device, "7cf02a6");
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["devctl"]).is_err());
    }
}
