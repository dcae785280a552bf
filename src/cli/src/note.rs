use clap::Args;
use libs::{
    clients::{DeviceNotes, RemoteError},
    utils::{
        cli::{resolve_arg_or_stdin, InputError},
        normalization::{normalize_uuid, ValidationError},
    },
};
use log::{debug, info};
use thiserror::Error as ThisError;


pub const NOTE_LONG_ABOUT: &str = "Set a device note.

Use this command to set or update a device note.

If the note argument isn't passed, the tool attempts to read from `stdin`.";

pub const NOTE_EXAMPLES: &str = "Examples:
  $ devctl note \"My useful note\" --device 7cf02a6
  $ cat note.txt | devctl note --device 7cf02a6";

#[derive(Args, Debug, Clone)]
pub struct NoteCmd {
    /// note content. If omitted, read from stdin.
    pub note: Option<String>,

    /// device uuid
    #[arg(short, long, value_name = "UUID")]
    pub device: String,
}

#[derive(ThisError, Debug)]
pub enum NoteError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

pub async fn run_note_cmd<C: DeviceNotes>(cmd: &NoteCmd, client: &C) -> Result<(), NoteError> {
    let note = resolve_arg_or_stdin(cmd.note.clone())?;
    set_device_note(client, &cmd.device, &note).await
}

/// Normalizes `device` and performs a single `set_note` call.
///
/// A rejected identifier never reaches `client`. Remote failures are returned
/// as they come, without retry.
pub async fn set_device_note<C: DeviceNotes>(
    client: &C,
    device: &str,
    note: &str,
) -> Result<(), NoteError> {
    let uuid = normalize_uuid(device)?;
    debug!("setting a {} byte note on device {}", note.len(), uuid);

    client.set_note(&uuid, note).await?;
    info!("note updated for device {}", uuid);
    Ok(())
}
