use std::io::{self, IsTerminal, Read};

use log::{debug, warn};
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum InputError {
    #[error("could not read from stdin: {0}")]
    Read(#[from] io::Error),
    #[error("stdin is not valid utf-8 text: {0}")]
    NotUtf8(#[from] std::string::FromUtf8Error),
}

/// Returns `arg` when it was given, otherwise everything on stdin.
///
/// An empty argument still counts as given. Stdin content is returned
/// byte-for-byte, trailing newlines included; reading blocks until stdin is
/// closed.
pub fn resolve_arg_or_stdin(arg: Option<String>) -> Result<String, InputError> {
    let stdin = io::stdin();
    if arg.is_none() && stdin.is_terminal() {
        warn!("reading from stdin, press Ctrl-D to finish");
    }
    resolve_arg_or_reader(arg, stdin.lock())
}

/// Same as [`resolve_arg_or_stdin`] with an explicit fallback reader.
pub fn resolve_arg_or_reader<R: Read>(arg: Option<String>, reader: R) -> Result<String, InputError> {
    match arg {
        Some(value) => Ok(value),
        None => read_verbatim(reader),
    }
}

fn read_verbatim<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    debug!("read {} bytes from input", buffer.len());
    Ok(String::from_utf8(buffer)?)
}
