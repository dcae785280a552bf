use thiserror::Error as ThisError;
use uuid::Uuid;

pub const SHORT_UUID_LEN: usize = 7;
pub const FULL_UUID_LEN: usize = 32;
pub const LEGACY_UUID_LEN: usize = 62;
const HYPHENATED_UUID_LEN: usize = 36;

#[derive(ThisError, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("device uuid is empty")]
    Empty,
    #[error("invalid device uuid '{uuid}': unexpected character '{found}'")]
    InvalidCharacter { uuid: String, found: char },
    #[error("invalid device uuid '{uuid}': expected 7 to 62 hex characters, got {len}")]
    InvalidLength { uuid: String, len: usize },
    #[error("invalid device uuid '{0}': {1}")]
    Malformed(String, String),
}

/// Brings a device uuid to its canonical lowercase form.
///
/// Accepts short (7), full (32) and legacy (62) hex forms, any prefix length in
/// between, and the hyphenated RFC 4122 form which is folded to the 32-char
/// form. Short forms are kept short.
pub fn normalize_uuid(identifier: &str) -> Result<String, ValidationError> {
    if identifier.is_empty() {
        return Err(ValidationError::Empty);
    }

    if identifier.len() == HYPHENATED_UUID_LEN && identifier.contains('-') {
        return Uuid::try_parse(identifier)
            .map(|u| u.simple().to_string())
            .map_err(|e| ValidationError::Malformed(identifier.to_string(), e.to_string()));
    }

    if let Some(found) = identifier.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidCharacter {
            uuid: identifier.to_string(),
            found,
        });
    }

    let len = identifier.len();
    if !(SHORT_UUID_LEN..=LEGACY_UUID_LEN).contains(&len) {
        return Err(ValidationError::InvalidLength {
            uuid: identifier.to_string(),
            len,
        });
    }

    Ok(identifier.to_ascii_lowercase())
}

pub fn is_full_uuid(uuid: &str) -> bool {
    uuid.len() == FULL_UUID_LEN || uuid.len() == LEGACY_UUID_LEN
}
