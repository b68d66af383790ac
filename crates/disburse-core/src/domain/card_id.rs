use std::fmt::{Display, Formatter};

use serde::Deserialize;
use time::OffsetDateTime;

use crate::ValidationError;

/// Identifier assigned to a card by the board service.
///
/// The first 8 hex characters are the big-endian Unix timestamp at which the card was
/// created, a property of the service's object ids rather than of its API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn created_at(&self) -> Result<OffsetDateTime, ValidationError> {
        decode_timestamp(&self.0)
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Decodes the creation time embedded in the leading 8 hex characters of `id`.
pub fn decode_timestamp(id: &str) -> Result<OffsetDateTime, ValidationError> {
    let invalid = || ValidationError::InvalidCardId {
        value: id.to_owned(),
    };

    let prefix = id.get(..8).ok_or_else(invalid)?;
    let mut bytes = [0_u8; 4];
    hex::decode_to_slice(prefix, &mut bytes).map_err(|_| invalid())?;

    // u32 seconds always fall inside the representable range.
    OffsetDateTime::from_unix_timestamp(i64::from(u32::from_be_bytes(bytes)))
        .map_err(|_| invalid())
}
