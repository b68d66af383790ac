use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

use crate::ValidationError;

/// `DD Mon YY HH:MM`, e.g. `27 Mar 20 00:15`.
const DISPLAY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day] [month repr:short] [year repr:last_two] [hour]:[minute]");

const OFFSET_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

/// Renders every date column of the export in one fixed offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayClock {
    offset: UtcOffset,
}

impl Default for DisplayClock {
    fn default() -> Self {
        Self::utc()
    }
}

impl DisplayClock {
    pub const fn utc() -> Self {
        Self {
            offset: UtcOffset::UTC,
        }
    }

    pub const fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Fails when shifting into the display offset leaves the supported year range.
    pub fn format(self, value: OffsetDateTime) -> Result<String, ValidationError> {
        let unrepresentable = || ValidationError::UnrepresentableDate {
            value: value.to_string(),
        };

        value
            .checked_to_offset(self.offset)
            .ok_or_else(unrepresentable)?
            .format(DISPLAY_FORMAT)
            .map_err(|_| unrepresentable())
    }

    /// A missing date renders as an empty cell.
    pub fn format_optional(
        self,
        value: Option<OffsetDateTime>,
    ) -> Result<String, ValidationError> {
        value
            .map(|value| self.format(value))
            .transpose()
            .map(Option::unwrap_or_default)
    }
}

/// Parses `+HH:MM` / `-HH:MM`, or `UTC` / `Z`.
pub fn parse_utc_offset(input: &str) -> Result<UtcOffset, ValidationError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
        return Ok(UtcOffset::UTC);
    }

    UtcOffset::parse(trimmed, OFFSET_FORMAT).map_err(|_| ValidationError::InvalidUtcOffset {
        value: input.to_owned(),
    })
}
