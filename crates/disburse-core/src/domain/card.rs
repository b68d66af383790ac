use serde::Deserialize;
use time::OffsetDateTime;

use super::{ApplicantDetails, CardId, DisplayClock};
use crate::ValidationError;

/// One exported card: raw fields from the list response plus the derived fields
/// filled in by [`Card::inflate`](crate::enrich).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Card {
    pub id: CardId,
    #[serde(rename = "name")]
    pub title: String,
    #[serde(rename = "desc", default)]
    pub description: String,

    #[serde(skip)]
    pub details: ApplicantDetails,
    #[serde(skip)]
    pub amount_paid: i64,
    #[serde(skip)]
    pub fund_transfer_date: Option<OffsetDateTime>,
    #[serde(skip)]
    pub request_date: Option<OffsetDateTime>,
}

impl Card {
    pub const CSV_HEADER: [&'static str; 8] = [
        "Name",
        "Email",
        "Institution",
        "Location",
        "Amount Paid",
        "Reason",
        "Fund Transfer Date",
        "Request Date",
    ];

    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: CardId::new(id),
            title: title.into(),
            description: description.into(),
            details: ApplicantDetails::default(),
            amount_paid: 0,
            fund_transfer_date: None,
            request_date: None,
        }
    }

    /// Row matching [`Card::CSV_HEADER`].
    pub fn csv_row(&self, clock: DisplayClock) -> Result<[String; 8], ValidationError> {
        Ok([
            self.details.name.clone(),
            self.details.email.clone(),
            self.details.institution.clone(),
            self.details.location.clone(),
            self.amount_paid.to_string(),
            self.details.reason.clone(),
            clock.format_optional(self.fund_transfer_date)?,
            clock.format_optional(self.request_date)?,
        ])
    }
}
