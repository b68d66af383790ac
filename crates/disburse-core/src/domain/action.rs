use serde::Deserialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::ValidationError;

/// Activity-log entry for a card.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CardAction {
    pub id: String,
    #[serde(rename = "type")]
    pub action_type: String,
    pub date: String,
    #[serde(default)]
    pub data: CardActionData,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CardActionData {
    #[serde(rename = "listBefore", default)]
    pub list_before: Option<ListRef>,
    #[serde(rename = "listAfter", default)]
    pub list_after: Option<ListRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl CardAction {
    pub const UPDATE_CARD: &'static str = "updateCard";

    /// Whether this entry records the card being moved into `list_id`.
    pub fn moved_into(&self, list_id: &str) -> bool {
        self.action_type == Self::UPDATE_CARD
            && self
                .data
                .list_after
                .as_ref()
                .is_some_and(|list| list.id == list_id)
    }

    pub fn occurred_at(&self) -> Result<OffsetDateTime, ValidationError> {
        OffsetDateTime::parse(&self.date, &Rfc3339).map_err(|_| {
            ValidationError::InvalidActionDate {
                value: self.date.clone(),
            }
        })
    }
}

/// Time of the last entry, in response order, that moved the card into `list_id`.
///
/// Entries are not sorted: the service's ordering decides which match wins.
pub fn last_move_into(
    actions: &[CardAction],
    list_id: &str,
) -> Result<Option<OffsetDateTime>, ValidationError> {
    let mut moved_at = None;
    for action in actions.iter().filter(|action| action.moved_into(list_id)) {
        moved_at = Some(action.occurred_at()?);
    }
    Ok(moved_at)
}
