//! Fills in the derived fields of a [`Card`].

use tracing::debug;

use crate::board::BoardClient;
use crate::domain::{last_move_into, ApplicantDetails, Card};
use crate::error::CardError;

impl Card {
    /// Populates the derived fields in order: description details, amount paid,
    /// fund transfer date, request date.
    ///
    /// The first failure stops enrichment and is returned. A card that never moved into
    /// `terminal_list` keeps an empty fund transfer date.
    pub async fn inflate(
        &mut self,
        board: &BoardClient,
        terminal_list: &str,
    ) -> Result<(), CardError> {
        self.details = ApplicantDetails::parse(&self.description)?;
        self.inflate_amount_paid(board).await?;
        self.inflate_card_history(board, terminal_list).await?;
        self.request_date = Some(self.id.created_at()?);
        Ok(())
    }

    async fn inflate_amount_paid(&mut self, board: &BoardClient) -> Result<(), CardError> {
        let items = board.custom_field_items(&self.id).await?;

        // The board defines a single custom field: the amount paid.
        let item = items.first().ok_or_else(|| CardError::MissingAmountPaid {
            title: self.title.clone(),
        })?;

        let raw = item.number();
        let amount = raw.parse().map_err(|_| CardError::InvalidAmountPaid {
            title: self.title.clone(),
            value: raw.to_owned(),
        })?;
        self.amount_paid = amount;
        Ok(())
    }

    async fn inflate_card_history(
        &mut self,
        board: &BoardClient,
        terminal_list: &str,
    ) -> Result<(), CardError> {
        let actions = board.list_move_actions(&self.id).await?;
        if let Some(moved_at) = last_move_into(&actions, terminal_list)? {
            self.fund_transfer_date = Some(moved_at);
        } else {
            debug!(card = %self.id, "no move into terminal list recorded");
        }
        Ok(())
    }
}
