//! # Domain Models
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Card`] | One exported card with its derived fields |
//! | [`CardId`] | Service-assigned id carrying the creation time |
//! | [`ApplicantDetails`] | Fields parsed from the card description |
//! | [`CustomFieldItem`] | Custom-field value holding the amount paid |
//! | [`CardAction`] | Activity-log entry used to date the fund transfer |
//! | [`DisplayClock`] | Fixed-offset `DD Mon YY HH:MM` rendering |

mod action;
mod card;
mod card_id;
mod custom_field;
mod description;
mod display_date;

pub use action::{last_move_into, CardAction, CardActionData, ListRef};
pub use card::Card;
pub use card_id::{decode_timestamp, CardId};
pub use custom_field::CustomFieldItem;
pub use description::ApplicantDetails;
pub use display_date::{parse_utc_offset, DisplayClock};
