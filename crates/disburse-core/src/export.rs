//! CSV export of every card in the terminal list.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::board::BoardClient;
use crate::config::ExportConfig;
use crate::domain::{Card, DisplayClock};
use crate::error::{CardError, ExportError};
use crate::http_client::HttpClient;

/// Outcome of a completed export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub rows_written: usize,
    pub output_path: PathBuf,
}

/// Fetches the terminal list, enriches each card, and writes them to `config.output_path`.
///
/// Any failure ends the run. Rows written before a failing card stay in the file.
pub async fn export_csv(
    config: &ExportConfig,
    http_client: Arc<dyn HttpClient>,
) -> Result<ExportSummary, ExportError> {
    let board = BoardClient::new(http_client, config);

    let cards = board.list_cards(&config.terminal_list).await?;
    info!(list = %config.terminal_list, cards = cards.len(), "fetched terminal list");
    if cards.is_empty() {
        return Err(ExportError::NoCards {
            list: config.terminal_list.clone(),
        });
    }

    let file = File::create(&config.output_path).map_err(|source| ExportError::CreateOutput {
        path: config.output_path.clone(),
        source,
    })?;

    let rows_written = write_cards(
        file,
        cards,
        &board,
        &config.terminal_list,
        config.display,
    )
    .await?;

    Ok(ExportSummary {
        rows_written,
        output_path: config.output_path.clone(),
    })
}

/// Writes the header, then one row per card as soon as it is enriched.
pub async fn write_cards<W: Write>(
    sink: W,
    cards: Vec<Card>,
    board: &BoardClient,
    terminal_list: &str,
    display: DisplayClock,
) -> Result<usize, ExportError> {
    let mut writer = csv::Writer::from_writer(sink);
    writer.write_record(Card::CSV_HEADER)?;

    let mut rows_written = 0;
    for mut card in cards {
        let row = match card.inflate(board, terminal_list).await {
            Ok(()) => card.csv_row(display).map_err(CardError::from),
            Err(source) => Err(source),
        };
        let row = match row {
            Ok(row) => row,
            Err(source) => {
                writer.flush()?;
                return Err(ExportError::Card {
                    id: card.id.to_string(),
                    title: card.title,
                    source,
                });
            }
        };

        writer.write_record(row)?;
        rows_written += 1;
        info!(card = %card.id, title = %card.title, "exported card");
    }

    writer.flush()?;
    Ok(rows_written)
}
