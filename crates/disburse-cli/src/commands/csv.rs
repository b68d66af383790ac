//! `csv` command: export the completed-payments list.

use std::sync::Arc;

use disburse_core::{
    export_csv, parse_utc_offset, ApiCredentials, DisplayClock, ExportConfig, ReqwestHttpClient,
};

use crate::cli::CsvArgs;
use crate::error::CliError;

pub async fn run(args: &CsvArgs) -> Result<(), CliError> {
    let config = build_config(args)?;
    let summary = export_csv(&config, Arc::new(ReqwestHttpClient::new())).await?;

    eprintln!(
        "✓ Exported {} rows to {}",
        summary.rows_written,
        summary.output_path.display()
    );
    Ok(())
}

fn build_config(args: &CsvArgs) -> Result<ExportConfig, CliError> {
    let credentials = ApiCredentials::from_args_or_env(args.api_key.clone(), args.token.clone());
    let offset = parse_utc_offset(&args.utc_offset)?;

    let mut config = ExportConfig::new(credentials)
        .with_api_base(args.api_base.as_str())?
        .with_terminal_list(args.list.as_str())
        .with_output_path(args.out.as_str())
        .with_display(DisplayClock::with_offset(offset));
    if let Some(timeout_ms) = args.timeout_ms {
        config = config.with_request_timeout_ms(timeout_ms);
    }
    Ok(config)
}
