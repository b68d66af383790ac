//! End-to-end export journeys: list fetch, enrichment, CSV output.

mod support;

use std::sync::Arc;
use std::time::Duration;

use disburse_core::{
    export_csv, parse_utc_offset, ApiCredentials, BoardError, CardError, DisplayClock, Endpoint,
    ExportConfig, ExportError, FetchError, ReqwestHttpClient, RetryConfig, ValidationError,
};
use tempfile::tempdir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{
    actions_path, amount_json, card_json, custom_fields_path, list_cards_path, move_json,
    test_config, ScriptedHttpClient, CARD_ID, PAID_LIST,
};

const HEADER: &str = concat!(
    "Name,Email,Institution,Location,",
    "Amount Paid,Reason,Fund Transfer Date,Request Date"
);

async fn slow_empty_list_server(delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(list_cards_path()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

// =============================================================================
// Against a live HTTP server
// =============================================================================

#[tokio::test]
async fn exporting_one_paid_card_writes_header_and_one_row() {
    // Given: a board API with one paid card
    let server = MockServer::start().await;
    let cards = serde_json::json!([card_json(
        CARD_ID,
        "Request: Alice",
        "Name: Alice\nEmail: a@example.com\nInstitution: State U\nLocation: Ohio\nDescription: rent"
    )]);

    Mock::given(method("GET"))
        .and(path(list_cards_path()))
        .and(query_param("key", "live-key"))
        .and(query_param("token", "live-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(cards))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(custom_fields_path(CARD_ID)))
        .respond_with(ResponseTemplate::new(200).set_body_string(amount_json("50")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(actions_path(CARD_ID)))
        .and(query_param("filter", "updateCard:idList"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "[{}]",
            move_json("a1", PAID_LIST, "2020-04-01T12:30:00.000Z")
        )))
        .mount(&server)
        .await;

    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("output.csv");
    let config = ExportConfig::new(ApiCredentials::new("live-key", "live-token"))
        .with_api_base(server.uri())
        .expect("valid base")
        .with_output_path(&output);

    // When: the export runs
    let summary = export_csv(&config, Arc::new(ReqwestHttpClient::new()))
        .await
        .expect("export should succeed");

    // Then: the file has the header plus one fully populated row
    assert_eq!(summary.rows_written, 1);
    assert_eq!(summary.output_path, output);

    let contents = std::fs::read_to_string(&output).expect("output exists");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER);
    assert_eq!(
        lines[1],
        "Alice,a@example.com,State U,Ohio,50,rent,01 Apr 20 12:30,27 Mar 20 00:15"
    );
}

#[tokio::test]
async fn rate_limited_list_fetch_is_retried_against_live_server() {
    let server = MockServer::start().await;

    // Mounted first, so it answers until its single use is spent.
    Mock::given(method("GET"))
        .and(path(list_cards_path()))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(list_cards_path()))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let dir = tempdir().expect("tempdir");
    let config = ExportConfig::new(ApiCredentials::new("k", "t"))
        .with_api_base(server.uri())
        .expect("valid base")
        .with_retry(RetryConfig::fixed(Duration::from_millis(10), 10))
        .with_output_path(dir.path().join("output.csv"));

    let error = export_csv(&config, Arc::new(ReqwestHttpClient::new()))
        .await
        .expect_err("empty list after retry");

    assert!(matches!(error, ExportError::NoCards { .. }));
    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 2);
}

#[tokio::test]
async fn slow_response_is_awaited_when_no_timeout_is_configured() {
    // Given: a server that takes two seconds to answer the list request
    let server = slow_empty_list_server(Duration::from_secs(2)).await;
    let dir = tempdir().expect("tempdir");
    let config = ExportConfig::new(ApiCredentials::new("k", "t"))
        .with_api_base(server.uri())
        .expect("valid base")
        .with_output_path(dir.path().join("output.csv"));

    // When: the export runs with the default configuration
    let error = export_csv(&config, Arc::new(ReqwestHttpClient::new()))
        .await
        .expect_err("empty list");

    // Then: the response was read rather than abandoned
    assert!(matches!(error, ExportError::NoCards { .. }));
}

#[tokio::test]
async fn configured_timeout_abandons_slow_response() {
    let server = slow_empty_list_server(Duration::from_secs(2)).await;
    let dir = tempdir().expect("tempdir");
    let config = ExportConfig::new(ApiCredentials::new("k", "t"))
        .with_api_base(server.uri())
        .expect("valid base")
        .with_request_timeout_ms(200)
        .with_output_path(dir.path().join("output.csv"));

    let error = export_csv(&config, Arc::new(ReqwestHttpClient::new()))
        .await
        .expect_err("must time out");

    assert!(matches!(
        error,
        ExportError::Board(BoardError::Fetch {
            endpoint: Endpoint::ListCards,
            source: FetchError::Transport(_),
        })
    ));
}

// =============================================================================
// Failure journeys
// =============================================================================

#[tokio::test]
async fn empty_terminal_list_faults_without_creating_output() {
    let client = Arc::new(ScriptedHttpClient::new().respond_json(&list_cards_path(), "[]"));
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("output.csv");
    let config = test_config().with_output_path(&output);

    let error = export_csv(&config, client).await.expect_err("must fault");

    assert!(matches!(error, ExportError::NoCards { ref list } if list == PAID_LIST));
    assert!(!output.exists());
}

#[tokio::test]
async fn undecodable_list_response_halts_the_run() {
    let client = Arc::new(
        ScriptedHttpClient::new()
            .respond_json(&list_cards_path(), r#"{"message":"invalid token"}"#),
    );
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("output.csv");
    let config = test_config().with_output_path(&output);

    let error = export_csv(&config, client).await.expect_err("must fault");

    assert!(matches!(
        error,
        ExportError::Board(BoardError::Json {
            endpoint: Endpoint::ListCards,
            ..
        })
    ));
    assert!(!output.exists());
}

#[tokio::test]
async fn failing_card_halts_export_and_keeps_earlier_rows() {
    // Given: two cards, the second one without an amount paid
    let second_id = "5e8a0000aaaaaaaaaaaaaaaa";
    let cards = serde_json::json!([
        card_json(CARD_ID, "First", "Name: Alice"),
        card_json(second_id, "Second", "Name: Bob"),
        card_json("5e9b0000bbbbbbbbbbbbbbbb", "Third", "Name: Carol"),
    ]);
    let client = Arc::new(
        ScriptedHttpClient::new()
            .respond_json(&list_cards_path(), &cards.to_string())
            .respond_json(&custom_fields_path(CARD_ID), &amount_json("75"))
            .respond_json(&actions_path(CARD_ID), "[]")
            .respond_json(&custom_fields_path(second_id), "[]"),
    );
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("output.csv");
    let config = test_config().with_output_path(&output);

    // When: the export runs
    let error = export_csv(&config, client.clone()).await.expect_err("must fault");

    // Then: the run stops at the second card
    match &error {
        ExportError::Card { title, source, .. } => {
            assert_eq!(title, "Second");
            assert!(matches!(source, CardError::MissingAmountPaid { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(client
        .requests()
        .iter()
        .all(|request| !request.url.contains("5e9b0000bbbbbbbbbbbbbbbb")));

    // And: the header and first row are already on disk
    let contents = std::fs::read_to_string(&output).expect("output exists");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec![HEADER, "Alice,,,,75,,,27 Mar 20 00:15"]);
}

#[tokio::test]
async fn unwritable_output_path_faults() {
    let card = serde_json::json!([card_json(CARD_ID, "First", "Name: Alice")]);
    let client = Arc::new(
        ScriptedHttpClient::new().respond_json(&list_cards_path(), &card.to_string()),
    );
    let dir = tempdir().expect("tempdir");
    let config = test_config().with_output_path(dir.path().join("missing").join("output.csv"));

    let error = export_csv(&config, client).await.expect_err("must fault");

    assert!(matches!(error, ExportError::CreateOutput { .. }));
}

#[tokio::test]
async fn fields_containing_commas_are_quoted() {
    let cards = serde_json::json!([card_json(
        CARD_ID,
        "First",
        "Name: Smith, Alice\nDescription: books, fees"
    )]);
    let client = Arc::new(
        ScriptedHttpClient::new()
            .respond_json(&list_cards_path(), &cards.to_string())
            .respond_json(&custom_fields_path(CARD_ID), &amount_json("20"))
            .respond_json(&actions_path(CARD_ID), "[]"),
    );
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("output.csv");

    export_csv(&test_config().with_output_path(&output), client)
        .await
        .expect("must succeed");

    let contents = std::fs::read_to_string(&output).expect("output exists");
    assert_eq!(
        contents.lines().nth(1),
        Some(r#""Smith, Alice",,,,20,"books, fees",,27 Mar 20 00:15"#)
    );
}

#[tokio::test]
async fn transfer_date_outside_display_range_faults_the_card() {
    // Given: a transfer date that lands past year 9999 once shifted to +05:00
    let cards = serde_json::json!([card_json(CARD_ID, "Far Future", "Name: Alice")]);
    let client = Arc::new(
        ScriptedHttpClient::new()
            .respond_json(&list_cards_path(), &cards.to_string())
            .respond_json(&custom_fields_path(CARD_ID), &amount_json("10"))
            .respond_json(
                &actions_path(CARD_ID),
                &format!("[{}]", move_json("a1", PAID_LIST, "9999-12-31T23:00:00Z")),
            ),
    );
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("output.csv");
    let offset = parse_utc_offset("+05:00").expect("valid offset");
    let config = test_config()
        .with_output_path(&output)
        .with_display(DisplayClock::with_offset(offset));

    // When: the export runs
    let error = export_csv(&config, client).await.expect_err("must fault");

    // Then: the card is reported and only the header was written
    match &error {
        ExportError::Card { title, source, .. } => {
            assert_eq!(title, "Far Future");
            assert!(matches!(
                source,
                CardError::Validation(ValidationError::UnrepresentableDate { .. })
            ));
        }
        other => panic!("unexpected error: {other}"),
    }
    let contents = std::fs::read_to_string(&output).expect("output exists");
    assert_eq!(contents.lines().collect::<Vec<_>>(), vec![HEADER]);
}
