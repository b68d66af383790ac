//! Scripted transport shared by the behavior tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use disburse_core::{
    ApiCredentials, BoardClient, ExportConfig, HttpClient, HttpError, HttpRequest, HttpResponse,
};

pub const API_BASE: &str = "https://board.test";
pub const PAID_LIST: &str = "5e7d45a393cb705078c08e5b";
pub const CARD_ID: &str = "5e7d45a393cb705078c08e5b";

type Scripted = Result<HttpResponse, HttpError>;

/// Answers requests whose path contains a registered fragment.
///
/// Responses for a route are consumed in order; the last one repeats.
/// Unrouted requests get a 404 with a non-JSON body.
#[derive(Default)]
pub struct ScriptedHttpClient {
    routes: Mutex<Vec<(String, VecDeque<Scripted>)>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, path_fragment: &str, response: HttpResponse) -> Self {
        self.push(path_fragment, Ok(response))
    }

    pub fn respond_json(self, path_fragment: &str, body: &str) -> Self {
        self.respond(path_fragment, HttpResponse::ok_json(body))
    }

    pub fn fail(self, path_fragment: &str, error: HttpError) -> Self {
        self.push(path_fragment, Err(error))
    }

    fn push(self, path_fragment: &str, scripted: Scripted) -> Self {
        {
            let mut routes = self.routes.lock().expect("routes lock");
            match routes.iter_mut().find(|(fragment, _)| fragment == path_fragment) {
                Some((_, queue)) => queue.push_back(scripted),
                None => routes.push((path_fragment.to_owned(), VecDeque::from([scripted]))),
            }
        }
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().expect("requests lock").len()
    }

    fn next_response(&self, request: &HttpRequest) -> Scripted {
        let mut routes = self.routes.lock().expect("routes lock");
        let path = request.redacted_url();
        let Some((_, queue)) = routes
            .iter_mut()
            .find(|(fragment, _)| path.contains(fragment.as_str()))
        else {
            return Ok(HttpResponse::new(404, "not found"));
        };

        if queue.len() > 1 {
            queue.pop_front().expect("queue is non-empty")
        } else {
            queue.front().cloned().expect("route has a response")
        }
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        let response = self.next_response(&request);
        self.requests.lock().expect("requests lock").push(request);
        Box::pin(async move { response })
    }
}

pub fn test_config() -> ExportConfig {
    ExportConfig::new(ApiCredentials::new("test-key", "test-token"))
        .with_api_base(API_BASE)
        .expect("valid api base")
        .with_terminal_list(PAID_LIST)
}

pub fn board(client: &Arc<ScriptedHttpClient>) -> BoardClient {
    BoardClient::new(client.clone(), &test_config())
}

pub fn custom_fields_path(card_id: &str) -> String {
    format!("/1/cards/{card_id}/customFieldItems")
}

pub fn actions_path(card_id: &str) -> String {
    format!("/1/cards/{card_id}/actions")
}

pub fn list_cards_path() -> String {
    format!("/1/lists/{PAID_LIST}/cards")
}

pub fn amount_json(number: &str) -> String {
    format!(
        r#"[{{"id":"cfi1","value":{{"number":"{number}"}},"idCustomField":"cf1","idModel":"card"}}]"#
    )
}

pub fn move_json(id: &str, list_after: &str, date: &str) -> String {
    format!(
        r#"{{"id":"{id}","type":"updateCard","date":"{date}","data":{{"listBefore":{{"id":"approved","name":"Approved"}},"listAfter":{{"id":"{list_after}","name":"Paid"}}}}}}"#
    )
}

pub fn card_json(id: &str, title: &str, desc: &str) -> serde_json::Value {
    serde_json::json!({ "id": id, "name": title, "desc": desc, "idList": PAID_LIST })
}
