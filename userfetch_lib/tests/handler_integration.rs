use std::sync::{Arc, Mutex};

use userfetch_lib::userfetch_api::Client;
use userfetch_lib::{ErrorClass, FixedProbe, GlobalErrorHandler, Notify};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct RecordingNotify(Arc<Mutex<Vec<String>>>);

impl Notify for RecordingNotify {
    fn error(&self, message: &str, _title: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}

fn recording_handler(online: bool) -> (GlobalErrorHandler, Arc<Mutex<Vec<String>>>) {
    let shown = Arc::new(Mutex::new(Vec::new()));
    let sink = shown.clone();
    let handler = GlobalErrorHandler::new(Box::new(FixedProbe(online)), move || {
        Box::new(RecordingNotify(sink.clone())) as Box<dyn Notify>
    });
    (handler, shown)
}

#[tokio::test]
async fn misspelled_endpoint_yields_exactly_one_client_side_toast() {
    let mock_server = MockServer::start().await;

    // Both retry layers run their course before the error reaches the
    // handler: four requests hit the server for one toast.
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .expect(4)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_users().await.unwrap_err();

    let (handler, shown) = recording_handler(true);
    handler.handle(&err);

    let shown = shown.lock().unwrap();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0], ErrorClass::ClientSide.message());
}

#[tokio::test]
async fn offline_yields_network_issue_toast_whatever_the_server_said() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(404).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_users().await.unwrap_err();

    let (handler, shown) = recording_handler(false);
    handler.handle(&err);

    assert_eq!(shown.lock().unwrap()[0], ErrorClass::NetworkIssue.message());
}

#[tokio::test]
async fn server_error_yields_server_side_toast() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.get_users_correct().await.unwrap_err();

    let (handler, shown) = recording_handler(true);
    handler.handle(&err);

    assert_eq!(shown.lock().unwrap()[0], ErrorClass::ServerSide.message());
}
