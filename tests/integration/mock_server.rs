//! Mock HTTP backend setup for integration tests

use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use tokio::sync::Mutex;
use tts_form::{FormController, HttpBackend, InMemoryView};

pub type TestController = FormController<HttpBackend, InMemoryView>;

/// Test fixture that manages a mock speech backend
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Controller bound to the mock server with a fresh in-memory view
    pub fn controller(&self) -> TestController {
        controller_for(&self.base_url)
    }

    /// Mock `GET /get_voices` with a JSON body
    pub async fn mock_voices(&self, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", "/get_voices")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock `POST /convert` answering `body` with `status`
    pub async fn mock_convert(&self, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/convert")
            .match_header("content-type", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Mock `POST /convert` that only matches the given JSON request body
    pub async fn mock_convert_expecting(
        &self,
        request: serde_json::Value,
        response: &str,
    ) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("POST", "/convert")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(request))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response)
            .create_async()
            .await
    }

    /// Mock a raw (non-JSON) body on any path
    pub async fn mock_raw(&self, method: &str, path: &str, status: usize, body: &[u8]) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock(method, path)
            .with_status(status)
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn controller_for(base_url: &str) -> TestController {
    let backend = HttpBackend::builder()
        .base_url(base_url)
        .build()
        .expect("backend");
    FormController::new(Arc::new(backend), Arc::new(InMemoryView::new()))
}

/// A base URL nothing listens on, for connection failures
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().expect("addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
