use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use clickchain_signup::config::Config;
use clickchain_signup::sheets::{RowSink, SinkError};

/// Captures appended rows instead of calling the Sheets API.
pub struct RecordingSink {
    rows: Mutex<Vec<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    pub async fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().await.clone()
    }
}

#[async_trait]
impl RowSink for RecordingSink {
    async fn append_row(&self, row: &[String]) -> Result<(), SinkError> {
        self.rows.lock().await.push(row.to_vec());
        Ok(())
    }
}

/// Fails every append, as a permission-denied destination would.
pub struct FailingSink;

#[async_trait]
impl RowSink for FailingSink {
    async fn append_row(&self, _row: &[String]) -> Result<(), SinkError> {
        Err(SinkError::from(
            "Sheets API returned 403: The caller does not have permission",
        ))
    }
}

/// A running test server instance with a substitute destination sink.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub sink: Option<Arc<RecordingSink>>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// POST a sign-up body, return (body, status).
    pub async fn submit(&self, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/submit-signup"))
            .json(body)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// A well-formed sign-up body.
    pub fn valid_body() -> Value {
        json!({
            "firstName": "Jane",
            "lastName": "Doe",
            "email": "jane.doe@example.com",
            "flowType": "talentflow",
        })
    }

    /// Rows captured by the recording sink.
    pub async fn rows(&self) -> Vec<Vec<String>> {
        self.sink
            .as_ref()
            .expect("test app has no recording sink")
            .rows()
            .await
    }
}

fn test_config() -> Config {
    Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        log_level: "warn".to_string(),
        google: None,
    }
}

async fn spawn_with(sheets: Option<Arc<dyn RowSink>>) -> (SocketAddr, Client) {
    let app = clickchain_signup::build_app(test_config(), sheets);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    (addr, client)
}

/// Spawn a test app whose sink records every appended row.
pub async fn spawn_app() -> TestApp {
    let sink = Arc::new(RecordingSink::new());
    let (addr, client) = spawn_with(Some(sink.clone() as Arc<dyn RowSink>)).await;

    TestApp {
        addr,
        client,
        sink: Some(sink),
    }
}

/// Spawn a test app whose sink rejects every append.
pub async fn spawn_app_with_failing_sink() -> TestApp {
    let (addr, client) = spawn_with(Some(Arc::new(FailingSink) as Arc<dyn RowSink>)).await;

    TestApp {
        addr,
        client,
        sink: None,
    }
}

/// Spawn a test app with no Sheets credentials configured.
pub async fn spawn_app_without_sheets() -> TestApp {
    let (addr, client) = spawn_with(None).await;

    TestApp {
        addr,
        client,
        sink: None,
    }
}
