#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use contact_relay::config::Config;
use contact_relay::email::{MailError, Mailer, OutboundEmail};
use contact_relay::models::Submission;
use contact_relay::store::{StoreError, SubmissionStore};
use contact_relay::submission::SubmissionHandler;

pub const SENDER: &str = "noreply@example.com";
pub const RECIPIENT: &str = "owner@example.com";
pub const MAX_BODY_SIZE: usize = 4096;

/// In-memory store that records every write and can be told to fail.
#[derive(Default)]
pub struct RecordingStore {
    items: Mutex<Vec<Submission>>,
    fail: AtomicBool,
}

impl RecordingStore {
    pub fn failing() -> Self {
        let store = Self::default();
        store.fail.store(true, Ordering::SeqCst);
        store
    }

    pub fn items(&self) -> Vec<Submission> {
        self.items.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionStore for RecordingStore {
    async fn put(&self, submission: &Submission) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(StoreError::from("simulated store outage"));
        }
        self.items.lock().unwrap().push(submission.clone());
        Ok(())
    }
}

/// In-memory mailer that records every message and can be told to fail.
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<OutboundEmail>>,
    fail: AtomicBool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        let mailer = Self::default();
        mailer.fail.store(true, Ordering::SeqCst);
        mailer
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        if self.fail.load(Ordering::SeqCst) {
            return Err(MailError::from("simulated mail outage"));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

pub fn test_config() -> Config {
    let max_body_size = MAX_BODY_SIZE.to_string();
    Config::from_lookup(lookup(&[
        ("CONTACT_TABLE_NAME", "contact_submissions"),
        ("CONTACT_SENDER_EMAIL", SENDER),
        ("CONTACT_RECIPIENT_EMAIL", RECIPIENT),
        ("CONTACT_MAX_BODY_SIZE", max_body_size.as_str()),
    ]))
    .expect("test config must load")
}

pub fn handler(store: Arc<RecordingStore>, mailer: Arc<RecordingMailer>) -> SubmissionHandler {
    SubmissionHandler::new(store, mailer, test_config().notification)
}

/// A running test server backed by recording fakes.

pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<RecordingStore>,
    pub mailer: Arc<RecordingMailer>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a JSON body to the root path, return (body, status, headers).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode, reqwest::header::HeaderMap) {
        self.submit_raw("/", data.to_string()).await
    }

    /// Submit a raw body to the given path, return (body, status, headers).
    pub async fn submit_raw(
        &self,
        path: &str,
        body: impl Into<reqwest::Body>,
    ) -> (Value, StatusCode, reqwest::header::HeaderMap) {
        let resp = self
            .client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let headers = resp.headers().clone();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status, headers)
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(RecordingStore::default(), RecordingMailer::default()).await
}

pub async fn spawn_app_with(store: RecordingStore, mailer: RecordingMailer) -> TestApp {
    let store = Arc::new(store);
    let mailer = Arc::new(mailer);

    let app = contact_relay::build_app(&test_config(), store.clone(), mailer.clone());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        store,
        mailer,
    }
}

/// Assert the three headers every response must carry.

pub fn assert_fixed_headers(headers: &reqwest::header::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(headers["access-control-allow-headers"], "Content-Type");
    assert_eq!(headers["content-type"], "application/json");
}
