// SPDX-FileCopyrightText: 2026 Paideia Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock LLM provider for deterministic testing.
//!
//! `MockTutorProvider` implements `TutorProvider` with pre-configured
//! responses and request capture, enabling fast, CI-runnable tests without
//! external API calls. An optional artificial delay supports timeout tests.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use paideia_core::traits::TutorProvider;
use paideia_core::types::{TutorRequest, TutorResponse};
use paideia_core::PaideiaError;

/// A mock tutor provider that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue. When the queue is empty, a
/// default "mock response" text is returned. Every request is captured for
/// later assertions.
pub struct MockTutorProvider {
    responses: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<TutorRequest>>>,
    delay: Option<Duration>,
}

impl MockTutorProvider {
    /// Create a mock provider with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Create a mock provider pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<String>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    /// Create a mock provider that sleeps before answering, for timeout
    /// tests.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: Some(delay),
        }
    }

    /// Add a response to the end of the queue.
    pub async fn add_response(&self, text: String) {
        self.responses.lock().await.push_back(text);
    }

    /// Requests captured so far, in call order.
    pub async fn captured_requests(&self) -> Vec<TutorRequest> {
        self.requests.lock().await.clone()
    }

    /// Number of completion calls made against this mock.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    async fn next_response(&self) -> String {
        self.responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock response".to_string())
    }
}

impl Default for MockTutorProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TutorProvider for MockTutorProvider {
    async fn complete(&self, request: TutorRequest) -> Result<TutorResponse, PaideiaError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.requests.lock().await.push(request);
        let content = self.next_response().await;
        Ok(TutorResponse {
            id: format!("mock-resp-{}", uuid::Uuid::new_v4()),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paideia_core::types::{DetailLevel, SessionId};

    fn request(text: &str) -> TutorRequest {
        TutorRequest {
            session_id: SessionId("s1".into()),
            utterance: text.to_string(),
            constraint: "none".to_string(),
            detail_level: DetailLevel::Medium,
        }
    }

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let provider = MockTutorProvider::with_responses(vec!["one".into(), "two".into()]);
        assert_eq!(provider.complete(request("a")).await.unwrap().content, "one");
        assert_eq!(provider.complete(request("b")).await.unwrap().content, "two");
        // Queue exhausted: default response.
        assert_eq!(
            provider.complete(request("c")).await.unwrap().content,
            "mock response"
        );
    }

    #[tokio::test]
    async fn captures_requests() {
        let provider = MockTutorProvider::new();
        provider.complete(request("hello")).await.unwrap();
        let captured = provider.captured_requests().await;
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].utterance, "hello");
        assert_eq!(provider.call_count().await, 1);
    }
}
