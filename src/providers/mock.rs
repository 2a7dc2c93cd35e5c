/*!
 * Mock model implementations for testing.
 *
 * These mocks implement the same traits as the real backends:
 * - `MockModel::working()` always answers with a canned echo
 * - `MockModel::failing()` always errors
 * - `MockModel::scripted(...)` plays back a fixed sequence of answers
 *
 * Every call records the prompt it received, so tests can assert on the
 * exact text sent to a backend without any network involved.
 */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::errors::ProviderError;
use crate::providers::{CompletionModel, VisionModel};

/// Behavior mode for the mock model
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always answers, echoing the prompt
    Working,
    /// Always fails with an API error
    Failing,
    /// Plays back a fixed sequence of answers, one per call
    Scripted(Vec<String>),
}

/// Mock model implementing both the completion and vision traits
#[derive(Debug)]
pub struct MockModel {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of calls made so far
    call_count: Arc<AtomicUsize>,
    /// Prompts received, in call order
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockModel {
    /// Create a mock with the given behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock that echoes prompts
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that always fails
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock that answers with the given responses in order
    pub fn scripted<S: Into<String>>(responses: Vec<S>) -> Self {
        Self::new(MockBehavior::Scripted(
            responses.into_iter().map(Into::into).collect(),
        ))
    }

    /// Number of calls made against this mock
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    fn answer(&self, prompt: &str) -> Result<String, ProviderError> {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        match &self.behavior {
            MockBehavior::Working => Ok(format!("[ANSWERED] {}", prompt)),
            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),
            MockBehavior::Scripted(responses) => match responses.get(count) {
                Some(response) => Ok(response.clone()),
                None => Err(ProviderError::RequestFailed(format!(
                    "Scripted mock exhausted after {} responses",
                    responses.len()
                ))),
            },
        }
    }
}

impl Clone for MockModel {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            call_count: Arc::clone(&self.call_count),
            prompts: Arc::clone(&self.prompts),
        }
    }
}

#[async_trait]
impl CompletionModel for MockModel {
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        self.answer(prompt)
    }
}

#[async_trait]
impl VisionModel for MockModel {
    async fn describe_image(
        &self,
        prompt: &str,
        _image_base64: &str,
    ) -> Result<String, ProviderError> {
        self.answer(prompt)
    }
}
